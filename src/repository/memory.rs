use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::ProductoRepository;
use crate::{
    error::{AppError, Result},
    models::Producto,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Producto>,
    last_id: i64,
}

/// Process-local store used when no database is configured.
///
/// Ids are handed out from a counter that never goes backwards, so ascending
/// key order is insertion order.
#[derive(Default)]
pub struct InMemoryProductoRepository {
    table: RwLock<Table>,
}

impl InMemoryProductoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn find_all(&self) -> Result<Vec<Producto>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Producto>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut producto: Producto) -> Result<Producto> {
        let mut table = self.table.write().await;

        let id = match producto.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(AppError::NotFound),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        producto.id = Some(id);
        table.rows.insert(id, producto.clone());

        Ok(producto)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn check_health(&self) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
