use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductoRepository;
use crate::{
    database,
    error::{AppError, Result},
    models::Producto,
    queries::producto_queries,
};

#[derive(Clone)]
pub struct PgProductoRepository {
    pool: PgPool,
}

impl PgProductoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductoRepository for PgProductoRepository {
    async fn find_all(&self) -> Result<Vec<Producto>> {
        producto_queries::find_all(&self.pool).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Producto>> {
        producto_queries::find_by_id(&self.pool, id).await
    }

    async fn save(&self, producto: Producto) -> Result<Producto> {
        match producto.id {
            None => producto_queries::insert(&self.pool, &producto).await,
            Some(id) => producto_queries::update(&self.pool, id, &producto)
                .await?
                .ok_or(AppError::NotFound),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let deleted = producto_queries::delete_by_id(&self.pool, id).await?;
        tracing::debug!("Deleted {} row(s) for producto {}", deleted, id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        producto_queries::exists_by_id(&self.pool, id).await
    }

    async fn check_health(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }

    fn kind(&self) -> &'static str {
        "postgres"
    }
}
