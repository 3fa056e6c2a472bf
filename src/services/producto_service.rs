use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    models::{Principal, Producto, ProductoData},
    repository::ProductoRepository,
};

#[derive(Clone)]
pub struct ProductoService {
    repository: Arc<dyn ProductoRepository>,
}

impl ProductoService {
    pub fn new(repository: Arc<dyn ProductoRepository>) -> Self {
        Self { repository }
    }

    pub fn store_kind(&self) -> &'static str {
        self.repository.kind()
    }

    pub async fn check_health(&self) -> Result<()> {
        self.repository.check_health().await
    }

    pub async fn find_all(&self) -> Result<Vec<Producto>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Producto>> {
        self.repository.find_by_id(id).await
    }

    pub async fn save(&self, data: ProductoData, actor: &Principal) -> Result<Producto> {
        let producto = self.repository.save(Producto::from(data)).await?;
        tracing::info!("Producto {:?} created by {}", producto.id, actor.username);
        Ok(producto)
    }

    /// Replaces every field of producto `id`. `None` when it does not exist.
    pub async fn update(
        &self,
        id: i64,
        data: ProductoData,
        actor: &Principal,
    ) -> Result<Option<Producto>> {
        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        existing.replace_with(data);

        match self.repository.save(existing).await {
            Ok(saved) => {
                tracing::info!("Producto {} updated by {}", id, actor.username);
                Ok(Some(saved))
            }
            // deleted between lookup and write
            Err(AppError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete_by_id(&self, id: i64, actor: &Principal) -> Result<bool> {
        if !self.repository.exists_by_id(id).await? {
            return Ok(false);
        }

        self.repository.delete_by_id(id).await?;
        tracing::info!("Producto {} deleted by {}", id, actor.username);

        Ok(true)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.repository.exists_by_id(id).await
    }
}
