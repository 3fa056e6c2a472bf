mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{error::Result, models::Producto};

pub use memory::InMemoryProductoRepository;
pub use postgres::PgProductoRepository;

/// CRUD primitives over the `productos` store.
///
/// Each call is atomic on its own; callers compose them without a transaction.
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// All rows in insertion order.
    async fn find_all(&self) -> Result<Vec<Producto>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Producto>>;

    /// Inserts when `producto.id` is `None`, otherwise overwrites that row.
    ///
    /// Overwriting a row that no longer exists fails with `AppError::NotFound`.
    async fn save(&self, producto: Producto) -> Result<Producto>;

    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    async fn check_health(&self) -> Result<()>;

    /// Short label for logs and the readiness probe.
    fn kind(&self) -> &'static str;
}
