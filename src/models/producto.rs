use serde::{Deserialize, Serialize};

/// A catalog item as stored in the `productos` table.
///
/// `id` is `None` only before the first save; the store assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Producto {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

/// Body of `POST` and `PUT` requests.
///
/// Every field is optional at the wire level so that a missing field surfaces
/// as a field-level validation message instead of a deserialization error.
/// A client supplied `id` is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductoRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio: Option<f64>,
    #[serde(default)]
    pub stock: Option<i32>,
}

/// Field values that passed validation and may be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductoData {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
}

impl From<ProductoData> for Producto {
    fn from(data: ProductoData) -> Self {
        Self {
            id: None,
            nombre: data.nombre,
            descripcion: data.descripcion,
            precio: data.precio,
            stock: data.stock,
        }
    }
}

impl Producto {
    /// Overwrites every mutable field with `data`, keeping the identifier.
    pub fn replace_with(&mut self, data: ProductoData) {
        self.nombre = data.nombre;
        self.descripcion = data.descripcion;
        self.precio = data.precio;
        self.stock = data.stock;
    }
}
