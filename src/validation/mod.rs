use serde::Serialize;
use std::{collections::BTreeMap, fmt};

use crate::models::{ProductoData, ProductoRequest};

pub const NOMBRE_OBLIGATORIO: &str = "El nombre del producto es obligatorio";
pub const PRECIO_OBLIGATORIO: &str = "El precio es obligatorio";
pub const PRECIO_POSITIVO: &str = "El precio debe ser un valor positivo";
pub const STOCK_OBLIGATORIO: &str = "El stock es obligatorio";
pub const STOCK_NEGATIVO: &str = "El stock no puede ser negativo";

/// Field name to message mapping returned in the body of a 400 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Checks a request body against the Producto invariants.
///
/// Runs before every write. All violated fields are reported at once.
pub fn validate_producto(payload: &ProductoRequest) -> Result<ProductoData, FieldErrors> {
    let mut errors = FieldErrors::new();

    let nombre = match payload.nombre.as_deref() {
        Some(nombre) if !nombre.trim().is_empty() => Some(nombre.to_string()),
        _ => {
            errors.add("nombre", NOMBRE_OBLIGATORIO);
            None
        }
    };

    let precio = match payload.precio {
        Some(precio) if precio.is_finite() && precio > 0.0 => Some(precio),
        Some(_) => {
            errors.add("precio", PRECIO_POSITIVO);
            None
        }
        None => {
            errors.add("precio", PRECIO_OBLIGATORIO);
            None
        }
    };

    let stock = match payload.stock {
        Some(stock) if stock >= 0 => Some(stock),
        Some(_) => {
            errors.add("stock", STOCK_NEGATIVO);
            None
        }
        None => {
            errors.add("stock", STOCK_OBLIGATORIO);
            None
        }
    };

    match (nombre, precio, stock) {
        (Some(nombre), Some(precio), Some(stock)) => Ok(ProductoData {
            nombre,
            descripcion: payload.descripcion.clone(),
            precio,
            stock,
        }),
        _ => Err(errors),
    }
}
