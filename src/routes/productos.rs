use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
};
use http::StatusCode;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Principal, Producto, ProductoRequest},
    validation::validate_producto,
};

pub async fn list_productos(State(state): State<AppState>) -> Result<Json<Vec<Producto>>> {
    let productos = state.productos.find_all().await?;

    Ok(Json(productos))
}

pub async fn get_producto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Producto>> {
    let producto = state
        .productos
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(producto))
}

pub async fn create_producto(
    State(state): State<AppState>,
    Extension(actor): Extension<Principal>,
    payload: std::result::Result<Json<ProductoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Producto>)> {
    let Json(payload) = payload?;
    let data = validate_producto(&payload)?;

    let producto = state.productos.save(data, &actor).await?;

    Ok((StatusCode::CREATED, Json(producto)))
}

pub async fn update_producto(
    State(state): State<AppState>,
    Extension(actor): Extension<Principal>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<ProductoRequest>, JsonRejection>,
) -> Result<Json<Producto>> {
    let Json(payload) = payload?;
    let data = validate_producto(&payload)?;

    let producto = state
        .productos
        .update(id, data, &actor)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(producto))
}

pub async fn delete_producto(
    State(state): State<AppState>,
    Extension(actor): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    if !state.productos.delete_by_id(id, &actor).await? {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}
