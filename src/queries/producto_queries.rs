use sqlx::PgPool;

use crate::{error::Result, models::Producto};

pub async fn find_all(pool: &PgPool) -> Result<Vec<Producto>> {
    let productos = sqlx::query_as::<_, Producto>(
        "SELECT id, nombre, descripcion, precio, stock FROM productos ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(productos)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Producto>> {
    let producto = sqlx::query_as::<_, Producto>(
        "SELECT id, nombre, descripcion, precio, stock FROM productos WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(producto)
}

pub async fn insert(pool: &PgPool, producto: &Producto) -> Result<Producto> {
    let producto = sqlx::query_as::<_, Producto>(
        r#"
        INSERT INTO productos (nombre, descripcion, precio, stock)
        VALUES ($1, $2, $3, $4)
        RETURNING id, nombre, descripcion, precio, stock
        "#,
    )
    .bind(&producto.nombre)
    .bind(&producto.descripcion)
    .bind(producto.precio)
    .bind(producto.stock)
    .fetch_one(pool)
    .await?;

    Ok(producto)
}

/// Overwrites every column of row `id`. Returns `None` when the row is gone.
pub async fn update(pool: &PgPool, id: i64, producto: &Producto) -> Result<Option<Producto>> {
    let producto = sqlx::query_as::<_, Producto>(
        r#"
        UPDATE productos
        SET
            nombre = $1,
            descripcion = $2,
            precio = $3,
            stock = $4
        WHERE id = $5
        RETURNING id, nombre, descripcion, precio, stock
        "#,
    )
    .bind(&producto.nombre)
    .bind(&producto.descripcion)
    .bind(producto.precio)
    .bind(producto.stock)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(producto)
}

pub async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM productos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn exists_by_id(pool: &PgPool, id: i64) -> Result<bool> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM productos WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;

    Ok(exists)
}
