mod health;
mod productos;

use axum::{Router, middleware, routing::get};

use crate::{AppState, middleware::auth_middleware};

pub fn create_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/productos",
            get(productos::list_productos).post(productos::create_producto),
        )
        .route(
            "/api/productos/{id}",
            get(productos::get_producto)
                .put(productos::update_producto)
                .delete(productos::delete_producto),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
