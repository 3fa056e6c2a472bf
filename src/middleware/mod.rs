use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    AppState,
    auth::{parse_basic_header, required_access},
    error::AppError,
};

/// Authenticates every request with HTTP Basic, then applies the role policy.
///
/// On success the [`Principal`](crate::models::Principal) is stored in the
/// request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Autenticación requerida".to_string()))?;

    let credentials = parse_basic_header(auth_header)?;
    let username = credentials.username.clone();

    let store = state.credentials.clone();
    let principal = tokio::task::spawn_blocking(move || {
        store.authenticate(&credentials.username, &credentials.password)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Credential check aborted: {}", e)))??
    .ok_or_else(|| {
        tracing::warn!("Rejected credentials for '{}'", username);
        AppError::Unauthorized("Credenciales inválidas".to_string())
    })?;

    let access = required_access(req.method(), req.uri().path());
    if !access.allows(principal.role) {
        tracing::warn!(
            "User '{}' with role {} denied {} {}",
            principal.username,
            principal.role,
            req.method(),
            req.uri().path()
        );
        return Err(AppError::Forbidden(
            "Permisos insuficientes".to_string(),
        ));
    }

    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
