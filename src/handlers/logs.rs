// src/handlers/logs.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{envelope::ApiResponse, error::AppError, policy::TenantScope},
    config::AppState,
    middleware::auth::AuthenticatedUser,
};

// GET /api/logs: últimas 100 entradas de la bitácora, acotadas al cliente
// del solicitante salvo para super admins.
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    let entries = db.logs.recent(&scope).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(entries))))
}
