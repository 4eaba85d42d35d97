// src/handlers/clients.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{
        envelope::ApiResponse,
        error::AppError,
        policy::SUPER_ADMIN_LEVEL,
    },
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::tenancy::{ClientCreated, CreateClientPayload},
};

// GET /api/clients
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    let clients = db.clients.list().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(clients))))
}

// POST /api/clients: el alta exige que admin_id resuelva a un usuario
// con nivel de super admin que acompañe al nuevo cliente.
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateClientPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;

    let admin = db
        .users
        .find_by_id(&payload.admin_id)
        .await?
        .ok_or(AppError::UserNotFound)?;
    if admin.permission_level < SUPER_ADMIN_LEVEL {
        return Err(AppError::Forbidden);
    }

    let id = db.clients.create(&payload.name).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with(
            ClientCreated { id },
            "Cliente creado correctamente",
        )),
    ))
}
