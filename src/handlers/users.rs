// src/handlers/users.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{envelope::ApiResponse, error::AppError, policy::TenantScope},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::users::{CreateUserPayload, UpdatePasswordPayload, UpdateUserPayload, UserCreated},
    services::auth::hash_password,
};

// GET /api/users: listado acotado al alcance del token, nunca a parámetros
// de la query string.
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    let users = db.users.list(&scope).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(users))))
}

// POST /api/users: el hash se calcula siempre del lado del servidor.
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateUserPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    // Un usuario acotado no otorga niveles de super admin: se fabricaría un
    // token global en el siguiente login del alta.
    let permission_level = payload.permission_level.unwrap_or(1);
    if !scope.may_assign_level(permission_level) {
        return Err(AppError::Forbidden);
    }

    // Un usuario acotado solo da de alta dentro de su propio cliente.
    let client_id = match scope {
        TenantScope::Global => payload.client_id,
        TenantScope::Client(own) => {
            let target = payload.client_id.unwrap_or(own);
            if !scope.allows_client(Some(target)) {
                return Err(AppError::Forbidden);
            }
            Some(target)
        }
    };

    let hashed = hash_password(payload.password.clone()).await?;
    db.users
        .create(
            &payload.id,
            &payload.name,
            &hashed,
            &payload.role,
            permission_level,
            client_id,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with(
            UserCreated {
                user_id: payload.id,
            },
            "Usuario creado exitosamente",
        )),
    ))
}

// PUT /api/users/{id}
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateUserPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    let target = db.users.find_by_id(&id).await?.ok_or(AppError::UserNotFound)?;
    if !scope.allows_client(target.client_id) || !scope.allows_client(payload.client_id) {
        return Err(AppError::Forbidden);
    }
    // Escalamiento vedado: un acotado no sube a nadie (ni a sí mismo) al
    // nivel de super admin.
    if !scope.may_assign_level(payload.permission_level) {
        return Err(AppError::Forbidden);
    }

    db.users
        .update(
            &id,
            &payload.name,
            &payload.role,
            payload.permission_level,
            payload.client_id,
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with((), "Usuario actualizado correctamente")),
    ))
}

// PUT /api/users/{id}/password
pub async fn update_password(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePasswordPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    let target = db.users.find_by_id(&id).await?.ok_or(AppError::UserNotFound)?;
    if !scope.allows_client(target.client_id) {
        return Err(AppError::Forbidden);
    }

    let hashed = hash_password(payload.password.clone()).await?;
    db.users.update_password(&id, &hashed).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with((), "Contraseña actualizada correctamente")),
    ))
}
