// src/handlers/auth.rs

use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{envelope::ApiResponse, error::AppError},
    config::AppState,
    models::auth::{LoginPayload, LoginResponse},
};

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Usuario autenticado con token firmado", body = LoginResponse),
        (status = 400, description = "ID y contraseña requeridos"),
        (status = 401, description = "Credenciales inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    WithRejection(Json(payload), _): WithRejection<Json<LoginPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ip_address = client_ip(&headers);
    let response = app_state
        .auth_service
        .login(app_state.db_opt(), &payload.id, &payload.password, &ip_address)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(response))))
}

// Primer salto de X-Forwarded-For; "desconocida" si no viene.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "desconocida".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_ip_takes_first_forwarded_hop() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "10.0.0.9, 172.16.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers), "10.0.0.9");

        assert_eq!(client_ip(&HeaderMap::new()), "desconocida");
    }
}
