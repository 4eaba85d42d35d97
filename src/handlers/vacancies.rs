// src/handlers/vacancies.rs

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
    models::vacancies::{CreateVacancyPayload, FaqUpdatePayload, VacancyCreated},
};

// POST /api/vacantes: guarda la vacante y sus condiciones iniciales en
// una sola transacción.
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(payload), _): WithRejection<Json<CreateVacancyPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;
    if !scope.allows_client(Some(payload.client_id)) {
        return Err(AppError::Forbidden);
    }

    let vacante_id = db.vacancies.create_with_conditions(&payload).await?;
    tracing::info!("Vacante {} creada para el cliente {}", vacante_id, payload.client_id);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with(
            VacancyCreated { vacante_id },
            "Vacante creada exitosamente",
        )),
    ))
}

// PUT /api/vacantes/{id}/faq: reemplazo total del FAQ de la vacante.
pub async fn update_faq(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(vacante_id): Path<i32>,
    WithRejection(Json(payload), _): WithRejection<Json<FaqUpdatePayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    let scope = TenantScope::from_claims(claims.permission_level, claims.client_id)?;

    let owner = db.vacancies.owner_of(vacante_id).await?;
    if !scope.allows_client(owner) {
        return Err(AppError::Forbidden);
    }

    db.vacancies.replace_faqs(vacante_id, &payload.faqs).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with((), "FAQs actualizadas correctamente")),
    ))
}

// GET /api/vacantes/{id}/full: la vista completa que consume el agente
// conversacional; queda fuera del guard para no romper esa integración.
pub async fn get_full(
    State(app_state): State<AppState>,
    Path(vacante_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    let vacancy = db.vacancies.get_full(vacante_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(vacancy))))
}
