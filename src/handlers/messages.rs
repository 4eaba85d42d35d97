// src/handlers/messages.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    common::{envelope::ApiResponse, error::AppError},
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::messages::{ManualPayload, OutboundPayload},
};

// POST /api/messages/outbound: registra un saliente en estado PENDIENTE;
// el envío real lo hace la integración de mensajería, no este servidor.
pub async fn outbound(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(payload), _): WithRejection<Json<OutboundPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let db = app_state.db()?;
    db.messages
        .insert_outbound(&payload.wa_id, &payload.message)
        .await?;

    tracing::info!("Mensaje saliente registrado para {} por {}", payload.wa_id, claims.sub);
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with((), "Mensaje registrado para envío")),
    ))
}

// PATCH /api/messages/manual/{id}: marca o desmarca el hilo como atendido
// por un humano (el agente automático deja de contestarlo).
pub async fn set_manual(
    State(app_state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    WithRejection(Json(payload), _): WithRejection<Json<ManualPayload>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let db = app_state.db()?;
    db.messages.set_manual(id, payload.manual.as_bool()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok_with((), "Estado manual actualizado")),
    ))
}
