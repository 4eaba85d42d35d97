// src/handlers/leads.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;

use crate::{
    common::{envelope::ApiResponse, error::AppError},
    config::AppState,
    models::leads::{AvgResponseTime, ChatSummary, LeadCount},
};

// GET /api/leads/count
#[utoipa::path(
    get,
    path = "/api/leads/count",
    tag = "Leads",
    responses(
        (status = 200, description = "Remitentes únicos de los últimos 7 días", body = LeadCount),
        (status = 503, description = "Base de datos no disponible")
    )
)]
pub async fn leads_count(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo conteo de leads");
    let db = app_state.db()?;
    let count = db.leads.leads_count().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(LeadCount { count }))))
}

// GET /api/leads/contacted
pub async fn contacted(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo leads contactados");
    let db = app_state.db()?;
    let count = db.leads.contacted_count().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(LeadCount { count }))))
}

// GET /api/leads/conversions
pub async fn conversions(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo conversiones");
    let db = app_state.db()?;
    let count = db.leads.conversions_count().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(LeadCount { count }))))
}

// GET /api/leads/avg-time
pub async fn avg_time(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: calculando tiempo promedio");
    let db = app_state.db()?;

    let minutos = db
        .leads
        .avg_response_minutes()
        .await?
        .and_then(|d| d.round().to_i64())
        .unwrap_or(0);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(AvgResponseTime {
            value: format!("{}m", minutos),
        })),
    ))
}

// GET /api/leads/weekly
#[utoipa::path(
    get,
    path = "/api/leads/weekly",
    tag = "Leads",
    responses(
        (status = 200, description = "Leads únicos por día de la semana"),
        (status = 503, description = "Base de datos no disponible")
    )
)]
pub async fn weekly(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo datos semanales");
    let db = app_state.db()?;
    let buckets = db.leads.weekly_leads().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(buckets))))
}

// GET /api/leads/recent
pub async fn recent(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo actividad reciente");
    let db = app_state.db()?;
    let rows = db.leads.recent_activity().await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(rows))))
}

// GET /api/leads/chats
//
// El roster con la elegibilidad derivada: se puede contestar mientras la
// brecha desde el último mensaje entrante no supere las 23 horas.
#[utoipa::path(
    get,
    path = "/api/leads/chats",
    tag = "Leads",
    responses(
        (status = 200, description = "Top 50 de chats por última interacción", body = [ChatSummary]),
        (status = 503, description = "Base de datos no disponible")
    )
)]
pub async fn chats(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: obteniendo lista de chats");
    let db = app_state.db()?;

    let now = Utc::now();
    let chats: Vec<ChatSummary> = db
        .leads
        .chat_roster()
        .await?
        .into_iter()
        .map(|row| ChatSummary::from_row(row, now))
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(chats))))
}

// GET /api/leads/{wa_id}/conversation
pub async fn conversation(
    State(app_state): State<AppState>,
    Path(wa_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("--> Petición recibida: conversación de {}", wa_id);
    let db = app_state.db()?;
    let messages = db.leads.conversation(&wa_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(messages))))
}
