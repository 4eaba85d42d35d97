// src/db/leads_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::queries,
    models::leads::{ChatRosterRow, ConversationMessage, RecentMessage, WeeklyBucket},
};

// Métricas del dashboard, historial de conversaciones y roster de chats.
#[derive(Clone)]
pub struct LeadsRepository {
    pool: PgPool,
}

impl LeadsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Remitentes distintos en los últimos 7 días.
    pub async fn leads_count(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(queries::LEADS_COUNT)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn contacted_count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(queries::CONTACTED_COUNT)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn conversions_count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(queries::CONVERSIONS_COUNT)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    // Promedio de minutos entre mensajes consecutivos del mismo remitente;
    // None cuando la ventana no tiene pares consecutivos.
    pub async fn avg_response_minutes(&self) -> Result<Option<Decimal>, AppError> {
        let promedio = sqlx::query_scalar::<_, Option<Decimal>>(queries::AVG_RESPONSE_TIME)
            .fetch_one(&self.pool)
            .await?;
        Ok(promedio)
    }

    pub async fn weekly_leads(&self) -> Result<Vec<WeeklyBucket>, AppError> {
        let buckets = sqlx::query_as::<_, WeeklyBucket>(queries::WEEKLY_LEADS)
            .fetch_all(&self.pool)
            .await?;
        Ok(buckets)
    }

    pub async fn recent_activity(&self) -> Result<Vec<RecentMessage>, AppError> {
        let rows = sqlx::query_as::<_, RecentMessage>(queries::RECENT_ACTIVITY)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    // Historial completo (entrantes + salientes) de un remitente,
    // ascendente por fecha.
    pub async fn conversation(&self, wa_id: &str) -> Result<Vec<ConversationMessage>, AppError> {
        let rows = sqlx::query_as::<_, ConversationMessage>(queries::GET_CONVERSATION)
            .bind(wa_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn chat_roster(&self) -> Result<Vec<ChatRosterRow>, AppError> {
        let rows = sqlx::query_as::<_, ChatRosterRow>(queries::CHAT_LIST)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
