// src/db/log_repo.rs

use sqlx::PgPool;

use crate::{
    common::{error::AppError, policy::TenantScope},
    db::queries,
    models::logs::{LogEntry, NewLogEntry},
};

// Bitácora de acceso: inserción best-effort y lectura acotada a 100 entradas.
#[derive(Clone)]
pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, entry: &NewLogEntry) -> Result<(), AppError> {
        sqlx::query(queries::INSERT_LOG)
            .bind(&entry.user_id)
            .bind(&entry.action)
            .bind(&entry.details)
            .bind(&entry.ip_address)
            .bind(entry.client_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // Últimas 100 entradas, más reciente primero; los usuarios acotados
    // solo ven la bitácora de su propio cliente.
    pub async fn recent(&self, scope: &TenantScope) -> Result<Vec<LogEntry>, AppError> {
        let entries = match scope.client_filter() {
            None => {
                sqlx::query_as::<_, LogEntry>(queries::GET_LOGS)
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(client_id) => {
                sqlx::query_as::<_, LogEntry>(queries::GET_LOGS_BY_CLIENT)
                    .bind(client_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(entries)
    }
}
