// src/db/message_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, db::queries};

// Mensajes salientes: alta en estado PENDIENTE y toggle de la bandera manual.
#[derive(Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // La fecha la estampa el servidor de base de datos, no el handler.
    pub async fn insert_outbound(&self, wa_id: &str, message: &str) -> Result<(), AppError> {
        sqlx::query(queries::INSERT_OUTBOUND_MESSAGE)
            .bind(wa_id)
            .bind(message)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn set_manual(&self, id: i32, manual: bool) -> Result<(), AppError> {
        let result = sqlx::query(queries::UPDATE_MANUAL_STATUS)
            .bind(id)
            .bind(manual)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::MessageNotFound);
        }
        Ok(())
    }
}
