// src/db/client_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, db::queries, models::tenancy::Client};

#[derive(Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>(queries::GET_ALL_CLIENTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(clients)
    }

    pub async fn create(&self, name: &str) -> Result<i32, AppError> {
        let id = sqlx::query_scalar::<_, i32>(queries::INSERT_CLIENT)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }
}
