// src/db/user_repo.rs

use sqlx::PgPool;

use crate::{
    common::{error::AppError, policy::TenantScope},
    db::queries,
    models::auth::{User, UserInfo},
};

// El repositorio de usuarios, responsable de todas las interacciones
// con la tabla users_main.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Búsqueda puntual, incluye el hash (solo para autenticación).
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let maybe_user = sqlx::query_as::<_, User>(queries::GET_USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    // Listado acotado al alcance del solicitante: global o filtrado
    // por su propio cliente.
    pub async fn list(&self, scope: &TenantScope) -> Result<Vec<UserInfo>, AppError> {
        let users = match scope.client_filter() {
            None => {
                sqlx::query_as::<_, UserInfo>(queries::GET_ALL_USERS)
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(client_id) => {
                sqlx::query_as::<_, UserInfo>(queries::GET_USERS_BY_CLIENT)
                    .bind(client_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(users)
    }

    // Alta de usuario; la violación de clave primaria se convierte en 409
    // y deja intacta la fila existente.
    pub async fn create(
        &self,
        id: &str,
        name: &str,
        hashed_password: &str,
        role: &str,
        permission_level: i32,
        client_id: Option<i32>,
    ) -> Result<(), AppError> {
        sqlx::query(queries::INSERT_USER)
            .bind(id)
            .bind(name)
            .bind(hashed_password)
            .bind(role)
            .bind(permission_level)
            .bind(client_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return AppError::DuplicateUserId;
                    }
                }
                e.into()
            })?;
        Ok(())
    }

    pub async fn update(
        &self,
        id: &str,
        name: &str,
        role: &str,
        permission_level: i32,
        client_id: Option<i32>,
    ) -> Result<(), AppError> {
        let result = sqlx::query(queries::UPDATE_USER)
            .bind(id)
            .bind(name)
            .bind(role)
            .bind(permission_level)
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }

    pub async fn update_password(&self, id: &str, hashed_password: &str) -> Result<(), AppError> {
        let result = sqlx::query(queries::UPDATE_PASSWORD)
            .bind(id)
            .bind(hashed_password)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::UserNotFound);
        }
        Ok(())
    }
}
