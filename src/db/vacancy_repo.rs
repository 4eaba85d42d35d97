// src/db/vacancy_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::queries,
    models::vacancies::{CreateVacancyPayload, FaqEntry, VacancyDetailRow, VacancyFull},
};

// Flujo de vacantes: alta transaccional (vacante + condiciones), reemplazo
// total del FAQ y lectura completa para el agente conversacional.
#[derive(Clone)]
pub struct VacancyRepository {
    pool: PgPool,
}

impl VacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Dos fases en una sola transacción: si el insert de condiciones falla,
    // la vacante no queda huérfana.
    pub async fn create_with_conditions(
        &self,
        payload: &CreateVacancyPayload,
    ) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;

        let vacante_id = sqlx::query_scalar::<_, i32>(queries::INSERT_VACANCY)
            .bind(&payload.nombre)
            .bind(payload.client_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(queries::INSERT_CONDITIONS)
            .bind(vacante_id)
            .bind(payload.sueldo)
            .bind(payload.bono)
            .bind(payload.horarios.as_deref())
            .bind(payload.beneficios.as_deref())
            .bind(payload.requisitos.as_deref())
            .bind(payload.documentacion.as_deref())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(vacante_id)
    }

    // Cliente dueño de la vacante; error 404 si la vacante no existe.
    pub async fn owner_of(&self, vacante_id: i32) -> Result<Option<i32>, AppError> {
        sqlx::query_scalar::<_, Option<i32>>(queries::GET_VACANCY_OWNER)
            .bind(vacante_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::VacancyNotFound)
    }

    // Reemplazo completo: borra el set anterior e inserta el nuevo, todo o
    // nada. Nunca queda un FAQ parcialmente aplicado.
    pub async fn replace_faqs(&self, vacante_id: i32, faqs: &[FaqEntry]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(queries::DELETE_FAQS)
            .bind(vacante_id)
            .execute(&mut *tx)
            .await?;

        for faq in faqs {
            sqlx::query(queries::INSERT_FAQ)
                .bind(vacante_id)
                .bind(&faq.pregunta)
                .bind(&faq.respuesta)
                .bind(faq.palabras_clave.as_deref())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    // Dos consultas ordinarias compuestas aquí, en lugar de serializar el
    // FAQ como columna JSON dentro de la consulta principal.
    pub async fn get_full(&self, vacante_id: i32) -> Result<VacancyFull, AppError> {
        let row = sqlx::query_as::<_, VacancyDetailRow>(queries::GET_VACANCY_DETAIL)
            .bind(vacante_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::VacancyNotFound)?;

        let faqs = sqlx::query_as::<_, FaqEntry>(queries::GET_VACANCY_FAQS)
            .bind(vacante_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(VacancyFull::from_parts(row, faqs))
    }
}
