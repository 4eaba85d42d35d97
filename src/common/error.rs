use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nuestro tipo de error, con `thiserror` para mejor ergonomía.
// Cada variante se mapea a un código HTTP y a un mensaje dentro del sobre
// uniforme; nunca se filtra el objeto de error crudo del driver al cliente.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Token de autenticación inválido o ausente")]
    InvalidToken,

    #[error("Permisos insuficientes")]
    Forbidden,

    #[error("Usuario no encontrado")]
    UserNotFound,

    #[error("Vacante no encontrada")]
    VacancyNotFound,

    #[error("Mensaje no encontrado")]
    MessageNotFound,

    #[error("El ID de usuario ya existe")]
    DuplicateUserId,

    // Centinela del pool: la conexión no se estableció al arrancar.
    #[error("Base de datos no disponible")]
    DatabaseUnavailable,

    #[error("Error de base de datos")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Error de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Error de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

// Un cuerpo JSON malformado (por ejemplo, `faqs` que no es un array) también
// debe salir con el sobre de 400, no con el rechazo plano de axum.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::UserNotFound | AppError::VacancyNotFound | AppError::MessageNotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::DuplicateUserId => StatusCode::CONFLICT,
            AppError::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            // Devolvemos todos los detalles de la validación en un solo mensaje.
            AppError::ValidationError(errors) => {
                let details: Vec<String> = errors
                    .field_errors()
                    .values()
                    .flat_map(|field_errors| {
                        field_errors
                            .iter()
                            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    })
                    .collect();
                format!("Uno o más campos son inválidos: {}", details.join("; "))
            }

            // Para los 500 se reenvía el texto del error subyacente,
            // solo como diagnóstico para el operador.
            AppError::DatabaseError(e) => {
                tracing::error!("Error de base de datos: {:?}", e);
                format!("Error en el servidor: {}", e)
            }
            AppError::InternalServerError(e) => {
                tracing::error!("Error interno del servidor: {:?}", e);
                format!("Error en el servidor: {}", e)
            }
            AppError::BcryptError(e) => {
                tracing::error!("Error de Bcrypt: {:?}", e);
                format!("Error en el servidor: {}", e)
            }
            AppError::JwtError(e) => {
                tracing::error!("Error de JWT: {:?}", e);
                format!("Error en el servidor: {}", e)
            }

            other => other.to_string(),
        };

        let body = Json(json!({
            "success": false,
            "data": null,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_http_status() {
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::VacancyNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::DuplicateUserId.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::DatabaseUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::InternalServerError(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unavailable_sentinel_has_fixed_message() {
        assert_eq!(
            AppError::DatabaseUnavailable.to_string(),
            "Base de datos no disponible"
        );
    }

    #[test]
    fn credentials_errors_are_indistinguishable() {
        // Tanto "usuario inexistente" como "contraseña incorrecta" salen por
        // la misma variante: mismo código, mismo texto.
        let response = AppError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Credenciales inválidas"
        );
    }
}
