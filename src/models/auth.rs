// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Representa la fila completa de users_main, incluida la contraseña hasheada.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing)] // IMPORTANTE: el hash nunca sale en una respuesta
    pub password: String,

    pub role: String,
    pub permission_level: i32,
    pub client_id: Option<i32>,
}

// Proyección pública del usuario (sin contraseña), tal como la consumen
// los listados y la respuesta de login.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub role: String,
    pub permission_level: i32,
    pub client_id: Option<i32>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            permission_level: user.permission_level,
            client_id: user.client_id,
        }
    }
}

// Datos para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "ID y contraseña requeridos"))]
    pub id: String,
    #[validate(length(min = 1, message = "ID y contraseña requeridos"))]
    pub password: String,
}

// Respuesta de autenticación: el usuario más el token firmado del que los
// handlers derivan permission_level y client_id (nunca de la query string).
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserInfo,
    pub token: String,
}

// Estructura de datos ("claims") dentro del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // ID del usuario (código de empleado)
    pub permission_level: i32,
    pub client_id: Option<i32>,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_never_serializes() {
        let user = User {
            id: "E000001".into(),
            name: "Ana".into(),
            password: "$2b$12$hash".into(),
            role: "user".into(),
            permission_level: 1,
            client_id: Some(3),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["id"], "E000001");
        assert_eq!(value["client_id"], 3);
    }

    #[test]
    fn login_payload_rejects_empty_fields() {
        let payload = LoginPayload {
            id: String::new(),
            password: "x".into(),
        };
        assert!(payload.validate().is_err());
    }
}
