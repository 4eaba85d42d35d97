// src/models/users.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

// Alta de usuario desde la vista de administración.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "Faltan campos obligatorios"))]
    pub id: String,
    #[validate(length(min = 1, message = "Faltan campos obligatorios"))]
    pub name: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    #[validate(length(min = 1, message = "Faltan campos obligatorios"))]
    pub role: String,
    pub permission_level: Option<i32>,
    pub client_id: Option<i32>,
}

// Actualización de perfil (todos los campos, sin contraseña).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, message = "Faltan campos obligatorios"))]
    pub name: String,
    #[validate(length(min = 1, message = "Faltan campos obligatorios"))]
    pub role: String,
    pub permission_level: i32,
    pub client_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordPayload {
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreated {
    pub user_id: String,
}
