// src/models/tenancy.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Un cliente (tenant): una organización cuyos datos quedan aislados
// del resto salvo para los super admins.
#[derive(Debug, Serialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
}

// Alta de cliente: exige el ID del usuario admin (nivel >= 8) que lo acompaña.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientPayload {
    #[validate(length(min = 1, message = "El nombre del cliente es obligatorio"))]
    pub name: String,
    #[validate(length(min = 1, message = "admin_id es obligatorio"))]
    pub admin_id: String,
}

#[derive(Debug, Serialize)]
pub struct ClientCreated {
    pub id: i32,
}
