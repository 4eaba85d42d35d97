// src/models/logs.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// Bitácora de acceso, solo-inserción.
#[derive(Debug, Serialize, FromRow)]
pub struct LogEntry {
    pub id: i32,
    pub user_id: Option<String>,
    pub action: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub client_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
}

// Datos de un registro nuevo; el timestamp lo pone la base.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub user_id: String,
    pub action: String,
    pub details: String,
    pub ip_address: String,
    pub client_id: Option<i32>,
}
