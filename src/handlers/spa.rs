// src/handlers/spa.rs

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::config;

// Fallback para cualquier GET sin ruta: sirve el shell de la SPA para que
// el router del frontend resuelva la vista.
pub async fn index() -> impl IntoResponse {
    let path = std::path::Path::new(&config::static_dir()).join("index.html");

    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            "index.html no encontrado; ¿se generó el build del frontend?",
        )
            .into_response(),
    }
}
