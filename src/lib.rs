// Backend REST del dashboard "Sophia": capa delgada sobre la base de datos
// relacional que sirve métricas de leads, el navegador de chats y la
// administración multi-tenant de usuarios, clientes y vacantes.

pub mod app;
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
