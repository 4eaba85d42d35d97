// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models::{
    auth::{LoginPayload, LoginResponse, UserInfo},
    leads::{AvgResponseTime, ChatSummary, LeadCount, RecentMessage, WeeklyBucket},
};

// Documento OpenAPI servido en /api/docs/openapi.json.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sophia Dashboard API",
        description = "Backend REST del dashboard multi-tenant de Sophia: métricas de leads, navegación de chats y administración de usuarios, clientes y vacantes.",
        version = "0.1.0"
    ),
    paths(
        handlers::auth::login,
        handlers::leads::leads_count,
        handlers::leads::weekly,
        handlers::leads::chats,
    ),
    components(schemas(
        LoginPayload,
        LoginResponse,
        UserInfo,
        LeadCount,
        AvgResponseTime,
        WeeklyBucket,
        RecentMessage,
        ChatSummary,
    )),
    tags(
        (name = "Auth", description = "Autenticación"),
        (name = "Leads", description = "Métricas y chats de la operación conversacional")
    )
)]
pub struct ApiDoc;
