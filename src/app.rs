// src/app.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    config::AppState,
    docs::ApiDoc,
    handlers,
    middleware::auth::auth_guard,
};

// Arma el router completo. Separado de main para que las pruebas de
// integración puedan ejercer las rutas con `tower::ServiceExt`.
pub fn app(app_state: AppState) -> Router {
    // Métricas y navegación de chats: sin auth en esta capa.
    let leads_routes = Router::new()
        .route("/count", get(handlers::leads::leads_count))
        .route("/contacted", get(handlers::leads::contacted))
        .route("/conversions", get(handlers::leads::conversions))
        .route("/avg-time", get(handlers::leads::avg_time))
        .route("/weekly", get(handlers::leads::weekly))
        .route("/recent", get(handlers::leads::recent))
        .route("/chats", get(handlers::leads::chats))
        .route("/{wa_id}/conversation", get(handlers::leads::conversation));

    let message_routes = Router::new()
        .route("/outbound", post(handlers::messages::outbound))
        .route("/manual/{id}", patch(handlers::messages::set_manual))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let user_routes = Router::new()
        .route("/", get(handlers::users::list).post(handlers::users::create))
        .route("/{id}", put(handlers::users::update))
        .route("/{id}/password", put(handlers::users::update_password))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let client_routes = Router::new()
        .route(
            "/",
            get(handlers::clients::list).post(handlers::clients::create),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // La lectura completa queda fuera del guard: la consume el agente
    // conversacional externo.
    let vacancy_admin_routes = Router::new()
        .route("/", post(handlers::vacancies::create))
        .route("/{id}/faq", put(handlers::vacancies::update_faq))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));
    let vacancy_public_routes =
        Router::new().route("/{id}/full", get(handlers::vacancies::get_full));

    let log_routes = Router::new()
        .route("/", get(handlers::logs::list))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .route("/api/login", post(handlers::auth::login))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/api/leads", leads_routes)
        .nest("/api/messages", message_routes)
        .nest("/api/users", user_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/vacantes", vacancy_admin_routes.merge(vacancy_public_routes))
        .nest("/api/logs", log_routes)
        // Fallback de SPA: solo los GET no reconocidos sirven el shell; el
        // resto de métodos recibe 405 en vez de HTML.
        .fallback_service(get(handlers::spa::index))
        .with_state(app_state)
}
