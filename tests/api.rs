// tests/api.rs
//
// Pruebas de integración que ejercen el router sin base de datos: el estado
// arranca con el centinela "no disponible", igual que un proceso cuyo pool
// nunca se estableció.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sophia_backend::{
    app::app,
    config::AppState,
    services::auth::{AuthService, TrialRealm, TrialUser},
};

fn state_sin_db() -> AppState {
    AppState::with_parts(
        None,
        AuthService::new("secreto-de-pruebas".to_string(), TrialRealm::disabled()),
    )
}

fn state_con_realm() -> AppState {
    let realm = TrialRealm::new(
        vec![
            TrialUser {
                id: "E029863".to_string(),
                name: "Admin de Prueba".to_string(),
                role: "admin".to_string(),
            },
            TrialUser {
                id: "E015379".to_string(),
                name: "Usuario de Prueba".to_string(),
                role: "user".to_string(),
            },
        ],
        "password123".to_string(),
    );
    AppState::with_parts(None, AuthService::new("secreto-de-pruebas".to_string(), realm))
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn metrics_return_503_envelope_when_store_is_down() {
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .uri("/api/leads/count")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["message"], "Base de datos no disponible");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn login_validates_required_fields() {
    let response = app(state_sin_db())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            serde_json::json!({ "id": "", "password": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("ID y contraseña requeridos"));
}

#[tokio::test]
async fn malformed_json_also_gets_the_envelope() {
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{esto-no-es-json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn trial_login_works_without_the_store() {
    let response = app(state_con_realm())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            serde_json::json!({ "id": "E029863", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["name"], "Admin de Prueba");
    assert_eq!(body["data"]["user"]["permission_level"], 8);
    // La contraseña jamás viaja en la respuesta.
    assert!(body["data"]["user"].get("password").is_none());
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn trial_login_accepts_password_equal_to_id() {
    let response = app(state_con_realm())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            serde_json::json!({ "id": "E015379", "password": "E015379" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn issued_token_passes_the_guard() {
    let state = state_con_realm();

    let login = app(state.clone())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            serde_json::json!({ "id": "E029863", "password": "password123" }),
        ))
        .await
        .unwrap();
    let token = json_body(login).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    // Con token válido el guard deja pasar; el 503 posterior proviene del
    // centinela de base de datos, no de la autenticación.
    let response = app(state)
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = app(state_con_realm())
        .oneshot(
            Request::builder()
                .uri("/api/logs")
                .header(header::AUTHORIZATION, "Bearer basura")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_trial_password_falls_through_to_store() {
    let response = app(state_con_realm())
        .oneshot(json_request(
            Method::POST,
            "/api/login",
            serde_json::json!({ "id": "E029863", "password": "incorrecta" }),
        ))
        .await
        .unwrap();

    // El realm de prueba no acepta contraseñas ajenas: el intento cae al
    // camino real, que sin base de datos termina exactamente en 503.
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["info"]["title"], "Sophia Dashboard API");
    assert!(body["paths"].get("/api/login").is_some());
}

#[tokio::test]
async fn unmatched_route_falls_back_to_the_spa_shell() {
    // Sin build del frontend presente, el fallback responde 404 plano.
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .uri("/dashboard/usuarios")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_get_unmatched_route_never_serves_the_shell() {
    // El fallback de SPA atiende solo GET; un POST sin ruta recibe 405.
    let response = app(state_sin_db())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/dashboard/usuarios")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
