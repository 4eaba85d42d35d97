//src/main.rs

use tokio::net::TcpListener;

use sophia_backend::{app::app, config, config::AppState};

#[tokio::main]
async fn main() {
    // Inicializa el logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() está bien aquí: si la configuración falla, la aplicación
    // no debe arrancar. Un fallo de CONEXIÓN, en cambio, deja el centinela
    // "no disponible" y el servidor arranca respondiendo 503.
    let app_state = AppState::new()
        .await
        .expect("Fallo al inicializar el estado de la aplicación.");

    // Ejecuta las migraciones de SQLx solo si hay pool.
    if let Ok(db) = app_state.db() {
        sqlx::migrate!()
            .run(&db.pool)
            .await
            .expect("Fallo al ejecutar las migraciones de la base de datos.");
        tracing::info!("✅ Migraciones de la base de datos ejecutadas con éxito!");
    }

    let addr = format!("0.0.0.0:{}", config::server_port());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Fallo al iniciar el listener TCP");
    tracing::info!("🚀 Servidor escuchando en {}", listener.local_addr().unwrap());

    axum::serve(listener, app(app_state))
        .await
        .expect("Error en el servidor Axum");
}
