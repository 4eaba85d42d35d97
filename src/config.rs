// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    common::error::AppError,
    db::{
        ClientRepository, LeadsRepository, LogRepository, MessageRepository, UserRepository,
        VacancyRepository,
    },
    services::auth::{AuthService, TrialRealm},
};

// El pool compartido y los repositorios que cuelgan de él. Se construye una
// sola vez al arrancar; si la conexión falla no existe.
#[derive(Clone)]
pub struct Db {
    pub pool: PgPool,
    pub leads: LeadsRepository,
    pub messages: MessageRepository,
    pub users: UserRepository,
    pub clients: ClientRepository,
    pub vacancies: VacancyRepository,
    pub logs: LogRepository,
}

impl Db {
    pub fn new(pool: PgPool) -> Self {
        Self {
            leads: LeadsRepository::new(pool.clone()),
            messages: MessageRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            vacancies: VacancyRepository::new(pool.clone()),
            logs: LogRepository::new(pool.clone()),
            pool,
        }
    }
}

// El estado compartido accesible en toda la aplicación.
#[derive(Clone)]
pub struct AppState {
    db: Option<Db>,
    pub auth_service: AuthService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // Sin credenciales embebidas en el código: el DSN viene del entorno.
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL debe estar definida"))?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET debe estar definido"))?;

        // Un fallo de conexión no tumba el proceso: el estado queda con el
        // centinela "no disponible" y cada handler responde 503 hasta que
        // el proceso se reinicie.
        let db = match PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("✅ Conexión con la base de datos establecida con éxito!");
                Some(Db::new(pool))
            }
            Err(e) => {
                tracing::error!("🔥 Fallo al conectar con la base de datos: {:?}", e);
                None
            }
        };

        let auth_service = AuthService::new(jwt_secret, TrialRealm::from_env());

        Ok(Self { db, auth_service })
    }

    // Constructor directo, usado por las pruebas de integración.
    pub fn with_parts(db: Option<Db>, auth_service: AuthService) -> Self {
        Self { db, auth_service }
    }

    // Acceso con chequeo del centinela: 503 si el pool nunca se estableció.
    pub fn db(&self) -> Result<&Db, AppError> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }

    pub fn db_opt(&self) -> Option<&Db> {
        self.db.as_ref()
    }
}

// Puerto de escucha del servidor (3001 por omisión).
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001)
}

// Directorio con el build del frontend (shell de la SPA).
pub fn static_dir() -> String {
    env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string())
}
