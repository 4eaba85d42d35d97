// src/services/auth.rs

use std::sync::LazyLock;

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::{error::AppError, policy::SUPER_ADMIN_LEVEL},
    config::Db,
    models::{
        auth::{Claims, LoginResponse, UserInfo},
        logs::NewLogEntry,
    },
};

// Hash contra el que se verifica cuando el usuario no existe, para que
// "usuario inexistente" y "contraseña incorrecta" tarden lo mismo. Se genera
// al mismo coste que los hashes reales; un coste menor delataría por tiempo
// qué chequeo falló.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash("sophia", DEFAULT_COST).unwrap_or_default());

// Realm de prueba: identidades de demo definidas por configuración, nunca
// compiladas dentro de la rama principal de autenticación. Deshabilitado
// salvo que TRIAL_LOGIN_ENABLED=true.
#[derive(Clone)]
pub struct TrialRealm {
    enabled: bool,
    users: Vec<TrialUser>,
    password: String,
}

#[derive(Clone)]
pub struct TrialUser {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl TrialRealm {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            users: Vec::new(),
            password: String::new(),
        }
    }

    pub fn new(users: Vec<TrialUser>, password: String) -> Self {
        Self {
            enabled: true,
            users,
            password,
        }
    }

    pub fn from_env() -> Self {
        let enabled = std::env::var("TRIAL_LOGIN_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if !enabled {
            return Self::disabled();
        }

        let users = std::env::var("TRIAL_USERS")
            .map(|raw| Self::parse_users(&raw))
            .unwrap_or_default();
        let password = std::env::var("TRIAL_PASSWORD").unwrap_or_default();

        tracing::warn!(
            "⚠️ Realm de prueba habilitado con {} identidades (solo para demo)",
            users.len()
        );
        Self::new(users, password)
    }

    // Formato: "id:nombre:rol;id:nombre:rol"
    fn parse_users(raw: &str) -> Vec<TrialUser> {
        raw.split(';')
            .filter_map(|entry| {
                let mut parts = entry.splitn(3, ':');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(id), Some(name), Some(role)) if !id.trim().is_empty() => {
                        Some(TrialUser {
                            id: id.trim().to_string(),
                            name: name.trim().to_string(),
                            role: role.trim().to_string(),
                        })
                    }
                    _ => None,
                }
            })
            .collect()
    }

    // Acepta la contraseña compartida del realm o password == id,
    // sin tocar la base de datos.
    pub fn authenticate(&self, id: &str, password: &str) -> Option<UserInfo> {
        if !self.enabled {
            return None;
        }
        let user = self.users.iter().find(|u| u.id == id)?;
        if password != self.password && password != id {
            return None;
        }

        let permission_level = if user.role == "admin" { SUPER_ADMIN_LEVEL } else { 1 };
        Some(UserInfo {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            permission_level,
            client_id: None,
        })
    }
}

#[derive(Clone)]
pub struct AuthService {
    jwt_secret: String,
    trial: TrialRealm,
}

impl AuthService {
    pub fn new(jwt_secret: String, trial: TrialRealm) -> Self {
        Self { jwt_secret, trial }
    }

    // Transición Anonymous -> Authenticated: primero el realm de prueba,
    // después la fila real de users_main con comparación bcrypt.
    pub async fn login(
        &self,
        db: Option<&Db>,
        id: &str,
        password: &str,
        ip_address: &str,
    ) -> Result<LoginResponse, AppError> {
        tracing::info!("Intentando login para ID: {}", id);

        if let Some(user) = self.trial.authenticate(id, password) {
            tracing::info!("Login de PRUEBA exitoso para: {}", user.id);
            let token = self.create_token(&user)?;
            return Ok(LoginResponse { user, token });
        }

        let db = db.ok_or(AppError::DatabaseUnavailable)?;

        let Some(user) = db.users.find_by_id(id).await? else {
            // Verificación contra un hash fijo para no delatar qué chequeo falló.
            let password_owned = password.to_owned();
            let _ = tokio::task::spawn_blocking(move || verify(&password_owned, DUMMY_HASH.as_str()))
                .await
                .map_err(|e| anyhow::anyhow!("Fallo en la tarea de verificación: {}", e))?;
            return Err(AppError::InvalidCredentials);
        };

        let password_owned = password.to_owned();
        let stored_hash = user.password.clone();
        let is_valid = tokio::task::spawn_blocking(move || verify(&password_owned, &stored_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Fallo en la tarea de verificación: {}", e))??;

        if !is_valid {
            return Err(AppError::InvalidCredentials);
        }

        let user = UserInfo::from(user);
        let token = self.create_token(&user)?;

        // Bitácora best-effort: su fallo jamás afecta la respuesta de login
        // y no se reintenta.
        let logs = db.logs.clone();
        let entry = NewLogEntry {
            user_id: user.id.clone(),
            action: "LOGIN".to_string(),
            details: "Inicio de sesión exitoso".to_string(),
            ip_address: ip_address.to_string(),
            client_id: user.client_id,
        };
        tokio::spawn(async move {
            if let Err(e) = logs.insert(&entry).await {
                tracing::warn!("No se pudo registrar el login en la bitácora: {}", e);
            }
        });

        Ok(LoginResponse { user, token })
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }

    fn create_token(&self, user: &UserInfo) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user.id.clone(),
            permission_level: user.permission_level,
            client_id: user.client_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

// El hashing es costoso a propósito: se ejecuta en un hilo bloqueante.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash(&password, DEFAULT_COST))
        .await
        .map_err(|e| anyhow::anyhow!("Fallo en la tarea de hashing: {}", e))?
        .map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn realm() -> TrialRealm {
        TrialRealm::new(
            TrialRealm::parse_users("E029863:Admin de Prueba:admin;E015379:Usuario de Prueba:user"),
            "password123".to_string(),
        )
    }

    #[test]
    fn parses_trial_users_from_env_format() {
        let users = TrialRealm::parse_users("A1:Ana:admin;B2:Beto:user;;mal");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "A1");
        assert_eq!(users[1].role, "user");
    }

    #[test]
    fn trial_accepts_shared_password_or_own_id() {
        let realm = realm();

        let admin = realm.authenticate("E029863", "password123").unwrap();
        assert_eq!(admin.name, "Admin de Prueba");
        assert_eq!(admin.permission_level, SUPER_ADMIN_LEVEL);
        assert_eq!(admin.client_id, None);

        let por_id = realm.authenticate("E015379", "E015379").unwrap();
        assert_eq!(por_id.permission_level, 1);

        assert!(realm.authenticate("E029863", "otra").is_none());
        assert!(realm.authenticate("NADIE", "password123").is_none());
    }

    #[test]
    fn dummy_hash_matches_real_cost() {
        // Un coste menor al de los hashes reales delataría por tiempo si el
        // usuario existe o no.
        let prefijo = format!("$2b${:02}$", DEFAULT_COST);
        assert!(
            DUMMY_HASH.starts_with(&prefijo),
            "hash señuelo con coste inesperado: {}",
            DUMMY_HASH.as_str()
        );
    }

    #[test]
    fn disabled_realm_never_authenticates() {
        let realm = TrialRealm::disabled();
        assert!(realm.authenticate("E029863", "password123").is_none());
    }

    #[test]
    fn token_roundtrip_preserves_claims() {
        let service = AuthService::new("secreto-de-prueba".to_string(), TrialRealm::disabled());
        let user = UserInfo {
            id: "E000777".to_string(),
            name: "Carla".to_string(),
            role: "supervisor".to_string(),
            permission_level: 6,
            client_id: Some(4),
        };

        let token = service.create_token(&user).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "E000777");
        assert_eq!(claims.permission_level, 6);
        assert_eq!(claims.client_id, Some(4));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = AuthService::new("secreto-de-prueba".to_string(), TrialRealm::disabled());
        let otro = AuthService::new("otro-secreto".to_string(), TrialRealm::disabled());
        let user = UserInfo {
            id: "E000777".to_string(),
            name: "Carla".to_string(),
            role: "user".to_string(),
            permission_level: 1,
            client_id: Some(4),
        };

        let token = otro.create_token(&user).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(AppError::InvalidToken)
        ));
    }
}
