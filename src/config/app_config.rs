use crate::{
    error::{AppError, Result},
    models::UserRole,
};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: Option<DatabaseConfig>,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
    pub accounts: Vec<AccountConfig>,
}

#[derive(Clone)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl SecurityConfig {
    /// The two fixed accounts, hashed with `bcrypt_cost`.
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost,
            accounts: vec![
                AccountConfig {
                    username: "admin".to_string(),
                    password: "admin123".to_string(),
                    role: UserRole::Admin,
                },
                AccountConfig {
                    username: "user".to_string(),
                    password: "user123".to_string(),
                    role: UserRole::User,
                },
            ],
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database = match env::var("DB_URL") {
            Ok(url) if !url.trim().is_empty() => Some(DatabaseConfig {
                url,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            }),
            _ => None,
        };

        let bcrypt_cost: u32 = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
            .parse()
            .map_err(|_| AppError::ConfigError("Invalid BCRYPT_COST value".to_string()))?;

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(AppError::ConfigError(
                "BCRYPT_COST must be between 4 and 31".to_string(),
            ));
        }

        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "1048576".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database,
            security: SecurityConfig::with_cost(bcrypt_cost),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
