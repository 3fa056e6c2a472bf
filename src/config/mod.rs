mod app_config;

pub use app_config::{AccountConfig, AppConfig, DatabaseConfig, SecurityConfig, ServerConfig};
