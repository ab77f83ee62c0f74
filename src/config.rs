use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // JWT settings for token issuance/validation
  pub jwt_secret: String,
  pub jwt_issuer: String,
  pub jwt_ttl_days: i64,

  // Optional: seed an administrator account on startup
  pub seed_admin: bool,
  pub seed_admin_email: String,
  pub seed_admin_password: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let jwt_secret = get_env("JWT_SECRET")?;
    let jwt_issuer = get_env("JWT_ISSUER").unwrap_or_else(|_| "storefront".to_string());
    let jwt_ttl_days = get_env("JWT_TTL_DAYS")
      .unwrap_or_else(|_| "7".to_string())
      .parse::<i64>()
      .map_err(|e| AppError::Config(format!("Invalid JWT_TTL_DAYS: {}", e)))?;

    let seed_admin = get_env("SEED_ADMIN")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_ADMIN value: {}", e)))?;
    let seed_admin_email = get_env("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());
    let seed_admin_password = get_env("SEED_ADMIN_PASSWORD").unwrap_or_default();

    if seed_admin && seed_admin_password.is_empty() {
      return Err(AppError::Config(
        "SEED_ADMIN is enabled but SEED_ADMIN_PASSWORD is not set.".to_string(),
      ));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      jwt_secret,
      jwt_issuer,
      jwt_ttl_days,
      seed_admin,
      seed_admin_email,
      seed_admin_password,
    })
  }
}
