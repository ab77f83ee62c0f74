//! Database pool construction and startup seeding.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::auth_service;

pub async fn connect(config: &AppConfig) -> Result<PgPool> {
  let pool = PgPool::connect(&config.database_url).await?;
  info!("Successfully connected to the database.");
  Ok(pool)
}

/// Creates the administrator account if it does not exist yet. Development
/// convenience driven by SEED_ADMIN; credentials come from the environment.
pub async fn seed_admin(pool: &PgPool, config: &AppConfig) -> Result<()> {
  let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
    .bind(&config.seed_admin_email)
    .fetch_optional(pool)
    .await?;

  if existing.is_some() {
    info!("Admin account {} already present; skipping seed.", config.seed_admin_email);
    return Ok(());
  }

  let password_hash = auth_service::hash_password(&config.seed_admin_password)?;
  sqlx::query("INSERT INTO users (id, email, password_hash, role) VALUES ($1, $2, $3, 'admin')")
    .bind(Uuid::new_v4())
    .bind(&config.seed_admin_email)
    .bind(&password_hash)
    .execute(pool)
    .await?;

  info!("Seeded admin account {}.", config.seed_admin_email);
  Ok(())
}
