use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::register",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Registration attempt for email: {}", req_payload.email);

  if req_payload.email.trim().is_empty() || !req_payload.email.contains('@') {
    return Err(AppError::Validation("A valid email address is required.".to_string()));
  }

  let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
    .bind(&req_payload.email)
    .fetch_optional(&app_state.db_pool)
    .await?;
  if existing.is_some() {
    warn!("Registration rejected: email {} already in use.", req_payload.email);
    return Err(AppError::Validation("Email already in use.".to_string()));
  }

  let password_hash = auth_service::hash_password(&req_payload.password)?;

  let (user_id,): (Uuid,) = sqlx::query_as(
    "INSERT INTO users (id, email, password_hash, role) VALUES ($1, $2, $3, 'user') RETURNING id",
  )
  .bind(Uuid::new_v4())
  .bind(&req_payload.email)
  .bind(&password_hash)
  .fetch_one(&app_state.db_pool)
  .await?;

  info!("Registration successful for email: {}. User ID: {}", req_payload.email, user_id);

  Ok(HttpResponse::Created().json(json!({
      "message": "User created successfully.",
      "userId": user_id,
      "email": req_payload.email,
  })))
}

#[instrument(
    name = "handler::login",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for email: {}", req_payload.email);

  let user: Option<crate::models::User> = sqlx::query_as(
    "SELECT id, email, password_hash, role, created_at, updated_at FROM users WHERE email = $1",
  )
  .bind(&req_payload.email)
  .fetch_optional(&app_state.db_pool)
  .await?;

  // Same response for unknown email and bad password.
  let user = user.ok_or_else(|| AppError::Auth("Invalid email or password.".to_string()))?;
  if !auth_service::verify_password(&user.password_hash, &req_payload.password)? {
    warn!("Login failed for email {}: password mismatch.", req_payload.email);
    return Err(AppError::Auth("Invalid email or password.".to_string()));
  }

  let token = auth_service::issue_token(
    &app_state.config.jwt_secret,
    &app_state.config.jwt_issuer,
    app_state.config.jwt_ttl_days,
    user.id,
    &user.email,
    &user.role,
  )?;

  info!("Login successful for email: {}. User ID: {}", user.email, user.id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Login successful.",
      "token": token,
      "userId": user.id,
      "email": user.email,
  })))
}

#[instrument(name = "handler::me", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn me_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  // Token claims may be stale (e.g. role changed); answer from the row.
  let user: Option<crate::models::User> = sqlx::query_as(
    "SELECT id, email, password_hash, role, created_at, updated_at FROM users WHERE id = $1",
  )
  .bind(auth_user.user_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  let user = user.ok_or_else(|| AppError::Auth("User no longer exists.".to_string()))?;

  Ok(HttpResponse::Ok().json(json!({
      "id": user.id,
      "email": user.email,
      "role": user.role,
  })))
}
