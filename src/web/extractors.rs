//! Request extractors shared by handlers.

use actix_web::{web, FromRequest, HttpRequest};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

/// The authenticated caller, produced once at the HTTP boundary from the
/// `Authorization: Bearer <token>` header. Handlers take this as an argument
/// instead of re-parsing claims; requests without a valid token are rejected
/// before any business logic runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
  pub email: String,
  pub role: String,
}

impl AuthenticatedUser {
  pub fn is_admin(&self) -> bool {
    self.role == "admin"
  }
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    futures_util::future::ready(extract_user(req))
  }
}

fn extract_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
  let app_state = req
    .app_data::<web::Data<AppState>>()
    .ok_or_else(|| AppError::Internal("AppState not configured.".to_string()))?;

  let header = req
    .headers()
    .get("Authorization")
    .and_then(|v| v.to_str().ok())
    .ok_or_else(|| AppError::Auth("Missing Authorization header.".to_string()))?;

  let token = header.strip_prefix("Bearer ").ok_or_else(|| {
    warn!("Authorization header present but not a Bearer token.");
    AppError::Auth("Expected a Bearer token.".to_string())
  })?;

  let claims = auth_service::decode_token(&app_state.config.jwt_secret, &app_state.config.jwt_issuer, token)?;

  Ok(AuthenticatedUser {
    user_id: claims.sub,
    email: claims.email,
    role: claims.role,
  })
}
