//! Password hashing/verification and session token issuance.

use crate::errors::{AppError, Result};
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use uuid::Uuid;

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| {
      error!(error = %e, "Argon2 password hashing failed.");
      AppError::Internal(format!("Password hashing process failed: {}", e))
    })
}

/// Verifies a plain-text password against a stored Argon2 hash. Returns
/// `Ok(false)` on a mismatch; `Err` only for malformed hashes or internal
/// failures.
#[instrument(name = "auth_service::verify_password", skip_all)]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool> {
  if hashed_password_str.is_empty() || provided_password.is_empty() {
    return Err(AppError::Auth("Empty password or stored hash.".to_string()));
  }

  let parsed_hash = PasswordHash::new(hashed_password_str).map_err(|e| {
    error!(error = %e, "Failed to parse stored password hash string.");
    AppError::Internal(format!("Invalid stored password hash format: {}", e))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(e) => {
      error!(error = %e, "Argon2 password verification process errored.");
      Err(AppError::Internal(format!("Password verification failed: {}", e)))
    }
  }
}

/// JWT claims carried by a session token. `sub` is the user id; `exp` is
/// seconds since the epoch (validated by `jsonwebtoken` on decode).
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub sub: Uuid,
  pub email: String,
  pub role: String,
  pub iss: String,
  pub exp: i64,
}

/// Issues an HS256 session token for the given user identity.
#[instrument(name = "auth_service::issue_token", skip(secret, email, role), fields(user_id = %user_id))]
pub fn issue_token(
  secret: &str,
  issuer: &str,
  ttl_days: i64,
  user_id: Uuid,
  email: &str,
  role: &str,
) -> Result<String> {
  let claims = Claims {
    sub: user_id,
    email: email.to_string(),
    role: role.to_string(),
    iss: issuer.to_string(),
    exp: (Utc::now() + Duration::days(ttl_days)).timestamp(),
  };

  encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
    error!(error = %e, "JWT encoding failed.");
    AppError::Internal(format!("Token issuance failed: {}", e))
  })
}

/// Decodes and validates a session token (signature, expiry, issuer).
/// Any failure is an authentication error, not an internal one: the token
/// came from the caller.
#[instrument(name = "auth_service::decode_token", skip_all)]
pub fn decode_token(secret: &str, issuer: &str, token: &str) -> Result<Claims> {
  let mut validation = Validation::default();
  validation.set_issuer(&[issuer]);

  decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
    .map(|data| data.claims)
    .map_err(|e| {
      debug!(error = %e, "Session token rejected.");
      AppError::Auth("Invalid or expired session token.".to_string())
    })
}
