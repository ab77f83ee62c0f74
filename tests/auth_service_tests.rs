// tests/auth_service_tests.rs

use storefront::errors::AppError;
use storefront::services::auth_service;
use uuid::Uuid;

const SECRET: &str = "test-secret";
const ISSUER: &str = "storefront-test";

#[test]
fn hash_then_verify_round_trips() {
  let hash = auth_service::hash_password("hunter2!").unwrap();
  assert_ne!(hash, "hunter2!");
  assert!(auth_service::verify_password(&hash, "hunter2!").unwrap());
  assert!(!auth_service::verify_password(&hash, "hunter3!").unwrap());
}

#[test]
fn empty_password_is_rejected_for_hashing() {
  let err = auth_service::hash_password("").unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn issued_token_decodes_to_the_same_identity() {
  let user_id = Uuid::new_v4();
  let token = auth_service::issue_token(SECRET, ISSUER, 7, user_id, "a@example.com", "user").unwrap();

  let claims = auth_service::decode_token(SECRET, ISSUER, &token).unwrap();
  assert_eq!(claims.sub, user_id);
  assert_eq!(claims.email, "a@example.com");
  assert_eq!(claims.role, "user");
}

#[test]
fn tampered_token_is_rejected() {
  let token = auth_service::issue_token(SECRET, ISSUER, 7, Uuid::new_v4(), "a@example.com", "user").unwrap();
  let mut tampered = token.clone();
  tampered.pop(); // corrupt the signature

  let err = auth_service::decode_token(SECRET, ISSUER, &tampered).unwrap_err();
  assert!(matches!(err, AppError::Auth(_)));
}

#[test]
fn token_with_wrong_issuer_is_rejected() {
  let token = auth_service::issue_token(SECRET, "someone-else", 7, Uuid::new_v4(), "a@example.com", "user").unwrap();
  let err = auth_service::decode_token(SECRET, ISSUER, &token).unwrap_err();
  assert!(matches!(err, AppError::Auth(_)));
}

#[test]
fn expired_token_is_rejected() {
  // Negative TTL puts exp in the past.
  let token = auth_service::issue_token(SECRET, ISSUER, -1, Uuid::new_v4(), "a@example.com", "user").unwrap();
  let err = auth_service::decode_token(SECRET, ISSUER, &token).unwrap_err();
  assert!(matches!(err, AppError::Auth(_)));
}
