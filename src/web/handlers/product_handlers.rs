use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Product;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
  pub name: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub image_url: Option<String>,
}

impl ProductPayload {
  fn validate(&self) -> Result<(), AppError> {
    if self.name.trim().is_empty() {
      return Err(AppError::Validation("Product name is required.".to_string()));
    }
    if self.price < Decimal::ZERO {
      return Err(AppError::Validation("Product price cannot be negative.".to_string()));
    }
    Ok(())
  }
}

fn require_admin(auth_user: &AuthenticatedUser) -> Result<(), AppError> {
  if auth_user.is_admin() {
    Ok(())
  } else {
    warn!("User {} attempted catalog management without admin role.", auth_user.user_id);
    Err(AppError::Forbidden("Catalog management requires the admin role.".to_string()))
  }
}

// --- Handler Implementations ---

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products: Vec<Product> = sqlx::query_as(
    "SELECT id, name, description, price, image_url, created_at, updated_at FROM products ORDER BY name ASC",
  )
  .fetch_all(&app_state.db_pool)
  .await?;

  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(json!({ "products": products })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let product: Option<Product> = sqlx::query_as(
    "SELECT id, name, description, price, image_url, created_at, updated_at FROM products WHERE id = $1",
  )
  .bind(product_id)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match product {
    Some(product) => Ok(HttpResponse::Ok().json(json!({ "product": product }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(
    name = "handler::create_product",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, product_name = %req_payload.name)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ProductPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&auth_user)?;
  req_payload.validate()?;

  let product: Product = sqlx::query_as(
    "INSERT INTO products (id, name, description, price, image_url) VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, name, description, price, image_url, created_at, updated_at",
  )
  .bind(Uuid::new_v4())
  .bind(req_payload.name.trim())
  .bind(&req_payload.description)
  .bind(req_payload.price)
  .bind(&req_payload.image_url)
  .fetch_one(&app_state.db_pool)
  .await?;

  info!("Product {} created by user {}.", product.id, auth_user.user_id);
  Ok(HttpResponse::Created().json(json!({ "product": product })))
}

#[instrument(
    name = "handler::update_product",
    skip(app_state, req_payload, auth_user, path),
    fields(user_id = %auth_user.user_id, product_id = %path.as_ref())
)]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<ProductPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&auth_user)?;
  req_payload.validate()?;
  let product_id = path.into_inner();

  // Updates the current catalog price only; unit prices already captured on
  // order lines are left untouched.
  let product: Option<Product> = sqlx::query_as(
    "UPDATE products SET name = $2, description = $3, price = $4, image_url = $5, updated_at = NOW() \
     WHERE id = $1 \
     RETURNING id, name, description, price, image_url, created_at, updated_at",
  )
  .bind(product_id)
  .bind(req_payload.name.trim())
  .bind(&req_payload.description)
  .bind(req_payload.price)
  .bind(&req_payload.image_url)
  .fetch_optional(&app_state.db_pool)
  .await?;

  match product {
    Some(product) => {
      info!("Product {} updated by user {}.", product.id, auth_user.user_id);
      Ok(HttpResponse::Ok().json(json!({ "product": product })))
    }
    None => Err(AppError::NotFound(format!("Product with ID {} not found.", product_id))),
  }
}

#[instrument(
    name = "handler::delete_product",
    skip(app_state, auth_user, path),
    fields(user_id = %auth_user.user_id, product_id = %path.as_ref())
)]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  require_admin(&auth_user)?;
  let product_id = path.into_inner();

  let result = sqlx::query("DELETE FROM products WHERE id = $1")
    .bind(product_id)
    .execute(&app_state.db_pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)));
  }

  info!("Product {} deleted by user {}.", product_id, auth_user.user_id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted." })))
}
