use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::catalog::PgCatalogReader;
use crate::errors::AppError;
use crate::orders::{build_order, OrderLineRequest, OrderStore, PgOrderStore};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTO ---
#[derive(Deserialize, Debug)]
pub struct PlaceOrderRequestPayload {
  pub items: Vec<OrderLineRequest>,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::place_order",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, line_count = req_payload.items.len())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<PlaceOrderRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  info!(
    "Order placement attempt by user {} with {} requested lines.",
    auth_user.user_id,
    req_payload.items.len()
  );

  // Validate every line and price the aggregate before anything is written.
  let catalog = PgCatalogReader::new(app_state.db_pool.clone());
  let order = build_order(auth_user.user_id, &req_payload.items, &catalog).await?;

  // One atomic commit; on failure nothing exists and the caller resubmits.
  let store = PgOrderStore::new(app_state.db_pool.clone());
  let order = store.save(order).await?;

  info!(
    "Order {} placed by user {}: {} lines, total {}.",
    order.id,
    auth_user.user_id,
    order.lines.len(),
    order.total_amount
  );

  Ok(HttpResponse::Created().json(json!({
      "message": "Order placed successfully.",
      "order": order,
  })))
}

#[instrument(name = "handler::my_orders", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn my_orders_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let store = PgOrderStore::new(app_state.db_pool.clone());
  let orders = store.list_by_user(auth_user.user_id).await?;

  info!("Fetched {} orders for user {}.", orders.len(), auth_user.user_id);
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}
