//! Assembles a fully-priced order aggregate from a submitted cart.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::catalog::CatalogReader;
use crate::errors::{AppError, Result};
use crate::models::{Order, OrderLine, OrderStatus};
use crate::orders::OrderLineRequest;

/// Transforms a caller identity and an ordered sequence of requested lines
/// into a not-yet-persisted [`Order`], or fails atomically.
///
/// Each line's `unit_price` is the catalog price at the moment of lookup; a
/// later catalog change does not affect the returned aggregate. The price
/// may change between this lookup and the eventual persist, and that race is
/// accepted: the snapshot read here is authoritative for this order.
///
/// No side effects: the only external interaction is catalog reads. Nothing
/// is persisted until the aggregate is handed to the store, so a failure on
/// any line discards all lines processed so far.
#[instrument(name = "orders::build", skip(catalog, requests), fields(user_id = %user_id, line_count = requests.len()))]
pub async fn build_order<C: CatalogReader + ?Sized>(
  user_id: Uuid,
  requests: &[OrderLineRequest],
  catalog: &C,
) -> Result<Order> {
  if requests.is_empty() {
    warn!("Rejecting order with no items for user {}", user_id);
    return Err(AppError::EmptyOrder);
  }

  let order_id = Uuid::new_v4();
  let mut lines = Vec::with_capacity(requests.len());
  let mut total_amount = Decimal::ZERO;

  // Validate lines in submitted order, failing on the first violation.
  for request in requests {
    let product = catalog
      .lookup(request.product_id)
      .await?
      .ok_or(AppError::ProductNotFound {
        product_id: request.product_id,
      })?;

    if request.quantity < 1 {
      warn!(
        "Rejecting order for user {}: quantity {} for product {}",
        user_id, request.quantity, request.product_id
      );
      return Err(AppError::InvalidQuantity {
        product_id: request.product_id,
      });
    }

    let unit_price = product.price;
    total_amount += unit_price * Decimal::from(request.quantity);

    lines.push(OrderLine {
      id: Uuid::new_v4(),
      order_id,
      product_id: request.product_id,
      quantity: request.quantity,
      unit_price,
    });
  }

  info!(
    "Assembled order {} for user {}: {} lines, total {}",
    order_id,
    user_id,
    lines.len(),
    total_amount
  );

  Ok(Order {
    id: order_id,
    user_id,
    status: OrderStatus::Pending,
    total_amount,
    created_at: Utc::now(),
    lines,
  })
}
