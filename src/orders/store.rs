//! Atomic persistence for the order aggregate.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::Result;
use crate::models::{Order, OrderLine};

#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Persists the order and every one of its lines as one atomic unit.
  /// Either the whole aggregate becomes durable or none of it does; a
  /// partially-written order is never visible to readers.
  ///
  /// Persistence failures are surfaced as-is and never retried here: a
  /// create is not idempotent, and a blind retry risks duplicate orders.
  // TODO: accept a client-supplied idempotency key (unique-indexed) so a
  // network-level retry of POST /orders cannot create a duplicate order.
  async fn save(&self, order: Order) -> Result<Order>;

  /// All orders owned by `user_id`, newest first (created_at DESC, id as
  /// tie-break), each with its lines in their original insertion order.
  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>>;
}

/// Order persistence backed by PostgreSQL. Each `save` runs in its own
/// transaction; concurrent saves for different users do not block each
/// other.
#[derive(Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "orders::save", skip(self, order), fields(order_id = %order.id, user_id = %order.user_id))]
  async fn save(&self, order: Order) -> Result<Order> {
    let mut tx = self.pool.begin().await?;

    sqlx::query(
      "INSERT INTO orders (id, user_id, status, total_amount, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(order.id)
    .bind(order.user_id)
    .bind(order.status)
    .bind(order.total_amount)
    .bind(order.created_at)
    .execute(&mut *tx)
    .await?;

    // `position` records submission order so reads can reproduce it.
    for (position, line) in order.lines.iter().enumerate() {
      sqlx::query(
        "INSERT INTO order_items (id, order_id, product_id, quantity, unit_price, position) \
         VALUES ($1, $2, $3, $4, $5, $6)",
      )
      .bind(line.id)
      .bind(line.order_id)
      .bind(line.product_id)
      .bind(line.quantity)
      .bind(line.unit_price)
      .bind(position as i32)
      .execute(&mut *tx)
      .await?;
    }

    tx.commit().await?;

    info!(
      "Persisted order {} with {} lines for user {}",
      order.id,
      order.lines.len(),
      order.user_id
    );
    Ok(order)
  }

  #[instrument(name = "orders::list_by_user", skip(self), fields(user_id = %user_id))]
  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>> {
    let mut orders: Vec<Order> = sqlx::query_as(
      "SELECT id, user_id, status, total_amount, created_at FROM orders \
       WHERE user_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await?;

    if orders.is_empty() {
      return Ok(orders);
    }

    let order_ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
    let lines: Vec<OrderLine> = sqlx::query_as(
      "SELECT id, order_id, product_id, quantity, unit_price FROM order_items \
       WHERE order_id = ANY($1) ORDER BY order_id, position",
    )
    .bind(&order_ids)
    .fetch_all(&self.pool)
    .await?;

    for order in orders.iter_mut() {
      order.lines = lines.iter().filter(|l| l.order_id == order.id).cloned().collect();
    }

    Ok(orders)
  }
}
