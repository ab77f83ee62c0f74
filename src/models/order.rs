use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

use crate::models::OrderLine;

// Matches the `order_status_enum` type in schema.sql. Order placement only
// ever produces `Pending`; the remaining states exist for the persisted
// column and are driven by fulfilment flows outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Pending,
  Paid,
  Shipped,
  Cancelled,
}

/// The order aggregate root. `lines` is not a column; it is populated by the
/// store when the aggregate is read or persisted, and the two are never
/// observable apart.
///
/// `total_amount` is derived (sum of `quantity * unit_price` over `lines`)
/// and stored redundantly for fast reads. No code path may persist a
/// mismatched total.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub status: OrderStatus,
  pub total_amount: Decimal,
  pub created_at: DateTime<Utc>,
  #[sqlx(skip)]
  pub lines: Vec<OrderLine>,
}
