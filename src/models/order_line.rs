use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A single line of an order. Owned exclusively by its parent [`Order`]:
/// lines are created, persisted, and read back only through the aggregate.
///
/// `unit_price` is the catalog price captured at placement time. It is
/// immutable once the line exists; later catalog price changes must not
/// touch it.
///
/// [`Order`]: crate::models::Order
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct OrderLine {
  pub id: Uuid,
  pub order_id: Uuid,
  pub product_id: Uuid,
  pub quantity: i32,
  pub unit_price: Decimal,
}
