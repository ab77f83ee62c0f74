//! Order placement: aggregate assembly and atomic persistence.

pub mod builder;
pub mod store;

use serde::Deserialize;
use uuid::Uuid;

pub use builder::build_order;
pub use store::{OrderStore, PgOrderStore};

/// One requested line of a submitted cart. Transient: consumed by the
/// builder to produce a priced `OrderLine`, never persisted directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
  pub product_id: Uuid,
  pub quantity: i32,
}
