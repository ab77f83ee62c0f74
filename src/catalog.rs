//! Read-only catalog port used by order placement.
//!
//! Order placement never talks to the products table directly; it goes
//! through [`CatalogReader`] so tests can substitute an in-memory catalog
//! and so the placement code cannot accidentally mutate catalog state.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::Result;
use crate::models::Product;

#[async_trait]
pub trait CatalogReader: Send + Sync {
  /// Resolves a product to its current catalog snapshot, or `None` if the
  /// product does not exist. Side-effect-free.
  async fn lookup(&self, product_id: Uuid) -> Result<Option<Product>>;
}

/// Catalog reads backed by the live products table.
#[derive(Clone)]
pub struct PgCatalogReader {
  pool: PgPool,
}

impl PgCatalogReader {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CatalogReader for PgCatalogReader {
  async fn lookup(&self, product_id: Uuid) -> Result<Option<Product>> {
    let product: Option<Product> = sqlx::query_as(
      "SELECT id, name, description, price, image_url, created_at, updated_at FROM products WHERE id = $1",
    )
    .bind(product_id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(product)
  }
}
