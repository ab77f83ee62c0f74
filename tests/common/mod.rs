// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use storefront::catalog::CatalogReader;
use storefront::errors::Result;
use storefront::models::{Order, Product};
use storefront::orders::{OrderLineRequest, OrderStore};

pub fn dec(s: &str) -> Decimal {
  s.parse::<Decimal>().expect("valid decimal literal")
}

pub fn line(product_id: Uuid, quantity: i32) -> OrderLineRequest {
  OrderLineRequest { product_id, quantity }
}

// --- In-memory catalog fixture ---

pub struct InMemoryCatalog {
  products: Mutex<HashMap<Uuid, Product>>,
}

impl InMemoryCatalog {
  pub fn new() -> Self {
    Self {
      products: Mutex::new(HashMap::new()),
    }
  }

  /// Adds a product at the given price and returns its id.
  pub fn add_product(&self, name: &str, price: &str) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let product = Product {
      id,
      name: name.to_string(),
      description: None,
      price: dec(price),
      image_url: None,
      created_at: now,
      updated_at: now,
    };
    self.products.lock().unwrap().insert(id, product);
    id
  }

  /// Repoints the catalog price. Already-built order lines must not notice.
  pub fn set_price(&self, product_id: Uuid, price: &str) {
    let mut guard = self.products.lock().unwrap();
    let product = guard.get_mut(&product_id).expect("product exists");
    product.price = dec(price);
    product.updated_at = Utc::now();
  }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
  async fn lookup(&self, product_id: Uuid) -> Result<Option<Product>> {
    Ok(self.products.lock().unwrap().get(&product_id).cloned())
  }
}

// --- In-memory order store fixture ---

pub struct InMemoryOrderStore {
  orders: Mutex<Vec<Order>>,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self {
      orders: Mutex::new(Vec::new()),
    }
  }

  pub fn order_count(&self) -> usize {
    self.orders.lock().unwrap().len()
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn save(&self, order: Order) -> Result<Order> {
    // The whole aggregate lands in one push: no reader can observe an order
    // without its lines.
    self.orders.lock().unwrap().push(order.clone());
    Ok(order)
  }

  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>> {
    let mut owned: Vec<Order> = self
      .orders
      .lock()
      .unwrap()
      .iter()
      .filter(|o| o.user_id == user_id)
      .cloned()
      .collect();
    // Newest first with id tie-break, matching the SQL-backed store.
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
    Ok(owned)
  }
}
