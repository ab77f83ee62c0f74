// tests/order_builder_tests.rs
mod common;

use common::*;
use storefront::errors::AppError;
use storefront::models::OrderStatus;
use storefront::orders::build_order;
use uuid::Uuid;

#[tokio::test]
async fn builds_priced_aggregate_with_exact_total() {
  let catalog = InMemoryCatalog::new();
  let p1 = catalog.add_product("Keyboard", "19.99");
  let p2 = catalog.add_product("Mouse pad", "5.00");
  let user_id = Uuid::new_v4();

  let order = build_order(user_id, &[line(p1, 2), line(p2, 3)], &catalog)
    .await
    .expect("build should succeed");

  assert_eq!(order.user_id, user_id);
  assert_eq!(order.status, OrderStatus::Pending);
  assert_eq!(order.total_amount, dec("54.98"));
  assert_eq!(order.lines.len(), 2);

  // Lines preserve submission order and carry the catalog price snapshot.
  assert_eq!(order.lines[0].product_id, p1);
  assert_eq!(order.lines[0].quantity, 2);
  assert_eq!(order.lines[0].unit_price, dec("19.99"));
  assert_eq!(order.lines[1].product_id, p2);
  assert_eq!(order.lines[1].quantity, 3);
  assert_eq!(order.lines[1].unit_price, dec("5.00"));

  // Every line belongs to the aggregate root.
  assert!(order.lines.iter().all(|l| l.order_id == order.id));
}

#[tokio::test]
async fn total_is_exact_over_many_small_lines() {
  let catalog = InMemoryCatalog::new();
  let p = catalog.add_product("Sticker", "0.10");

  // 0.10 accumulated many times must not drift the way binary floats would.
  let requests: Vec<_> = (0..100).map(|_| line(p, 1)).collect();
  let order = build_order(Uuid::new_v4(), &requests, &catalog).await.unwrap();

  assert_eq!(order.total_amount, dec("10.00"));
}

#[tokio::test]
async fn empty_request_sequence_is_rejected() {
  let catalog = InMemoryCatalog::new();

  let err = build_order(Uuid::new_v4(), &[], &catalog).await.unwrap_err();
  assert!(matches!(err, AppError::EmptyOrder));
}

#[tokio::test]
async fn unknown_product_aborts_the_entire_build() {
  let catalog = InMemoryCatalog::new();
  let p1 = catalog.add_product("Keyboard", "19.99");
  let unknown = Uuid::new_v4();

  let err = build_order(Uuid::new_v4(), &[line(p1, 1), line(unknown, 1)], &catalog)
    .await
    .unwrap_err();

  match err {
    AppError::ProductNotFound { product_id } => assert_eq!(product_id, unknown),
    other => panic!("expected ProductNotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn non_positive_quantity_is_rejected() {
  let catalog = InMemoryCatalog::new();
  let p1 = catalog.add_product("Keyboard", "19.99");

  for bad_quantity in [0, -1] {
    let err = build_order(Uuid::new_v4(), &[line(p1, bad_quantity)], &catalog)
      .await
      .unwrap_err();
    match err {
      AppError::InvalidQuantity { product_id } => assert_eq!(product_id, p1),
      other => panic!("expected InvalidQuantity, got {:?}", other),
    }
  }
}

#[tokio::test]
async fn built_aggregate_keeps_price_snapshot_after_catalog_change() {
  let catalog = InMemoryCatalog::new();
  let p1 = catalog.add_product("Keyboard", "19.99");

  let order = build_order(Uuid::new_v4(), &[line(p1, 1)], &catalog).await.unwrap();
  catalog.set_price(p1, "24.99");

  assert_eq!(order.lines[0].unit_price, dec("19.99"));
  assert_eq!(order.total_amount, dec("19.99"));
}
