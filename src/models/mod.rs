//! Data structures representing database entities.

pub mod order;
pub mod order_line;
pub mod product;
pub mod user;

// Re-export the model structs for convenient access
pub use order::{Order, OrderStatus};
pub use order_line::OrderLine;
pub use product::Product;
pub use user::User;
