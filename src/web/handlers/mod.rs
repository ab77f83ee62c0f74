// Declare handler modules
pub mod auth_handlers;
pub mod order_handlers;
pub mod product_handlers;
