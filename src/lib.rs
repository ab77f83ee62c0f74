//! Storefront backend: registration/login, product catalog management, and
//! atomic order placement with price-at-purchase snapshots.

pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod orders;
pub mod services;
pub mod state;
pub mod web;
