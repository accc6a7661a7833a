// Foodie Express - restaurant catalog service

// Domain model - restaurants, reviews, menu items, cuisines, users
pub mod models;

// Query/aggregation layer - slug lookup, filtering, search, menu grouping
pub mod catalog;

// Catalog store - fixture-backed and sqlite-backed document stores
pub mod store;

// HTTP surface - REST handlers and the response envelope
pub mod routes;

// Common utilities
pub mod app_state;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{AppError, AppResult};
