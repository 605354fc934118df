//! HTTP request handlers for the dashboard API.
//!
//! This module re-exports handlers from focused submodules organized by domain.

pub mod dashboard;
pub mod seed;
pub mod stats;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use dashboard::{
    __path_get_card_data, __path_get_latest_invoices, __path_get_revenue, get_card_data,
    get_latest_invoices, get_revenue,
};
pub use seed::{__path_seed_database, seed_database};
pub use stats::{__path_health_check, health_check};
