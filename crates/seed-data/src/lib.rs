//! Fixture data and database seeding for the dashboard.
//!
//! This crate owns the sample dataset shown by the dashboard (users,
//! customers, invoices and monthly revenue) and the [`Seeder`] that writes it
//! into PostgreSQL inside a single transaction.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = DatabaseConfig::from_env();
//! let pool = config.pool_options().connect_with(config.connect_options()?).await?;
//!
//! let summary = Seeder::new(Fixtures::placeholder()).seed(&pool).await?;
//! println!("inserted {} rows", summary.total());
//! ```

pub mod config;
pub mod db;
pub mod fixtures;
pub mod password;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DatabaseConfig, SslPolicy};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::fixtures::{
        CustomerFixture, FixtureError, Fixtures, InvoiceFixture, InvoiceStatus, RevenueFixture,
        UserFixture,
    };
    pub use crate::password::{hash_password, verify_password};
}
