//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] creates the dashboard tables if they are missing and
//! inserts a [`Fixtures`](crate::fixtures::Fixtures) dataset, all inside one
//! transaction.

pub mod schema;
mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
