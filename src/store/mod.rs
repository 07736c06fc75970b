//! PostgreSQL-backed store for products, leads, and analytics events

pub mod client;
pub mod connection;
pub mod error;
pub mod operations;
pub mod schema;

pub use client::Store;
pub use connection::StoreConfig;
pub use error::{Error as StoreError, Result};
