//! Infrastructure layer: database connection, config and the SQL-backed stores.

pub mod config;
pub mod db;
pub mod store;

pub use db::{DbConfig, connect};
pub use store::{CarStore, EngineStore, SqlCarStore, SqlEngineStore, StoreError, StoreResult};
