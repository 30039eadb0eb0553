//! Entity stores: translate car/engine operations into parameterized SQL.
//!
//! `trait.rs` holds the store boundaries (used by the service layer and its test
//! doubles); `car.rs` and `engine.rs` hold the SQL implementations over an
//! injected [`sqlx::AnyPool`].

pub mod car;
pub mod engine;
pub mod r#trait;

pub use car::SqlCarStore;
pub use engine::SqlEngineStore;
pub use r#trait::{CarStore, EngineStore, StoreError, StoreResult};
