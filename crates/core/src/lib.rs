//! `dealership-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! identifiers, the `Car`/`Engine` records and the domain error model.

pub mod error;
pub mod id;
pub mod model;

pub use error::{DomainError, DomainResult};
pub use id::{CarId, EngineId};
pub use model::{Car, Engine};
