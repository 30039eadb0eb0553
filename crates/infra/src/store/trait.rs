use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use dealership_core::{Car, CarId, Engine, EngineId};

/// Result type returned by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation error.
///
/// These are **infrastructure errors**. The service layer passes them through
/// unchanged; only the HTTP handler decides what status they become.
///
/// ## Error Categories
///
/// - **NotFound**: a single-row lookup matched nothing (`sqlx::Error::RowNotFound`)
/// - **Query**: a read statement failed
/// - **Exec**: a write statement (insert/update/delete) failed
/// - **Decode**: a row was read but one of its values is not a valid identifier
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("statement failed: {0}")]
    Exec(#[source] sqlx::Error),

    #[error("invalid row value: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Map a single-row lookup failure, turning "no row" into [`StoreError::NotFound`].
    pub(crate) fn lookup(entity: &'static str, id: impl ToString, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found(entity, id),
            other => Self::Query(other),
        }
    }
}

/// Car persistence boundary.
///
/// ## Semantics
///
/// - `create_car` stores the caller's `id` as-is (the store never generates car ids)
///   and persists only `engine.engine_id` from the embedded engine.
/// - `update_car` overwrites name/year/brand/fuel_type; engine linkage is not
///   updatable. The returned car always carries the `id` argument.
/// - `delete_car` returns an empty car on success whether or not a row existed.
/// - `get_cars_by_brand` is all-or-nothing: one bad row fails the whole call.
#[async_trait]
pub trait CarStore: Send + Sync {
    async fn get_car_by_id(&self, id: CarId) -> StoreResult<Car>;

    async fn get_cars_by_brand(&self, brand: &str) -> StoreResult<Vec<Car>>;

    async fn create_car(&self, car: Car) -> StoreResult<Car>;

    async fn update_car(&self, id: CarId, car: Car) -> StoreResult<Car>;

    async fn delete_car(&self, id: CarId) -> StoreResult<Car>;
}

/// Engine persistence boundary.
///
/// Same shape as [`CarStore`], except that `create_engine` always assigns a fresh
/// `engine_id` and ignores whatever the caller supplied.
#[async_trait]
pub trait EngineStore: Send + Sync {
    async fn get_engine_by_id(&self, id: EngineId) -> StoreResult<Engine>;

    async fn create_engine(&self, engine: Engine) -> StoreResult<Engine>;

    async fn update_engine(&self, id: EngineId, engine: Engine) -> StoreResult<Engine>;

    async fn delete_engine(&self, id: EngineId) -> StoreResult<Engine>;
}

#[async_trait]
impl<S> CarStore for Arc<S>
where
    S: CarStore + ?Sized,
{
    async fn get_car_by_id(&self, id: CarId) -> StoreResult<Car> {
        (**self).get_car_by_id(id).await
    }

    async fn get_cars_by_brand(&self, brand: &str) -> StoreResult<Vec<Car>> {
        (**self).get_cars_by_brand(brand).await
    }

    async fn create_car(&self, car: Car) -> StoreResult<Car> {
        (**self).create_car(car).await
    }

    async fn update_car(&self, id: CarId, car: Car) -> StoreResult<Car> {
        (**self).update_car(id, car).await
    }

    async fn delete_car(&self, id: CarId) -> StoreResult<Car> {
        (**self).delete_car(id).await
    }
}

#[async_trait]
impl<S> EngineStore for Arc<S>
where
    S: EngineStore + ?Sized,
{
    async fn get_engine_by_id(&self, id: EngineId) -> StoreResult<Engine> {
        (**self).get_engine_by_id(id).await
    }

    async fn create_engine(&self, engine: Engine) -> StoreResult<Engine> {
        (**self).create_engine(engine).await
    }

    async fn update_engine(&self, id: EngineId, engine: Engine) -> StoreResult<Engine> {
        (**self).update_engine(id, engine).await
    }

    async fn delete_engine(&self, id: EngineId) -> StoreResult<Engine> {
        (**self).delete_engine(id).await
    }
}

/// Parse an identifier column value, reporting which column was bad.
pub(crate) fn parse_id<T>(column: &str, raw: &str) -> StoreResult<T>
where
    T: core::str::FromStr<Err = dealership_core::DomainError>,
{
    raw.parse::<T>()
        .map_err(|e| StoreError::Decode(format!("{column}: {e}")))
}
