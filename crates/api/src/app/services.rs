//! Car service: the handler-facing boundary over the car and engine stores.
//!
//! Handlers only ever hold a [`SharedCarService`], so tests can swap in a double
//! without touching SQL. Store errors pass through untouched; status mapping is
//! the handlers' job.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::AnyPool;

use dealership_core::{Car, CarId};
use dealership_infra::{CarStore, EngineStore, SqlCarStore, SqlEngineStore, StoreResult};

/// Operations the HTTP layer needs.
#[async_trait]
pub trait CarService: Send + Sync {
    async fn get_car_by_id(&self, id: CarId) -> StoreResult<Car>;

    /// Cars of `brand` in store order. With `include_engine`, each car's `engine`
    /// is filled from the engine store; any engine lookup failure fails the call.
    async fn get_cars_by_brand(&self, brand: &str, include_engine: bool) -> StoreResult<Vec<Car>>;

    async fn create_car(&self, car: Car) -> StoreResult<Car>;

    async fn update_car(&self, id: CarId, car: Car) -> StoreResult<Car>;

    async fn delete_car(&self, id: CarId) -> StoreResult<Car>;
}

pub type SharedCarService = Arc<dyn CarService>;

/// Delegates every call to the stores.
pub struct StoreCarService<C, E> {
    cars: C,
    engines: E,
}

impl<C, E> StoreCarService<C, E> {
    pub fn new(cars: C, engines: E) -> Self {
        Self { cars, engines }
    }
}

#[async_trait]
impl<C, E> CarService for StoreCarService<C, E>
where
    C: CarStore,
    E: EngineStore,
{
    async fn get_car_by_id(&self, id: CarId) -> StoreResult<Car> {
        self.cars.get_car_by_id(id).await
    }

    async fn get_cars_by_brand(&self, brand: &str, include_engine: bool) -> StoreResult<Vec<Car>> {
        let mut cars = self.cars.get_cars_by_brand(brand).await?;
        if !include_engine {
            return Ok(cars);
        }

        // All-or-nothing: a missing engine row fails the lookup like any other error.
        for car in &mut cars {
            car.engine = self.engines.get_engine_by_id(car.engine.engine_id).await?;
        }
        Ok(cars)
    }

    async fn create_car(&self, car: Car) -> StoreResult<Car> {
        self.cars.create_car(car).await
    }

    async fn update_car(&self, id: CarId, car: Car) -> StoreResult<Car> {
        self.cars.update_car(id, car).await
    }

    async fn delete_car(&self, id: CarId) -> StoreResult<Car> {
        self.cars.delete_car(id).await
    }
}

/// Wire the SQL stores over one shared pool.
pub fn build_services(pool: AnyPool) -> SharedCarService {
    let cars = SqlCarStore::new(pool.clone());
    let engines = SqlEngineStore::new(pool);
    Arc::new(StoreCarService::new(cars, engines))
}
