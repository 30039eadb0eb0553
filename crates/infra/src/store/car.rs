//! SQL-backed car store.
//!
//! ## Error Mapping
//!
//! | Operation | sqlx failure | StoreError |
//! |-----------|--------------|------------|
//! | `get_car_by_id` | `RowNotFound` | `NotFound` |
//! | `get_car_by_id`, `get_cars_by_brand` | any other | `Query` |
//! | `create_car`, `update_car`, `delete_car` | any | `Exec` |
//! | any read | id column is not a UUID | `Decode` |

use async_trait::async_trait;
use sqlx::AnyPool;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::instrument;

use dealership_core::{Car, CarId, Engine, EngineId};

use super::r#trait::{parse_id, CarStore, StoreError, StoreResult};

/// Car store over a shared connection pool.
///
/// The row keeps only the engine's id; `engine` on a loaded car carries that id
/// and zero values for the other engine fields.
#[derive(Debug, Clone)]
pub struct SqlCarStore {
    pool: AnyPool,
}

impl SqlCarStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn car_from_row(row: &AnyRow) -> StoreResult<Car> {
    let id: String = row.try_get("id").map_err(StoreError::Query)?;
    let engine_id: String = row.try_get("engine_id").map_err(StoreError::Query)?;

    Ok(Car {
        id: parse_id::<CarId>("id", &id)?,
        engine: Engine::reference(parse_id::<EngineId>("engine_id", &engine_id)?),
        name: row.try_get("name").map_err(StoreError::Query)?,
        year: row.try_get("year").map_err(StoreError::Query)?,
        brand: row.try_get("brand").map_err(StoreError::Query)?,
        fuel_type: row.try_get("fuel_type").map_err(StoreError::Query)?,
    })
}

#[async_trait]
impl CarStore for SqlCarStore {
    #[instrument(skip(self), fields(car_id = %id), err)]
    async fn get_car_by_id(&self, id: CarId) -> StoreResult<Car> {
        let row = sqlx::query(
            r#"
            SELECT id, engine_id, name, year, brand, fuel_type
            FROM Car
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::lookup("car", id, e))?;

        car_from_row(&row)
    }

    #[instrument(skip(self), fields(car_count = tracing::field::Empty), err)]
    async fn get_cars_by_brand(&self, brand: &str) -> StoreResult<Vec<Car>> {
        let rows = sqlx::query(
            r#"
            SELECT id, engine_id, name, year, brand, fuel_type
            FROM Car
            WHERE brand = ?
            "#,
        )
        .bind(brand)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        // One bad row discards everything read so far.
        let cars = rows.iter().map(car_from_row).collect::<StoreResult<Vec<_>>>()?;

        tracing::Span::current().record("car_count", cars.len());
        Ok(cars)
    }

    #[instrument(skip(self, car), fields(car_id = %car.id, engine_id = %car.engine.engine_id), err)]
    async fn create_car(&self, car: Car) -> StoreResult<Car> {
        sqlx::query(
            r#"
            INSERT INTO Car (id, engine_id, name, year, brand, fuel_type)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(car.id.to_string())
        .bind(car.engine.engine_id.to_string())
        .bind(car.name.as_str())
        .bind(car.year)
        .bind(car.brand.as_str())
        .bind(car.fuel_type.as_str())
        .execute(&self.pool)
        .await
        .map_err(StoreError::Exec)?;

        Ok(car)
    }

    #[instrument(skip(self, car), fields(car_id = %id), err)]
    async fn update_car(&self, id: CarId, car: Car) -> StoreResult<Car> {
        sqlx::query(
            r#"
            UPDATE Car
            SET name = ?, year = ?, brand = ?, fuel_type = ?
            WHERE id = ?
            "#,
        )
        .bind(car.name.as_str())
        .bind(car.year)
        .bind(car.brand.as_str())
        .bind(car.fuel_type.as_str())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(StoreError::Exec)?;

        Ok(car.with_id(id))
    }

    #[instrument(skip(self), fields(car_id = %id), err)]
    async fn delete_car(&self, id: CarId) -> StoreResult<Car> {
        // No rows-affected check: deleting a missing car succeeds.
        sqlx::query("DELETE FROM Car WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StoreError::Exec)?;

        Ok(Car::default())
    }
}
