//! SQL-backed engine store.
//!
//! Unlike cars, the engine store is authoritative for identity: `create_engine`
//! replaces whatever `engine_id` the caller sent with a fresh one.

use async_trait::async_trait;
use sqlx::AnyPool;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::instrument;

use dealership_core::{Engine, EngineId};

use super::r#trait::{parse_id, EngineStore, StoreError, StoreResult};

/// Engine store over a shared connection pool.
#[derive(Debug, Clone)]
pub struct SqlEngineStore {
    pool: AnyPool,
}

impl SqlEngineStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

fn engine_from_row(row: &AnyRow) -> StoreResult<Engine> {
    let id: String = row.try_get("id").map_err(StoreError::Query)?;

    Ok(Engine {
        engine_id: parse_id("id", &id)?,
        displacement: row.try_get("displacement").map_err(StoreError::Query)?,
        cylinder_count: row.try_get("cylinders").map_err(StoreError::Query)?,
        range: row.try_get("range").map_err(StoreError::Query)?,
    })
}

#[async_trait]
impl EngineStore for SqlEngineStore {
    #[instrument(skip(self), fields(engine_id = %id), err)]
    async fn get_engine_by_id(&self, id: EngineId) -> StoreResult<Engine> {
        let row = sqlx::query(
            r#"
            SELECT id, displacement, cylinders, `range`
            FROM Engine
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::lookup("engine", id, e))?;

        engine_from_row(&row)
    }

    #[instrument(skip(self, engine), fields(engine_id = tracing::field::Empty), err)]
    async fn create_engine(&self, mut engine: Engine) -> StoreResult<Engine> {
        engine.engine_id = EngineId::new();
        tracing::Span::current().record("engine_id", tracing::field::display(engine.engine_id));

        sqlx::query(
            r#"
            INSERT INTO Engine (id, displacement, cylinders, `range`)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(engine.engine_id.to_string())
        .bind(engine.displacement)
        .bind(engine.cylinder_count)
        .bind(engine.range)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Exec)?;

        Ok(engine)
    }

    #[instrument(skip(self, engine), fields(engine_id = %id), err)]
    async fn update_engine(&self, id: EngineId, mut engine: Engine) -> StoreResult<Engine> {
        sqlx::query(
            r#"
            UPDATE Engine
            SET displacement = ?, cylinders = ?, `range` = ?
            WHERE id = ?
            "#,
        )
        .bind(engine.displacement)
        .bind(engine.cylinder_count)
        .bind(engine.range)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(StoreError::Exec)?;

        engine.engine_id = id;
        Ok(engine)
    }

    #[instrument(skip(self), fields(engine_id = %id), err)]
    async fn delete_engine(&self, id: EngineId) -> StoreResult<Engine> {
        sqlx::query("DELETE FROM Engine WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StoreError::Exec)?;

        Ok(Engine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, DbConfig};

    async fn test_store() -> (SqlEngineStore, AnyPool) {
        let pool = connect(&DbConfig::in_memory()).await.unwrap();
        (SqlEngineStore::new(pool.clone()), pool)
    }

    fn v8() -> Engine {
        Engine {
            engine_id: EngineId::nil(),
            displacement: 400,
            cylinder_count: 8,
            range: 600,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_id_ignoring_caller() {
        let (store, _pool) = test_store().await;
        let supplied = EngineId::new();
        let input = Engine {
            engine_id: supplied,
            ..v8()
        };

        let created = store.create_engine(input.clone()).await.unwrap();
        assert_ne!(created.engine_id, supplied);
        assert!(!created.engine_id.is_nil());
        assert_eq!(Engine { engine_id: supplied, ..created.clone() }, input);

        let fetched = store.get_engine_by_id(created.engine_id).await.unwrap();
        assert_eq!(fetched, created);

        // The caller's id was never written.
        assert!(matches!(
            store.get_engine_by_id(supplied).await,
            Err(StoreError::NotFound { entity: "engine", .. })
        ));
    }

    #[tokio::test]
    async fn creating_twice_yields_two_engines() {
        let (store, _pool) = test_store().await;
        let a = store.create_engine(v8()).await.unwrap();
        let b = store.create_engine(v8()).await.unwrap();
        assert_ne!(a.engine_id, b.engine_id);
    }

    #[tokio::test]
    async fn update_overwrites_and_forces_path_id() {
        let (store, _pool) = test_store().await;
        let created = store.create_engine(v8()).await.unwrap();

        let change = Engine {
            engine_id: EngineId::new(),
            displacement: 200,
            cylinder_count: 4,
            range: 350,
        };
        let updated = store.update_engine(created.engine_id, change).await.unwrap();
        assert_eq!(updated.engine_id, created.engine_id);

        let fetched = store.get_engine_by_id(created.engine_id).await.unwrap();
        assert_eq!(fetched.displacement, 200);
        assert_eq!(fetched.cylinder_count, 4);
        assert_eq!(fetched.range, 350);
    }

    #[tokio::test]
    async fn delete_returns_empty_engine() {
        let (store, _pool) = test_store().await;
        let created = store.create_engine(v8()).await.unwrap();

        assert_eq!(store.delete_engine(created.engine_id).await.unwrap(), Engine::default());
        assert!(store.get_engine_by_id(created.engine_id).await.is_err());
        assert_eq!(store.delete_engine(EngineId::new()).await.unwrap(), Engine::default());
    }

    #[tokio::test]
    async fn closed_pool_fails_create() {
        let (store, pool) = test_store().await;
        pool.close().await;

        assert!(matches!(store.create_engine(v8()).await, Err(StoreError::Exec(_))));
    }
}
