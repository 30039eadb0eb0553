//! Database connection factory.
//!
//! The stores only ever see an [`AnyPool`]; which SQL backend sits behind it is
//! decided by the URL scheme (`mysql://...` in production, `sqlite::memory:` for
//! local runs and tests). Statements are written with `?` placeholders, which
//! both dialects accept.

use std::time::Duration;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::config::{env_parse, env_string};

const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the relational store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    /// Create the `Engine`/`Car` tables if they are missing (dev/test only).
    pub bootstrap_schema: bool,
}

impl DbConfig {
    /// Load from `DATABASE_URL`, `DB_MAX_CONNECTIONS` and `DB_BOOTSTRAP_SCHEMA`.
    pub fn from_env() -> Self {
        let url = env_string("DATABASE_URL", DEFAULT_DATABASE_URL);
        let bootstrap_default = is_sqlite(&url);
        Self {
            max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            bootstrap_schema: env_parse("DB_BOOTSTRAP_SCHEMA", bootstrap_default),
            url,
        }
    }

    /// A private in-memory SQLite database with the schema created.
    pub fn in_memory() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 1,
            bootstrap_schema: true,
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Open a pool, verify it with a round trip and optionally create the schema.
pub async fn connect(cfg: &DbConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let mut options = AnyPoolOptions::new()
        .max_connections(cfg.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(5));

    // Every SQLite in-memory connection is its own database, so the pool must
    // hold exactly one connection and never recycle it.
    if is_in_memory(&cfg.url) {
        options = options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(&cfg.url).await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    if cfg.bootstrap_schema {
        bootstrap_schema(&pool).await?;
    }

    tracing::info!(
        backend = backend_name(&cfg.url),
        max_connections = cfg.max_connections,
        bootstrap_schema = cfg.bootstrap_schema,
        "connected"
    );

    Ok(pool)
}

/// Create the two tables when they do not exist yet.
///
/// No foreign key from `Car.engine_id` to `Engine.id`: a car may reference an
/// engine row that is managed (or not yet created) elsewhere.
pub async fn bootstrap_schema(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Engine (
            id           CHAR(36) NOT NULL PRIMARY KEY,
            displacement BIGINT   NOT NULL,
            cylinders    BIGINT   NOT NULL,
            `range`      BIGINT   NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Car (
            id        CHAR(36)     NOT NULL PRIMARY KEY,
            engine_id CHAR(36)     NOT NULL,
            name      VARCHAR(255) NOT NULL,
            year      BIGINT       NOT NULL,
            brand     VARCHAR(255) NOT NULL,
            fuel_type VARCHAR(64)  NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn is_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:")
}

fn is_in_memory(url: &str) -> bool {
    is_sqlite(url) && url.contains(":memory:")
}

fn backend_name(url: &str) -> &str {
    url.split(':').next().unwrap_or("unknown")
}
