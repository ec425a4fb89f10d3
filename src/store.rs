//! SQLite access: pooled connections, one transaction per write, table bootstrap.

use crate::config::AppConfig;
use crate::error::StoreError;
use crate::sql::{SqlValue, Statement};
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Sqlite, SqlitePool};

const TABLES_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS runs (
        route_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        comment TEXT NOT NULL DEFAULT '',
        excuses TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS routes (
        name TEXT NOT NULL,
        distance INTEGER NOT NULL
    )
    "#,
];

/// Outcome of a committed write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Executed {
    pub rows_affected: u64,
    /// Row id of the last successful insert on the connection. Only meaningful after an INSERT.
    pub last_insert_id: i64,
}

/// Shared handle to the store. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool on `config.database_file`, creating the file if it does not exist.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::new()
            .filename(&config.database_file)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(opts)
            .await
            .map_err(StoreError::Connect)?;
        tracing::info!(
            database_file = %config.database_file.display(),
            max_connections = config.max_connections,
            "store connected"
        );
        Ok(Store { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Store { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create `runs` and `routes` if missing. Existing tables are left untouched.
    pub async fn ensure_tables(&self) -> Result<(), StoreError> {
        for ddl in TABLES_DDL {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Execute)?;
        }
        Ok(())
    }

    /// Run one statement inside its own transaction. Nothing is committed unless every step succeeds;
    /// on error the transaction is dropped, which rolls it back.
    pub async fn with_transaction(&self, stmt: &Statement) -> Result<Executed, StoreError> {
        tracing::debug!(sql = %stmt.sql.trim(), params = ?stmt.params, "execute (tx)");
        let mut tx = self.pool.begin().await.map_err(StoreError::Begin)?;
        let result = bind_all(sqlx::query(stmt.sql), &stmt.params)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::Execute)?;
        tx.commit().await.map_err(StoreError::Commit)?;
        Ok(Executed {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        })
    }

    /// Read query outside a transaction; rows are decoded into `T` (typically a tuple).
    pub async fn fetch_all<T>(&self, sql: &'static str) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<_, T>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Query)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .fetch_optional(&self.pool)
            .await
            .map(|_| ())
            .map_err(StoreError::Query)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn bind_all<'q>(
    mut query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &[SqlValue],
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    for p in params {
        query = query.bind(p.clone());
    }
    query
}

/// Single-connection in-memory store with tables created. The connection is never recycled,
/// so the database lives as long as the pool.
#[cfg(test)]
pub(crate) async fn memory_store() -> Store {
    use std::str::FromStr;

    let opts = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await
        .unwrap();
    let store = Store::from_pool(pool);
    store.ensure_tables().await.unwrap();
    store
}
