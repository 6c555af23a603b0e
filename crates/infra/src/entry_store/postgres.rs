//! Postgres-backed entry store.
//!
//! ## Schema
//!
//! One table, created on connect if missing:
//!
//! | column | type | notes |
//! |---|---|---|
//! | `id` | `UUID` | primary key, minted by the store (UUIDv7) |
//! | `text` | `TEXT` | replaced by updates |
//! | `created_at` | `TIMESTAMPTZ` | `NOW()` at insert, never updated |
//! | `seq` | `BIGSERIAL` | insertion order, tie-breaker for listings |
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | PoolTimedOut / PoolClosed / Io / Tls | `Connection` |
//! | ColumnDecode / ColumnNotFound / Decode | `Decode` |
//! | Database / anything else | `Query` |

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use gratitude_core::{Entry, EntryId};

use super::r#trait::{EntryStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id          UUID PRIMARY KEY,
    text        TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    seq         BIGSERIAL NOT NULL
)
"#;

const CREATE_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS entries_recent_idx ON entries (created_at DESC, seq DESC)
"#;

/// Postgres-backed entry store.
///
/// `Send + Sync` and cheap to clone; the SQLx pool handles connection
/// management. Every operation is a single statement, so each call is atomic
/// on its own.
#[derive(Debug, Clone)]
pub struct PostgresEntryStore {
    pool: PgPool,
}

impl PostgresEntryStore {
    /// Wrap an existing pool. Does not touch the schema.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the `entries` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `entries` table and its listing index if missing.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create table", e))?;
        sqlx::query(CREATE_INDEX)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("create index", e))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryStore for PostgresEntryStore {
    #[instrument(skip(self, text), err)]
    async fn insert(&self, text: String) -> Result<Entry, StoreError> {
        let row = sqlx::query(
            r#"
            INSERT INTO entries (id, text)
            VALUES ($1, $2)
            RETURNING id, text, created_at
            "#,
        )
        .bind(Uuid::from(EntryId::new()))
        .bind(&text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        entry_from_row(&row)
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Entry>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, text, created_at
            FROM entries
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        rows.iter().map(entry_from_row).collect()
    }

    #[instrument(skip(self, text), fields(entry_id = %id), err)]
    async fn find_by_id_and_update(
        &self,
        id: EntryId,
        text: String,
    ) -> Result<Option<Entry>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE entries
            SET text = $2
            WHERE id = $1
            RETURNING id, text, created_at
            "#,
        )
        .bind(*id.as_uuid())
        .bind(&text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        row.as_ref().map(entry_from_row).transpose()
    }

    #[instrument(skip(self), fields(entry_id = %id), err)]
    async fn find_by_id_and_delete(&self, id: EntryId) -> Result<Option<Entry>, StoreError> {
        let row = sqlx::query(
            r#"
            DELETE FROM entries
            WHERE id = $1
            RETURNING id, text, created_at
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("delete", e))?;

        row.as_ref().map(entry_from_row).transpose()
    }
}

fn entry_from_row(row: &PgRow) -> Result<Entry, StoreError> {
    let decode = |e: sqlx::Error| map_sqlx_error("decode row", e);

    let id: Uuid = row.try_get("id").map_err(decode)?;
    let text: String = row.try_get("text").map_err(decode)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;

    Ok(Entry::new(EntryId::from_uuid(id), text, created_at))
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Connection(format!("{operation}: {err}")),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => StoreError::Decode(format!("{operation}: {err}")),
        sqlx::Error::Database(db_err) => {
            StoreError::Query(format!("database error in {operation}: {}", db_err.message()))
        }
        other => StoreError::Query(format!("{operation}: {other}")),
    }
}
