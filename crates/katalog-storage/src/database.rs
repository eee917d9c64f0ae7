//! SQLite-backed entry store.
//!
//! Entries live in a single `instruments` table keyed by an integer primary
//! key, with a `UNIQUE` constraint on `name`. Queries are built at runtime,
//! so no database is needed at compile time.

use std::str::FromStr;

use async_trait::async_trait;
use katalog_core::{DatabaseConfig, Entry, EntryId, NewEntry};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Executor, FromRow, Sqlite};

use crate::traits::{EntryStore, SeedOutcome};
use crate::{Error, Result};

const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS instruments (
    id          INTEGER PRIMARY KEY,
    name        TEXT    NOT NULL UNIQUE,
    description TEXT    NOT NULL,
    image_url   TEXT    NOT NULL
)";

const SELECT_ALL: &str = "SELECT id, name, description, image_url FROM instruments ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, name, description, image_url FROM instruments WHERE id = ?";

const INSERT: &str = "INSERT INTO instruments (name, description, image_url) VALUES (?, ?, ?)";

const COUNT: &str = "SELECT COUNT(*) FROM instruments";

/// In-memory connection URL.
pub const MEMORY_URL: &str = "sqlite::memory:";

#[derive(FromRow)]
struct EntryRow {
    id: i64,
    name: String,
    description: String,
    image_url: String,
}

impl From<EntryRow> for Entry {
    fn from(row: EntryRow) -> Self {
        Entry {
            id: EntryId::new(row.id),
            name: row.name,
            description: row.description,
            image_reference: row.image_url,
        }
    }
}

/// Entry store on an `sqlx` SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the database named by `config` and create the schema if needed.
    ///
    /// File databases are created when missing. An in-memory database is
    /// pinned to a single long-lived connection, since every SQLite memory
    /// connection is its own database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool_options = if is_memory_url(&config.url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url = %config.url, "Opened SQLite pool");

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig {
            url: MEMORY_URL.to_string(),
            max_connections: 1,
        })
        .await
    }

    /// Create the `instruments` table if it does not exist.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

async fn count_entries<'c, E>(executor: E) -> Result<u64>
where
    E: Executor<'c, Database = Sqlite>,
{
    let count: i64 = sqlx::query_scalar(COUNT).fetch_one(executor).await?;
    Ok(u64::try_from(count).unwrap_or_default())
}

async fn insert_entry<'c, E>(executor: E, entry: &NewEntry) -> Result<EntryId>
where
    E: Executor<'c, Database = Sqlite>,
{
    let result = sqlx::query(INSERT)
        .bind(&entry.name)
        .bind(&entry.description)
        .bind(&entry.image_reference)
        .execute(executor)
        .await
        .map_err(|e| Error::from_insert(e, &entry.name))?;
    Ok(EntryId::new(result.last_insert_rowid()))
}

#[async_trait]
impl EntryStore for SqliteStore {
    async fn list_all(&self) -> Result<Vec<Entry>> {
        let rows: Vec<EntryRow> = sqlx::query_as(SELECT_ALL).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Entry::from).collect())
    }

    async fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>> {
        let row: Option<EntryRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Entry::from))
    }

    async fn create(&self, entry: NewEntry) -> Result<Entry> {
        entry.validate()?;
        let id = insert_entry(&self.pool, &entry).await?;
        tracing::debug!(entry_id = %id, name = %entry.name, "Created entry");
        Ok(entry.into_entry(id))
    }

    async fn count(&self) -> Result<u64> {
        count_entries(&self.pool).await
    }

    async fn seed_if_empty(&self, entries: &[NewEntry]) -> Result<SeedOutcome> {
        let mut tx = self.pool.begin().await?;

        let existing = count_entries(&mut *tx).await?;
        if existing > 0 {
            return Ok(SeedOutcome::AlreadyPopulated(existing));
        }

        for entry in entries {
            entry.validate()?;
        }
        for entry in entries {
            // An error here drops `tx`, rolling back the whole batch.
            insert_entry(&mut *tx, entry).await?;
        }
        tx.commit().await?;

        Ok(SeedOutcome::Seeded(entries.len() as u64))
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

// ============================================================================
// Tests
// ============================================================================
