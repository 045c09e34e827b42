//! Repository Module
//!
//! Document-collection operations over SurrealDB tables.
//!
//! Every record is keyed by the application identifier
//! (`property:p1`, `lot:lot3`) and stored as an envelope:
//!
//! ```text
//! { doc: <entity JSON>, seq: <insertion sequence> }
//! ```
//!
//! The record key never leaks into responses: reads project `doc` only, so
//! the entity's own `id` field is what the client sees. `seq` gives the list
//! order, since table scans come back in key order.

pub mod lot;
pub mod property;

// Re-exports
pub use lot::LotRepository;
pub use property::PropertyRepository;

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use shared::AppError;
use shared::models::CatalogItem;
use thiserror::Error;

use crate::db::DbService;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // CREATE on an existing key
        if msg.contains("already exists") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// A catalog entity stored in its own table
pub trait TableItem: CatalogItem {
    /// SurrealDB table name
    const TABLE: &'static str;
}

/// Stored envelope
#[derive(Debug, Serialize, Deserialize)]
struct Stored<T> {
    doc: T,
    seq: i64,
}

/// One row of a batch insert; `key` becomes the record key
#[derive(Debug, Serialize)]
struct BatchRow<T> {
    key: String,
    doc: T,
    seq: i64,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: i64,
}

const INSERT_BATCH: &str = r#"
    FOR $row IN $rows {
        CREATE type::thing($tb, $row.key) CONTENT { doc: $row.doc, seq: $row.seq } RETURN NONE;
    };
"#;

/// Document collection for one entity kind
///
/// All operations are single statements except [`Repository::insert_many`]
/// and [`Repository::replace_all`], which run inside one transaction.
pub struct Repository<T> {
    db: DbService,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: TableItem> Repository<T> {
    pub fn new(db: DbService) -> Self {
        Self {
            db,
            _kind: PhantomData,
        }
    }

    /// All documents in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        let rows: Vec<Stored<T>> = self
            .db
            .db
            .query("SELECT doc, seq FROM type::table($tb) ORDER BY seq ASC")
            .bind(("tb", T::TABLE))
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(|r| r.doc).collect())
    }

    /// Find document by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        let rows: Vec<Stored<T>> = self
            .db
            .db
            .query("SELECT doc, seq FROM type::thing($tb, $id)")
            .bind(("tb", T::TABLE))
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(|r| r.doc))
    }

    /// Create a document from a draft with a freshly generated id
    pub async fn create(&self, draft: T::Draft) -> RepoResult<T> {
        let item = T::from_draft(T::generate_id(), draft);
        self.insert_one(item.clone()).await?;
        Ok(item)
    }

    /// Insert a fully formed document; fails with `Duplicate` if the id exists
    pub async fn insert_one(&self, item: T) -> RepoResult<()> {
        let id = item.id().to_string();
        if id.is_empty() {
            return Err(RepoError::Validation(format!(
                "{} record without id",
                T::TABLE
            )));
        }

        let record = Stored {
            doc: item,
            seq: self.db.next_seq(),
        };
        self.db
            .db
            .query("CREATE type::thing($tb, $id) CONTENT $record RETURN NONE")
            .bind(("tb", T::TABLE))
            .bind(("id", id))
            .bind(("record", record))
            .await?
            .check()?;
        Ok(())
    }

    /// Insert documents in order, atomically
    pub async fn insert_many(&self, items: Vec<T>) -> RepoResult<usize> {
        let rows = self.batch_rows(items)?;
        let count = rows.len();
        if count == 0 {
            return Ok(0);
        }

        self.db
            .db
            .query("BEGIN TRANSACTION;")
            .query(INSERT_BATCH)
            .query("COMMIT TRANSACTION;")
            .bind(("tb", T::TABLE))
            .bind(("rows", rows))
            .await?
            .check()?;
        Ok(count)
    }

    /// Replace every field of an existing document
    ///
    /// The stored `id` is forced to `id`; returns `None` when no such
    /// document exists (nothing is created).
    pub async fn update(&self, id: &str, draft: T::Draft) -> RepoResult<Option<T>> {
        let item = T::from_draft(id.to_string(), draft);
        let rows: Vec<Stored<T>> = self
            .db
            .db
            .query("UPDATE type::thing($tb, $id) SET doc = $doc RETURN AFTER")
            .bind(("tb", T::TABLE))
            .bind(("id", id.to_string()))
            .bind(("doc", item))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(|r| r.doc))
    }

    /// Delete a document; `false` when it did not exist
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rows: Vec<Stored<T>> = self
            .db
            .db
            .query("DELETE type::thing($tb, $id) RETURN BEFORE")
            .bind(("tb", T::TABLE))
            .bind(("id", id.to_string()))
            .await?
            .take(0)?;
        Ok(!rows.is_empty())
    }

    /// Delete every document in the table
    pub async fn delete_all(&self) -> RepoResult<()> {
        self.db
            .db
            .query("DELETE type::table($tb) RETURN NONE")
            .bind(("tb", T::TABLE))
            .await?
            .check()?;
        Ok(())
    }

    pub async fn count(&self) -> RepoResult<usize> {
        let rows: Vec<CountRow> = self
            .db
            .db
            .query("SELECT count() AS total FROM type::table($tb) GROUP ALL")
            .bind(("tb", T::TABLE))
            .await?
            .take(0)?;
        let total = rows.first().map(|r| r.total).unwrap_or(0);
        Ok(usize::try_from(total).unwrap_or(0))
    }

    /// Wipe the table and insert `items` in order, in one transaction
    pub async fn replace_all(&self, items: Vec<T>) -> RepoResult<usize> {
        let rows = self.batch_rows(items)?;
        let count = rows.len();

        self.db
            .db
            .query("BEGIN TRANSACTION;")
            .query("DELETE type::table($tb) RETURN NONE;")
            .query(INSERT_BATCH)
            .query("COMMIT TRANSACTION;")
            .bind(("tb", T::TABLE))
            .bind(("rows", rows))
            .await?
            .check()?;

        tracing::debug!(table = T::TABLE, count, "Collection replaced");
        Ok(count)
    }

    /// Replace the collection with drafts, assigning fresh ids in list order
    pub async fn replace_all_drafts(&self, drafts: Vec<T::Draft>) -> RepoResult<Vec<T>> {
        let items: Vec<T> = drafts
            .into_iter()
            .map(|d| T::from_draft(T::generate_id(), d))
            .collect();
        self.replace_all(items.clone()).await?;
        Ok(items)
    }

    fn batch_rows(&self, items: Vec<T>) -> RepoResult<Vec<BatchRow<T>>> {
        items
            .into_iter()
            .map(|item| {
                let key = item.id().to_string();
                if key.is_empty() {
                    return Err(RepoError::Validation(format!(
                        "{} record without id",
                        T::TABLE
                    )));
                }
                Ok(BatchRow {
                    key,
                    doc: item,
                    seq: self.db.next_seq(),
                })
            })
            .collect()
    }
}
