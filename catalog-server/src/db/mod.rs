//! Database Module
//!
//! Handles the SurrealDB connection and the insertion sequence used to keep
//! listings in the order they were written.

pub mod repository;

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use shared::AppError;
use shared::util::now_micros;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

/// Database service, owns a SurrealDB handle
///
/// The engine is picked from the connection string (`mem://` or
/// `rocksdb://<path>`). Cloning is cheap; every clone shares the same handle
/// and sequence clock.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
    clock: Arc<SequenceClock>,
}

impl DbService {
    /// Connect and select namespace / database
    pub async fn connect(url: &str, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db = any::connect(url)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database {url}: {e}")))?;

        db.use_ns(namespace).use_db(database).await.map_err(|e| {
            AppError::database(format!("Failed to select {namespace}/{database}: {e}"))
        })?;

        tracing::info!(url, namespace, database, "Database connection established");

        Ok(Self {
            db,
            clock: Arc::new(SequenceClock::default()),
        })
    }

    /// Next insertion sequence number
    pub fn next_seq(&self) -> i64 {
        self.clock.next()
    }
}

/// Strictly increasing, wall-clock anchored counter (microseconds)
///
/// Anchoring on the clock keeps sequences from a previous process run below
/// the new ones when the store is persistent.
#[derive(Debug, Default)]
struct SequenceClock {
    last: AtomicI64,
}

impl SequenceClock {
    fn next(&self) -> i64 {
        let now = now_micros();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev + 1)
    }
}
