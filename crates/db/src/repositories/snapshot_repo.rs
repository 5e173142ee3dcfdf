//! Repository for the `snapshots` table.

use sqlx::PgPool;
use vislab_core::types::DbId;

use crate::models::model::Snapshot;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct SnapshotRepo;

impl SnapshotRepo {
    /// Insert a new snapshot, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Snapshot, sqlx::Error> {
        let query = format!("INSERT INTO snapshots (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Snapshot>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Snapshot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM snapshots WHERE id = $1");
        sqlx::query_as::<_, Snapshot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
