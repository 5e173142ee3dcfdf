//! Repository for the `snapshot_classes` table.

use sqlx::PgPool;
use vislab_core::types::DbId;

use crate::models::class::{CreateSnapshotClass, SnapshotClass};

const COLUMNS: &str = "id, snapshot_id, name, color, sequence, created_at";

/// Provides access to a snapshot's frozen class registry.
pub struct ClassRepo;

impl ClassRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSnapshotClass,
    ) -> Result<SnapshotClass, sqlx::Error> {
        let query = format!(
            "INSERT INTO snapshot_classes (snapshot_id, name, color, sequence)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SnapshotClass>(&query)
            .bind(input.snapshot_id)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.sequence)
            .fetch_one(pool)
            .await
    }

    /// List the registry of a snapshot in axis order (`sequence`, then id).
    pub async fn list_by_snapshot(
        pool: &PgPool,
        snapshot_id: DbId,
    ) -> Result<Vec<SnapshotClass>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM snapshot_classes
             WHERE snapshot_id = $1
             ORDER BY sequence ASC, id ASC"
        );
        sqlx::query_as::<_, SnapshotClass>(&query)
            .bind(snapshot_id)
            .fetch_all(pool)
            .await
    }
}
