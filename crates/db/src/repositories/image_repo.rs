//! Repository for the `images` table.

use sqlx::PgPool;
use vislab_core::types::DbId;

use crate::models::image::{CreateImage, Image};

const COLUMNS: &str = "id, snapshot_id, file_name, split, created_at";

pub struct ImageRepo;

impl ImageRepo {
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (snapshot_id, file_name, split)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(input.snapshot_id)
            .bind(&input.file_name)
            .bind(&input.split)
            .fetch_one(pool)
            .await
    }

    /// List the images of a snapshot assigned to `split`, ordered by id.
    pub async fn list_by_split(
        pool: &PgPool,
        snapshot_id: DbId,
        split: &str,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM images
             WHERE snapshot_id = $1 AND split = $2
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(snapshot_id)
            .bind(split)
            .fetch_all(pool)
            .await
    }
}
