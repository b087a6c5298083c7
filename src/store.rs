//! Chunk persistence.
//!
//! Each chunk becomes one row: content, the flattened label columns, the
//! same labels as a metadata JSON object, and the embedding as a
//! little-endian f32 BLOB. Insert failures are returned to the caller,
//! which logs and continues; nothing here aborts a run.

use anyhow::Result;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::embedding::vec_to_blob;
use crate::models::CurriculumChunk;

pub async fn insert_chunk(
    pool: &SqlitePool,
    chunk: &CurriculumChunk,
    vector: &[f32],
) -> Result<()> {
    let id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp();
    let blob = vec_to_blob(vector);
    let content_hash = hash_text(&chunk.content);

    sqlx::query(
        r#"
        INSERT INTO chunks (id, subject, grade_level, content_type, heading, content, metadata_json, embedding, dims, content_hash, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&chunk.subject)
    .bind(&chunk.grade_level)
    .bind(chunk.content_type.as_str())
    .bind(&chunk.heading)
    .bind(&chunk.content)
    .bind(chunk.metadata_json())
    .bind(&blob)
    .bind(vector.len() as i64)
    .bind(&content_hash)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
