//! Database statistics and health overview.
//!
//! Provides a quick summary of what's indexed: chunk counts, per-subject and
//! per-content-type breakdowns. Used by `laroplan stats` to give confidence
//! that an ingest run landed what it reported.

use anyhow::Result;
use sqlx::Row;

use crate::config::Config;
use crate::db;

/// Run the stats command: query the database and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    let total_chunks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chunks")
        .fetch_one(&pool)
        .await?;

    let subject_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT subject) FROM chunks")
        .fetch_one(&pool)
        .await?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Läroplan Ingest — Database Stats");
    println!("================================");
    println!();
    println!("  Database:    {}", config.db.path.display());
    println!("  Size:        {}", format_bytes(db_size));
    println!();
    println!("  Chunks:      {}", total_chunks);
    println!("  Subjects:    {}", subject_count);

    let subject_rows = sqlx::query(
        r#"
        SELECT subject, COUNT(*) AS chunk_count, MAX(created_at) AS last_ingest
        FROM chunks
        GROUP BY subject
        ORDER BY chunk_count DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !subject_rows.is_empty() {
        println!();
        println!("  By subject:");
        println!("  {:<24} {:>8}   {}", "SUBJECT", "CHUNKS", "LAST INGEST");
        println!("  {}", "-".repeat(52));

        for row in &subject_rows {
            let subject: String = row.get("subject");
            let chunk_count: i64 = row.get("chunk_count");
            let last_ingest: Option<i64> = row.get("last_ingest");
            let when = last_ingest.map(format_ts_iso).unwrap_or_else(|| "never".to_string());
            println!("  {:<24} {:>8}   {}", subject, chunk_count, when);
        }
    }

    let type_rows = sqlx::query(
        r#"
        SELECT content_type, COUNT(*) AS chunk_count
        FROM chunks
        GROUP BY content_type
        ORDER BY chunk_count DESC
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !type_rows.is_empty() {
        println!();
        println!("  By content type:");
        println!("  {:<24} {:>8}", "CONTENT TYPE", "CHUNKS");
        println!("  {}", "-".repeat(34));

        for row in &type_rows {
            let content_type: String = row.get("content_type");
            let chunk_count: i64 = row.get("chunk_count");
            println!("  {:<24} {:>8}", content_type, chunk_count);
        }
    }

    println!();

    pool.close().await;
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

fn format_ts_iso(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}
