//! Ingestion pipeline orchestration.
//!
//! Drives a full run: source scan → segmentation → embedding → storage.
//! Each chunk is processed inside its own error boundary; a failed
//! embedding call or insert is logged with enough context to diagnose it
//! (subject and heading) and the loop moves on. Only preconditions —
//! config, source directory, database, client construction — abort the run.

use anyhow::Result;

use crate::config::Config;
use crate::connector_fs;
use crate::db;
use crate::embedding::EmbeddingClient;
use crate::segment::segment_document;
use crate::store;

pub async fn run_ingest(config: &Config, dry_run: bool, limit: Option<usize>) -> Result<()> {
    let mut files = connector_fs::scan_source_dir(config)?;

    if let Some(lim) = limit {
        files.truncate(lim);
    }

    if dry_run {
        println!("ingest (dry-run)");
        println!("  files found: {}", files.len());
        let mut estimated = 0usize;
        for file in &files {
            let chunks = segment_document(&file.body, &file.subject, config.chunking.min_chars);
            println!(
                "  {} ({}): {} chunks",
                file.file_name,
                file.subject,
                chunks.len()
            );
            estimated += chunks.len();
        }
        println!("  estimated chunks: {}", estimated);
        return Ok(());
    }

    let pool = db::connect(config).await?;
    let client = EmbeddingClient::new(&config.embedding)?;

    let mut saved = 0u64;
    let mut failed = 0u64;

    for file in &files {
        println!("Processing file: {}", file.file_name);
        let chunks = segment_document(&file.body, &file.subject, config.chunking.min_chars);
        println!("  found {} chunks in {}", chunks.len(), file.subject);

        for chunk in &chunks {
            let heading = chunk.heading.as_deref().unwrap_or("-");

            let embedding = match client.embed(&chunk.content).await {
                Ok(embedding) => embedding,
                Err(e) => {
                    eprintln!(
                        "Error embedding chunk (subject: {}, heading: {}): {:#}",
                        chunk.subject, heading, e
                    );
                    failed += 1;
                    continue;
                }
            };

            if !embedding.dims_match() {
                eprintln!(
                    "Warning: embedding dimension mismatch (subject: {}, heading: {}). Expected {}, got {}.",
                    chunk.subject,
                    heading,
                    embedding.expected_dims,
                    embedding.vector.len()
                );
            }

            match store::insert_chunk(&pool, chunk, &embedding.vector).await {
                Ok(()) => {
                    saved += 1;
                    println!("  saved: {} chunks total", saved);
                }
                Err(e) => {
                    eprintln!(
                        "Error inserting chunk (subject: {}, heading: {}): {:#}",
                        chunk.subject, heading, e
                    );
                    failed += 1;
                }
            }
        }
    }

    println!("ingest");
    println!("  files processed: {}", files.len());
    println!("  chunks saved: {}", saved);
    if failed > 0 {
        println!("  chunks failed: {}", failed);
    }
    println!("ok");

    pool.close().await;
    Ok(())
}
