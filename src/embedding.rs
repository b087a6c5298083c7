//! Embedding service client.
//!
//! Wraps the external embedding endpoint behind [`EmbeddingClient`]. The
//! service accepts a JSON object with a single `text` field and answers
//! with a JSON object carrying a numeric `embedding` array:
//!
//! ```text
//! POST <url>
//! {"text": "<cleaned chunk text>"}
//!     → {"embedding": [0.01, -0.42, ...]}
//! ```
//!
//! Input is cleaned before transmission: whitespace runs collapse to single
//! spaces and the result is truncated to `max_input_chars` so the request
//! respects the service's input limit.
//!
//! # Error Policy
//!
//! - Non-2xx response → hard error carrying the status and the response
//!   body verbatim.
//! - Missing or non-numeric `embedding` field → hard error.
//! - Vector length differing from the configured dimension → NOT an error.
//!   [`Embedding::dims_match`] reports the mismatch and the caller decides
//!   whether to log it; rejecting outright would drop valid embeddings from
//!   a differently configured model.
//!
//! No retry is performed at this layer. Transient failures surface to the
//! orchestrator, whose per-chunk error boundary is the retry/skip policy.
//!
//! Also provides the vector codec for SQLite storage:
//! - [`vec_to_blob`] — encode a `Vec<f32>` as little-endian bytes
//! - [`blob_to_vec`] — decode a BLOB back into a `Vec<f32>`

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::json;

use crate::config::EmbeddingConfig;

/// Client for the embedding endpoint. Cheap to clone per run; holds the
/// configured URL, expected dimensionality, and input cap.
pub struct EmbeddingClient {
    http: reqwest::Client,
    url: String,
    expected_dims: usize,
    max_input_chars: usize,
}

/// A vector returned by the service, together with the dimension the
/// caller configured.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub expected_dims: usize,
}

impl Embedding {
    /// Whether the received vector has the configured length. A `false`
    /// here is a warning condition, not a failure.
    pub fn dims_match(&self) -> bool {
        self.vector.len() == self.expected_dims
    }
}

impl EmbeddingClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
            expected_dims: config.dims,
            max_input_chars: config.max_input_chars,
        })
    }

    /// Embed one chunk of text.
    ///
    /// # Errors
    ///
    /// Fails on network errors, non-2xx responses (status and body are
    /// carried in the error context), and responses without a numeric
    /// `embedding` array.
    pub async fn embed(&self, text: &str) -> Result<Embedding> {
        let cleaned = clean_text(text, self.max_input_chars);
        let body = json!({ "text": cleaned });

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Embedding request to {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            bail!("Embedding service error {}: {}", status, body_text);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .with_context(|| "Embedding service returned a non-JSON body")?;

        let vector = parse_embedding_response(&payload)?;

        Ok(Embedding {
            vector,
            expected_dims: self.expected_dims,
        })
    }
}

/// Collapse whitespace runs to single spaces, trim, and truncate to
/// `max_chars` characters.
pub fn clean_text(text: &str, max_chars: usize) -> String {
    let collapsed: Vec<&str> = text.split_whitespace().collect();
    collapsed.join(" ").chars().take(max_chars).collect()
}

/// Extract the `embedding` array from the service response.
fn parse_embedding_response(payload: &serde_json::Value) -> Result<Vec<f32>> {
    let values = payload
        .get("embedding")
        .and_then(|e| e.as_array())
        .ok_or_else(|| anyhow::anyhow!("Invalid embedding response: missing embedding array"))?;

    Ok(values
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0) as f32)
        .collect())
}

/// Encode a float vector as a BLOB (little-endian f32 bytes).
///
/// Each `f32` is stored as 4 bytes in little-endian order, producing a
/// BLOB of `vec.len() × 4` bytes.
pub fn vec_to_blob(vec: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(vec.len() * 4);
    for &v in vec {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    bytes
}

/// Decode a BLOB back into a float vector.
///
/// Reverses [`vec_to_blob`]: reads 4-byte little-endian `f32` values from
/// the byte slice.
pub fn blob_to_vec(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
