//! Core data models used throughout Läroplan Ingest.
//!
//! These types represent the source files and labeled chunks that flow
//! through the ingestion pipeline.

use serde_json::json;

/// Grade token used when no grade-specific heading has been seen.
pub const ALL_GRADES: &str = "1-9";

/// One plain-text curriculum file, read once per run.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: std::path::PathBuf,
    pub file_name: String,
    /// Derived from the file name (see [`crate::connector_fs::subject_from_filename`]).
    pub subject: String,
    pub body: String,
}

/// Semantic category of a section, derived from its matched heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Syfte,
    CentraltInnehall,
    Betygskriterier,
    KriterierForBedomning,
    Ovrigt,
}

impl ContentType {
    /// Canonical label stored in the database and metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Syfte => "Syfte",
            ContentType::CentraltInnehall => "Centralt innehåll",
            ContentType::Betygskriterier => "Betygskriterier",
            ContentType::KriterierForBedomning => "Kriterier för bedömning",
            ContentType::Ovrigt => "Övrigt",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous, labeled span of curriculum text. Immutable after creation;
/// consumed once by the embedding step and once by the store write.
#[derive(Debug, Clone)]
pub struct CurriculumChunk {
    /// Trimmed body text, at least `chunking.min_chars` characters long.
    pub content: String,
    /// Inherited from the owning source file.
    pub subject: String,
    /// A single grade or a hyphenated range, or [`ALL_GRADES`].
    pub grade_level: String,
    pub content_type: ContentType,
    /// Section label, possibly a primary heading joined with a sub-heading.
    pub heading: Option<String>,
}

impl CurriculumChunk {
    /// Metadata object persisted alongside the chunk content and vector.
    pub fn metadata_json(&self) -> String {
        json!({
            "subject": self.subject,
            "grade_level": self.grade_level,
            "content_type": self.content_type.as_str(),
            "heading": self.heading,
        })
        .to_string()
    }
}
