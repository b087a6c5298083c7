//! Heading-driven chunk segmentation.
//!
//! Walks a normalized document line by line, closing out a section whenever
//! the [`heading`](crate::heading) classifier reports a boundary. Section
//! state (heading label, grade token, category, line buffer) is scoped to a
//! single call; nothing is shared across documents.

use crate::heading::{self, HeadingKind};
use crate::models::{ContentType, CurriculumChunk, ALL_GRADES};
use crate::normalize::normalize_text;

/// Heading label used before the first recognized heading.
const INTRO_HEADING: &str = "Introduktion";

/// Transient accumulator for the section currently being read.
struct Section {
    heading: String,
    grade: String,
    kind: Option<HeadingKind>,
    lines: Vec<String>,
}

impl Section {
    fn new() -> Self {
        Self {
            heading: INTRO_HEADING.to_string(),
            grade: ALL_GRADES.to_string(),
            kind: None,
            lines: Vec::new(),
        }
    }

    /// Emit the accumulated content as a chunk if it meets the minimum
    /// length, then reset the buffer. Sections below the threshold are
    /// dropped silently.
    fn close_out(&mut self, subject: &str, min_chars: usize, out: &mut Vec<CurriculumChunk>) {
        let content = self.lines.join("\n").trim().to_string();
        self.lines.clear();

        if content.chars().count() < min_chars {
            return;
        }

        let content_type = self
            .kind
            .map(HeadingKind::content_type)
            .unwrap_or(ContentType::Ovrigt);

        out.push(CurriculumChunk {
            content,
            subject: subject.to_string(),
            grade_level: self.grade.clone(),
            content_type,
            heading: Some(self.heading.clone()),
        });
    }
}

/// Segment one curriculum document into labeled chunks.
///
/// Chunks come out in document order and are never merged. A document with
/// no recognized headings yields at most one chunk (category Övrigt,
/// heading "Introduktion").
pub fn segment_document(raw_text: &str, subject: &str, min_chars: usize) -> Vec<CurriculumChunk> {
    let text = normalize_text(raw_text);
    let mut section = Section::new();
    let mut chunks = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if heading::is_noise_line(line) {
            continue;
        }

        if let Some(m) = heading::classify_heading(line) {
            section.close_out(subject, min_chars, &mut chunks);

            section.kind = Some(m.kind);
            section.heading = match m.kind {
                // Normalized label so ranges read uniformly.
                HeadingKind::IArskurs => {
                    format!("I årskurs {}", m.grade.as_deref().unwrap_or_default())
                }
                _ => line.to_string(),
            };
            if let Some(grade) = m.grade {
                section.grade = grade;
            }
            continue;
        }

        if heading::is_subheading(line) {
            section.heading = format!("{} — {}", section.heading, line);
            continue;
        }

        section.lines.push(line.to_string());
    }

    section.close_out(subject, min_chars, &mut chunks);
    chunks
}
