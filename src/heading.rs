//! Section-boundary classification for kursplan text.
//!
//! A kursplan document is structured by a small, stable set of headings:
//! the purpose statement ("Syfte"), the core-content marker ("Centralt
//! innehåll"), grade-band markers ("I årskurs 4-6"), and grading-criteria
//! markers ("Betygskriterier ...", "Kriterier för bedömning ..."). The
//! classifier turns a trimmed line into an optional tagged match so the
//! segmenter's line walk stays free of pattern details, and the
//! first-match-wins ordering is testable in isolation.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContentType;

/// Which heading pattern matched. Ordering of the table below is part of
/// the contract: the first matching pattern wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    Syfte,
    CentraltInnehall,
    IArskurs,
    Betygskriterier,
    KriterierForBedomning,
}

impl HeadingKind {
    /// Semantic category of the section this heading opens.
    pub fn content_type(self) -> ContentType {
        match self {
            HeadingKind::Syfte => ContentType::Syfte,
            HeadingKind::CentraltInnehall | HeadingKind::IArskurs => ContentType::CentraltInnehall,
            HeadingKind::Betygskriterier => ContentType::Betygskriterier,
            HeadingKind::KriterierForBedomning => ContentType::KriterierForBedomning,
        }
    }
}

/// A recognized section boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    pub kind: HeadingKind,
    /// Grade token captured from the line ("6", "4-6"). `None` means the
    /// previously active token stays in effect.
    pub grade: Option<String>,
}

static RE_SYFTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^\s*Syfte\s*$").unwrap());
static RE_CENTRALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Centralt innehåll\s*$").unwrap());
static RE_I_ARSKURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*I årskurs\s*(\d+(?:-\d+)?)\s*$").unwrap());
static RE_BETYGSKRITERIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Betygskriterier").unwrap());
static RE_KRITERIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*Kriterier för bedömning").unwrap());

/// "årskurs 6" inside a longer criteria heading.
static RE_GRADE_IN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)årskurs\s*(\d+)").unwrap());

/// Page-number stamps and legal document-id stamps; skipped entirely.
static RE_PAGE_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Sida \d+ av \d+").unwrap());
static RE_SKOLFS_STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SKOLFS \d+:\d+").unwrap());

/// A short capitalized phrase, the shape of a topic sub-title.
static RE_CAPITALIZED_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-ZÅÄÖ][a-zåäö]+\s?[A-ZÅÄÖ]?[a-zåäö]*").unwrap());

/// Classify a trimmed line against the ordered heading table.
///
/// Returns `None` for ordinary content lines. For "I årskurs N[-M]" the
/// grade token is the verbatim capture; for criteria headings that mention
/// a grade ("Betygskriterier för slutet av årskurs 6") the single grade is
/// captured, otherwise the caller keeps its active token.
pub fn classify_heading(line: &str) -> Option<HeadingMatch> {
    if RE_SYFTE.is_match(line) {
        return Some(HeadingMatch {
            kind: HeadingKind::Syfte,
            grade: None,
        });
    }
    if RE_CENTRALT.is_match(line) {
        return Some(HeadingMatch {
            kind: HeadingKind::CentraltInnehall,
            grade: None,
        });
    }
    if let Some(caps) = RE_I_ARSKURS.captures(line) {
        return Some(HeadingMatch {
            kind: HeadingKind::IArskurs,
            grade: Some(caps[1].to_string()),
        });
    }
    if RE_BETYGSKRITERIER.is_match(line) {
        return Some(HeadingMatch {
            kind: HeadingKind::Betygskriterier,
            grade: grade_in_line(line),
        });
    }
    if RE_KRITERIER.is_match(line) {
        return Some(HeadingMatch {
            kind: HeadingKind::KriterierForBedomning,
            grade: grade_in_line(line),
        });
    }
    None
}

fn grade_in_line(line: &str) -> Option<String> {
    RE_GRADE_IN_LINE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Page-footer/header noise that must neither become content nor close a
/// section.
pub fn is_noise_line(line: &str) -> bool {
    RE_PAGE_STAMP.is_match(line) || RE_SKOLFS_STAMP.is_match(line)
}

/// Sub-heading heuristic: a short capitalized phrase of at most four words
/// ("Bildframställning", "Tekniker, verktyg och material"). Such lines are
/// folded into the current heading label instead of opening a new section.
pub fn is_subheading(line: &str) -> bool {
    line.chars().count() < 40
        && line.split_whitespace().count() <= 4
        && !line.is_empty()
        && RE_CAPITALIZED_PHRASE.is_match(line)
}
