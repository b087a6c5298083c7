use std::path::Path;
use std::sync::LazyLock;

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::SourceFile;

/// Subject word in the fixed file naming convention, e.g.
/// `kursplan_matematik_2022.txt`.
static RE_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)kursplan_([a-zåäö]+)_").unwrap());

pub fn scan_source_dir(config: &Config) -> Result<Vec<SourceFile>> {
    let root = &config.source.dir;
    if !root.exists() {
        bail!("Source directory does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.source.include_globs)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(read_source_file(path)?);
    }

    // Sort for deterministic ordering
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

fn read_source_file(path: &Path) -> Result<SourceFile> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let body = std::fs::read_to_string(path).unwrap_or_default();

    Ok(SourceFile {
        path: path.to_path_buf(),
        subject: subject_from_filename(&file_name),
        file_name,
        body,
    })
}

/// Derive the subject label from a file name.
///
/// Files following the `kursplan_<subject>_...` convention yield the
/// subject word with its first letter uppercased ("Matematik"); anything
/// else falls back to the raw file name.
pub fn subject_from_filename(file_name: &str) -> String {
    match RE_SUBJECT.captures(file_name) {
        Some(caps) => capitalize_first(&caps[1]),
        None => file_name.to_string(),
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_from_conventional_name() {
        assert_eq!(
            subject_from_filename("kursplan_matematik_2022.txt"),
            "Matematik"
        );
        assert_eq!(subject_from_filename("kursplan_bild_lgr22.txt"), "Bild");
    }

    #[test]
    fn subject_handles_swedish_letters() {
        assert_eq!(
            subject_from_filename("kursplan_slöjd_2022.txt"),
            "Slöjd"
        );
    }

    #[test]
    fn unconventional_name_falls_back_to_filename() {
        assert_eq!(subject_from_filename("anteckningar.txt"), "anteckningar.txt");
    }

    #[test]
    fn scan_honors_include_globs_and_sorts() {
        use crate::config::{ChunkingConfig, Config, DbConfig, EmbeddingConfig, SourceConfig};

        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("kursplan_musik_2022.txt"), "musik").unwrap();
        std::fs::write(tmp.path().join("kursplan_bild_2022.txt"), "bild").unwrap();
        std::fs::write(tmp.path().join("readme.md"), "ignored").unwrap();

        let config = Config {
            db: DbConfig {
                path: tmp.path().join("db.sqlite"),
            },
            source: SourceConfig {
                dir: tmp.path().to_path_buf(),
                include_globs: vec!["*.txt".to_string()],
            },
            chunking: ChunkingConfig::default(),
            embedding: EmbeddingConfig::default(),
        };

        let files = scan_source_dir(&config).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].subject, "Bild");
        assert_eq!(files[1].subject, "Musik");
    }

    #[test]
    fn missing_source_dir_is_an_error() {
        use crate::config::{ChunkingConfig, Config, DbConfig, EmbeddingConfig, SourceConfig};

        let config = Config {
            db: DbConfig {
                path: "/tmp/never.db".into(),
            },
            source: SourceConfig {
                dir: "/no/such/dir".into(),
                include_globs: vec!["*.txt".to_string()],
            },
            chunking: ChunkingConfig::default(),
            embedding: EmbeddingConfig::default(),
        };

        assert!(scan_source_dir(&config).is_err());
    }
}
