//! High-score table and its plain-text store
//!
//! The table lives in memory, sorted descending by score and truncated to
//! the retained maximum. The store reads and writes one "name score" record
//! per line; the score is the last whitespace-separated token, so names
//! containing spaces round-trip. Loading never fails hard: a missing file
//! or a malformed line yields an empty table or a skipped record.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::MAX_HIGH_SCORES;

/// One persisted result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

/// In-memory high-score table, kept sorted descending by score
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result, re-sort descending, and truncate to the maximum.
    ///
    /// Low scores are accepted; they simply fall off the end once the
    /// table is full. The sort is stable, so earlier entries win ties.
    pub fn insert(&mut self, name: &str, score: u32) {
        self.entries.push(HighScoreEntry {
            name: name.to_string(),
            score,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest retained score, if any
    pub fn best(&self) -> Option<u32> {
        self.entries.first().map(|entry| entry.score)
    }
}

/// File-backed score persistence
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location next to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from("highscores.txt")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table; absent files and unreadable lines become an empty
    /// table or skipped records rather than errors.
    pub fn load(&self) -> HighScoreTable {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return HighScoreTable::new();
        };

        let mut table = HighScoreTable::new();
        for line in contents.lines() {
            if let Some(entry) = parse_record(line) {
                table.insert(&entry.name, entry.score);
            }
        }
        table
    }

    /// Write the table, one record per line
    pub fn save(&self, table: &HighScoreTable) -> Result<()> {
        let mut contents = String::new();
        for entry in table.entries() {
            contents.push_str(&entry.name);
            contents.push(' ');
            contents.push_str(&entry.score.to_string());
            contents.push('\n');
        }
        fs::write(&self.path, contents)
            .with_context(|| format!("writing high scores to {}", self.path.display()))
    }
}

/// Parse one "name score" line; the score is the last token.
fn parse_record(line: &str) -> Option<HighScoreEntry> {
    let (name, score) = line.trim_end().rsplit_once(' ')?;
    if name.is_empty() {
        return None;
    }
    let score = score.parse().ok()?;
    Some(HighScoreEntry {
        name: name.to_string(),
        score,
    })
}
