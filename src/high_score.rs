//! Best-score persistence.
//!
//! Scores live in one JSON object keyed by board size (`"4x4"`, `"5x5"`, ...)
//! so records from differently sized boards never compete.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

type ScoreTable = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.tui-2048/high_scores.json`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
        Some(PathBuf::from(home).join(".tui-2048").join("high_scores.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn board_key(size: usize) -> String {
        format!("{size}x{size}")
    }

    /// Best score for a board size; 0 when nothing has been saved yet.
    pub fn load(&self, size: usize) -> Result<u64> {
        let table = self.read_table()?;
        Ok(table.get(&Self::board_key(size)).copied().unwrap_or(0))
    }

    /// Record `score` for a board size if it beats the stored value.
    ///
    /// Returns whether the file was written. A file that does not parse is
    /// replaced rather than blocking every later save.
    pub fn save(&self, size: usize, score: u64) -> Result<bool> {
        let mut table = match self.read_contents()? {
            None => ScoreTable::new(),
            Some(contents) => self.parse_table(&contents).unwrap_or_else(|e| {
                log::warn!("replacing unreadable high score file: {:#}", e);
                ScoreTable::new()
            }),
        };
        let key = Self::board_key(size);
        if table.get(&key).is_some_and(|&best| best >= score) {
            return Ok(false);
        }
        table.insert(key, score);
        self.write_table(&table)?;
        log::debug!("saved best score {} to {}", score, self.path.display());
        Ok(true)
    }

    /// Write through a temp file in the same directory and rename it over
    /// the target, so an interrupted write never leaves a truncated file.
    fn write_table(&self, table: &ScoreTable) -> Result<()> {
        let dir = match self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => dir,
            None => Path::new("."),
        };
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

        let json = serde_json::to_string_pretty(table)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    fn read_table(&self) -> Result<ScoreTable> {
        match self.read_contents()? {
            Some(contents) => self.parse_table(&contents),
            None => Ok(ScoreTable::new()),
        }
    }

    /// File contents, or `None` when nothing has been saved yet.
    fn read_contents(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    fn parse_table(&self, contents: &str) -> Result<ScoreTable> {
        serde_json::from_str(contents)
            .with_context(|| format!("parsing high scores in {}", self.path.display()))
    }
}
