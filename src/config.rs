//! Runtime configuration: a TOML file merged with command-line overrides.
//!
//! ```toml
//! grid_size = 4
//! winning_value = 2048
//! theme = "dark"
//! seed = 42
//! high_score_path = "/tmp/2048-scores.json"
//!
//! [swipe]
//! min_cols = 6
//! min_rows = 3
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::core::{Rules, Tile};
use crate::term::Theme;
use crate::types::{MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board size (tiles per side)
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Tile value that wins the game
    #[arg(long, value_name = "VALUE")]
    pub win: Option<u32>,

    /// Seed for tile spawns (replays the same game)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color theme: light or dark
    #[arg(long)]
    pub theme: Option<String>,

    /// Where best scores are stored
    #[arg(long, value_name = "FILE")]
    pub high_score_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tui_2048=trace` (falls back to RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Write logs to this file; logging is off without it
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "defaults::grid_size")]
    pub grid_size: usize,
    #[serde(default = "defaults::winning_value")]
    pub winning_value: Tile,
    #[serde(default = "defaults::theme")]
    pub theme: String,
    /// Fixed spawn seed; a fresh one is drawn per run when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub high_score_path: Option<PathBuf>,
    #[serde(default)]
    pub swipe: Swipe,
}

/// Minimum mouse drag, in terminal cells, that counts as a swipe.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Swipe {
    #[serde(default = "defaults::swipe_min_cols")]
    pub min_cols: u16,
    #[serde(default = "defaults::swipe_min_rows")]
    pub min_rows: u16,
}

impl Default for Swipe {
    fn default() -> Self {
        Self {
            min_cols: defaults::swipe_min_cols(),
            min_rows: defaults::swipe_min_rows(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: defaults::grid_size(),
            winning_value: defaults::winning_value(),
            theme: defaults::theme(),
            seed: None,
            high_score_path: None,
            swipe: Swipe::default(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build the effective configuration: file (if any), then flags, then
    /// validation.
    pub fn load(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_toml(path)?,
            None => Self::default(),
        };
        cfg.apply_args(args);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Command-line values win over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(size) = args.size {
            self.grid_size = size;
        }
        if let Some(win) = args.win {
            self.winning_value = win;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(theme) = &args.theme {
            self.theme = theme.clone();
        }
        if let Some(path) = &args.high_score_file {
            self.high_score_path = Some(path.clone());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            bail!(
                "grid_size must be between {} and {}, got {}",
                MIN_GRID_SIZE,
                MAX_GRID_SIZE,
                self.grid_size
            );
        }
        self.rules()?;
        self.theme()?;
        if self.swipe.min_cols == 0 || self.swipe.min_rows == 0 {
            bail!("swipe thresholds must be at least one cell");
        }
        Ok(())
    }

    pub fn rules(&self) -> Result<Rules> {
        Rules::new(self.grid_size, self.winning_value).context("invalid game rules")
    }

    pub fn theme(&self) -> Result<Theme> {
        match Theme::from_str(&self.theme) {
            Some(theme) => Ok(theme),
            None => bail!("unknown theme {:?} (expected \"light\" or \"dark\")", self.theme),
        }
    }
}

mod defaults {
    use crate::types::{DEFAULT_GRID_SIZE, DEFAULT_WINNING_VALUE};

    pub fn grid_size() -> usize { DEFAULT_GRID_SIZE }
    pub fn winning_value() -> u32 { DEFAULT_WINNING_VALUE }
    pub fn theme() -> String { "dark".to_string() }
    pub fn swipe_min_cols() -> u16 { crate::input::swipe::DEFAULT_MIN_SWIPE_COLS }
    pub fn swipe_min_rows() -> u16 { crate::input::swipe::DEFAULT_MIN_SWIPE_ROWS }
}
