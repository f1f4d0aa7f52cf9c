// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Whether a fresh run replaces the output file or extends it.
/// The source truncated unconditionally; Overwrite keeps that behavior
/// and Append makes the alternative an explicit choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Overwrite,
    Append,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub first_season: u16,
    pub last_season: u16,
    pub last_regular_week: u8,   // see REGULAR_SEASON_WEEKS
    pub playoffs: bool,          // include the four playoff rounds
    pub out: PathBuf,
    pub mode: OutputMode,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            first_season: FIRST_SEASON,
            last_season: LAST_SEASON,
            last_regular_week: REGULAR_SEASON_WEEKS,
            playoffs: true,
            out: PathBuf::from(DEFAULT_OUT_FILE),
            mode: OutputMode::Overwrite,
        }
    }
}
