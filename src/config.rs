use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use strum_macros::{Display, EnumString};

use crate::{Error, InternalResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexerConfig {
    #[serde(default)]
    pub whitespace_runs: WhitespaceRuns,
}

/// How consecutive whitespace characters are scanned.
///
/// CR LF pairs are matched before whitespace, so under [`WhitespaceRuns::Split`]
/// `" \r\n"` yields `SP` followed by `CRLF`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WhitespaceRuns {
    /// Every whitespace character is its own lexeme (SP, HTAB, CR, LF).
    #[default]
    Split,
    /// A maximal run is one lexeme. Runs of spaces classify as GENERIC and
    /// runs containing a tab, CR or LF classify as INVALID.
    Merge,
}

impl LexerConfig {
    pub fn with_whitespace_runs(mut self, whitespace_runs: WhitespaceRuns) -> Self {
        self.whitespace_runs = whitespace_runs;
        self
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
