// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub reconcile: ReconcileOptions,
    pub scrape: ScrapeOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            extract: ExtractOptions::default(),
            reconcile: ReconcileOptions::default(),
            scrape: ScrapeOptions::default(),
        }
    }
}

/// How a single definition is fetched and shaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub max_chars: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            max_chars: MAX_DEFINITION_CHARS,
        }
    }
}

impl ExtractOptions {
    /// Word is embedded verbatim; escaping is left to the caller.
    pub fn url_for(&self, word: &str) -> String {
        join!(&self.base_url, word)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconcileOptions {
    pub words_path: PathBuf,
    pub dictionary_path: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_FILE),
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_FILE),
            out_dir: PathBuf::new(),
        }
    }
}

impl ReconcileOptions {
    pub fn resolved_path(&self) -> PathBuf {
        self.out_dir.join(RESOLVED_FILE)
    }

    pub fn unresolved_path(&self) -> PathBuf {
        self.out_dir.join(UNRESOLVED_FILE)
    }
}

/// Where the scrape word list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordSource {
    /// Plain text, one word per line.
    List(PathBuf),
    /// JSON array of words (e.g. `words_without_definitions.json`).
    Missing(PathBuf),
    /// Words given directly.
    Inline(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub source: WordSource,
    pub out: Option<PathBuf>,
    pub pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            source: WordSource::Missing(PathBuf::from(UNRESOLVED_FILE)),
            out: Some(PathBuf::from(DEFAULT_SCRAPED_FILE)),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}
