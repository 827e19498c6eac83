// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.merriam-webster.com/dictionary/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const TIMEOUT_SECS: u64 = 10;

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Definition shaping
pub const SENTINEL: &str = "Definition not found";
pub const MAX_DEFINITION_CHARS: usize = 300;
pub const TRUNCATION_MARKER: &str = "...";
pub const SENSE_PREFIX: &str = ": ";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Reconcile inputs/outputs
pub const DEFAULT_WORDS_FILE: &str = "public/scraped_entries.json";
pub const DEFAULT_DICTIONARY_FILE: &str = "public/boggleDictionary.json";
pub const RESOLVED_FILE: &str = "words_with_definitions.json";
pub const UNRESOLVED_FILE: &str = "words_without_definitions.json";

// Scrape output
pub const DEFAULT_SCRAPED_FILE: &str = "scraped_definitions.json";

// Dictionary search
pub const MIN_WORD_LEN: usize = 3;
pub const MAX_SUGGESTIONS: usize = 5;
