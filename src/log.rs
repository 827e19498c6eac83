// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn fmt_line(elapsed: &str, level: &str, word: Option<&str>, msg: &str) -> String {
    match word {
        Some(w) => format!("[{elapsed}][{level}] '{w}': {msg}\n"),
        None => format!("[{elapsed}][{level}] {msg}\n"),
    }
}

/// Append one line to `.store/debug.log`. Best-effort: never fails the caller.
pub fn write_log(level: &str, msg: &str) {
    append(level, None, msg);
}

/// Same as [`write_log`], with the line tagged by the word being looked up.
pub fn write_word_log(level: &str, word: &str, msg: &str) {
    append(level, Some(word), msg);
}

fn append(level: &str, word: Option<&str>, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = fmt_line(&elapsed, level, word, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        let _ = fs::create_dir_all(STORE_DIR);
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

/// Word-tagged logging: `logw!(LEVEL, word, "fmt", args..)`
#[macro_export]
macro_rules! logw {
    ($level:expr, $word:expr, $($arg:tt)*) => {
        $crate::log::write_word_log($level, $word, &format!($($arg)*))
    };
}
