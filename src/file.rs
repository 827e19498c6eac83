// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::reconcile::Reconciliation;

/// One word per line; lines are trimmed and blank ones skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Reading word list {}: {e}", path.display()))?;
    Ok(parse_word_list(&text))
}

pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// JSON array of words, e.g. a previous `words_without_definitions.json`.
pub fn read_word_array(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Reading word array {}: {e}", path.display()))?;
    let words: Vec<String> = serde_json::from_str(&text)
        .map_err(|e| format!("Parsing word array {}: {e}", path.display()))?;
    Ok(words)
}

/// Pretty JSON (two-space indent), parent directory created if needed.
pub fn write_json_pretty(path: &Path, value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    ensure_parent(path)?;
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text)?;
    Ok(())
}

/// Write both reconcile outputs. Returns `[resolved, unresolved]` paths.
///
/// Both documents are serialized and staged as `<name>.tmp` siblings before
/// either target is touched; the unresolved file is moved in first, so a
/// failure leaves neither output behind.
pub fn write_reconciliation(
    result: &Reconciliation,
    resolved_path: &Path,
    unresolved_path: &Path,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let resolved_text = serde_json::to_string_pretty(&Value::Object(result.resolved.clone()))?;
    let missing: Vec<Value> = result.unresolved.iter().cloned().map(Value::String).collect();
    let unresolved_text = serde_json::to_string_pretty(&Value::Array(missing))?;

    let staged_b = stage(unresolved_path, &unresolved_text)?;
    let staged_a = match stage(resolved_path, &resolved_text) {
        Ok(p) => p,
        Err(e) => {
            let _ = fs::remove_file(&staged_b);
            return Err(e);
        }
    };

    if let Err(e) = fs::rename(&staged_b, unresolved_path) {
        let _ = fs::remove_file(&staged_b);
        let _ = fs::remove_file(&staged_a);
        return Err(format!("Writing {}: {e}", unresolved_path.display()).into());
    }
    if let Err(e) = fs::rename(&staged_a, resolved_path) {
        let _ = fs::remove_file(&staged_a);
        let _ = fs::remove_file(unresolved_path);
        return Err(format!("Writing {}: {e}", resolved_path.display()).into());
    }

    Ok(vec![resolved_path.to_path_buf(), unresolved_path.to_path_buf()])
}

/// Write `text` next to `path` as `<name>.tmp`; returns the staged path.
fn stage(path: &Path, text: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    ensure_parent(path)?;
    let name = path
        .file_name()
        .ok_or_else(|| format!("Not a file path: {}", path.display()))?;
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, text).map_err(|e| format!("Writing {}: {e}", tmp.display()))?;
    Ok(tmp)
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Ordered `word -> definition` pairs as a JSON object.
pub fn definitions_to_json(pairs: &[(String, String)]) -> Value {
    let mut map = Map::with_capacity(pairs.len());
    for (word, def) in pairs {
        map.insert(word.clone(), Value::String(def.clone()));
    }
    Value::Object(map)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
