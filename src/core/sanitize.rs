// src/core/sanitize.rs

use crate::config::consts::{SENSE_PREFIX, TRUNCATION_MARKER};

/// Decode the character references that show up in dictionary markup.
/// Unknown or malformed references are left as written.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Longest reference we care about is well under 12 bytes.
        let semi = tail.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i);
        match semi.and_then(|end| decode_entity(&tail[1..end]).map(|ch| (end, ch))) {
            Some((end, ch)) => {
                out.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        "hellip" => Some('\u{2026}'),
        _ => None,
    }
}

/// Collapse every whitespace run (newlines and tabs included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Drop the ": " sense marker the site puts in front of a definition.
/// A lone trailing ":" (marker with its space already trimmed) goes too.
pub fn strip_sense_prefix(s: &str) -> &str {
    let marker = SENSE_PREFIX.trim_end();
    let mut t = s;
    while let Some(rest) = t.strip_prefix(marker) {
        if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
            break;
        }
        t = rest.trim_start();
    }
    t
}

/// Keep at most `max` chars; over-long text gets the continuation marker.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => join!(&s[..cut], TRUNCATION_MARKER),
        None => s.to_string(),
    }
}

/// Raw fragment text -> definition text. `None` when nothing is left.
pub fn normalize_definition(raw: &str, max_chars: usize) -> Option<String> {
    let flat = raw.replace(['\n', '\t'], " ");
    let collapsed = normalize_ws(&flat);
    let text = strip_sense_prefix(&collapsed).trim();
    if text.is_empty() {
        return None;
    }
    Some(truncate_chars(text, max_chars))
}
