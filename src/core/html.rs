// src/core/html.rs
//! Tolerant HTML tree plus a small selector engine.
//!
//! Good enough for dictionary pages: tags, attributes (only `class` and `id`
//! are kept), comments, `<script>`/`<style>` raw text, void elements and a few
//! implicitly closed tags. No validation; stray close tags are ignored and
//! anything left open is closed at EOF.
//!
//! Selectors support tag names, `.class`, `#id` and the descendant combinator
//! (whitespace), e.g. `.sb-0 .dtText` or `div.sense span.dt`.

use std::error::Error;

use super::sanitize::normalize_entities;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];
// Opening one of these while the same tag is on top closes the previous one.
const SELF_NESTING_CLOSERS: &[&str] = &["p", "li", "dt", "dd", "option", "tr", "td", "th"];

#[derive(Debug)]
enum Node {
    Element(usize),
    Text(String),
}

#[derive(Debug)]
struct Element {
    name: String,
    id: Option<String>,
    classes: Vec<String>,
    parent: Option<usize>,
    children: Vec<Node>,
}

impl Element {
    fn new(name: String, parent: Option<usize>) -> Self {
        Self { name, id: None, classes: Vec::new(), parent, children: Vec::new() }
    }
}

/// Parsed document. Element 0 is a synthetic root; the rest are stored in
/// document (pre-)order.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    idx: usize,
}

impl Document {
    pub fn parse(src: &str) -> Self {
        let mut doc = Document { elements: vec![Element::new(s!("#root"), None)] };
        let mut stack: Vec<usize> = vec![0];

        let b = src.as_bytes();
        let n = b.len();
        let mut i = 0usize;
        let mut text_start = 0usize;

        while i < n {
            if b[i] != b'<' {
                i += 1;
                continue;
            }
            let rest = &src[i..];

            // Comment
            if rest.starts_with("<!--") {
                doc.push_text(top(&stack), &src[text_start..i]);
                i = rest[4..].find("-->").map(|e| i + 4 + e + 3).unwrap_or(n);
                text_start = i;
                continue;
            }

            // Doctype / processing instruction
            if rest.starts_with("<!") || rest.starts_with("<?") {
                doc.push_text(top(&stack), &src[text_start..i]);
                i = tag_end(b, i + 1).map(|e| e + 1).unwrap_or(n);
                text_start = i;
                continue;
            }

            // Close tag
            if rest.starts_with("</") {
                doc.push_text(top(&stack), &src[text_start..i]);
                let gt = tag_end(b, i + 2).unwrap_or(n);
                let name = tag_name(&src[i + 2..gt]);
                close_tag(&doc, &mut stack, &name);
                i = (gt + 1).min(n);
                text_start = i;
                continue;
            }

            // Open tag; a '<' not followed by a letter is just text.
            if !b.get(i + 1).is_some_and(|c| c.is_ascii_alphabetic()) {
                i += 1;
                continue;
            }
            doc.push_text(top(&stack), &src[text_start..i]);

            let gt = tag_end(b, i + 1).unwrap_or(n);
            let inner = &src[i + 1..gt];
            let name = tag_name(inner);
            let self_closing = inner.trim_end().ends_with('/');

            if SELF_NESTING_CLOSERS.contains(&name.as_str())
                && doc.elements[top(&stack)].name == name
            {
                stack.pop();
            }

            let parent = top(&stack);
            let idx = doc.elements.len();
            let mut el = Element::new(name.clone(), Some(parent));
            read_attrs(&inner[name.len()..], &mut el);
            doc.elements.push(el);
            doc.elements[parent].children.push(Node::Element(idx));

            i = (gt + 1).min(n);
            text_start = i;

            if !self_closing && RAW_TEXT_TAGS.contains(&name.as_str()) {
                // Skip raw content up to the matching close tag.
                let close = join!("</", &name);
                i = find_ci(src, &close, i).unwrap_or(n);
                text_start = i;
                continue;
            }

            if !self_closing && !VOID_TAGS.contains(&name.as_str()) {
                stack.push(idx);
            }
        }
        doc.push_text(top(&stack), &src[text_start..n]);
        doc
    }

    /// First element (document order) matching `sel`.
    pub fn select_first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        (1..self.elements.len())
            .find(|&idx| sel.matches(self, idx))
            .map(|idx| ElementRef { doc: self, idx })
    }

    /// Every matching element, in document order.
    pub fn select_all<'a>(&'a self, sel: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        (1..self.elements.len())
            .filter(move |&idx| sel.matches(self, idx))
            .map(move |idx| ElementRef { doc: self, idx })
    }

    fn push_text(&mut self, parent: usize, raw: &str) {
        if raw.is_empty() {
            return;
        }
        self.elements[parent].children.push(Node::Text(normalize_entities(raw)));
    }
}

impl<'a> ElementRef<'a> {
    /// All descendant text, untouched.
    pub fn text(&self) -> String {
        self.text_pieces().concat()
    }

    /// Descendant text with leading/trailing whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text().trim().to_string()
    }

    fn text_pieces(&self) -> Vec<&'a str> {
        let mut out = Vec::new();
        collect_text(self.doc, self.idx, &mut out);
        out
    }
}

fn collect_text<'a>(doc: &'a Document, idx: usize, out: &mut Vec<&'a str>) {
    for child in &doc.elements[idx].children {
        match child {
            Node::Text(t) => out.push(t.as_str()),
            Node::Element(c) => collect_text(doc, *c, out),
        }
    }
}

fn top(stack: &[usize]) -> usize {
    stack.last().copied().unwrap_or(0)
}

fn close_tag(doc: &Document, stack: &mut Vec<usize>, name: &str) {
    // Root (position 0) is never popped.
    if let Some(pos) = stack.iter().rposition(|&idx| idx != 0 && doc.elements[idx].name == name) {
        stack.truncate(pos);
    }
}

/// Index of the `>` ending the tag whose body starts at `from`, quote-aware.
fn tag_end(b: &[u8], from: usize) -> Option<usize> {
    let mut in_s = false; // '
    let mut in_d = false; // "
    let mut i = from;
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

fn tag_name(inner: &str) -> String {
    inner
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ':')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let needle = needle.as_bytes();
    let b = hay.as_bytes();
    if needle.is_empty() || from >= b.len() {
        return None;
    }
    b[from..]
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
        .map(|p| from + p)
}

/// Pull `class` and `id` out of an attribute list.
fn read_attrs(attrs: &str, el: &mut Element) {
    let mut rest = attrs;
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            break;
        }
        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '/')
            .unwrap_or(rest.len());
        let key = rest[..name_len].to_ascii_lowercase();
        rest = rest[name_len..].trim_start();

        let mut value = "";
        if let Some(after_eq) = rest.strip_prefix('=') {
            let v = after_eq.trim_start();
            match v.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let end = v[1..].find(q).map(|e| e + 1).unwrap_or(v.len());
                    value = &v[1..end];
                    rest = v.get(end + 1..).unwrap_or("");
                }
                _ => {
                    let end = v.find(char::is_whitespace).unwrap_or(v.len());
                    value = &v[..end];
                    rest = &v[end..];
                }
            }
        }

        match key.as_str() {
            "class" => el.classes = value.split_whitespace().map(String::from).collect(),
            "id" => el.id = Some(normalize_entities(value)),
            _ => {}
        }
    }
}

/* ---------------- Selectors ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(tok: &str) -> Result<Self, Box<dyn Error>> {
        let mut c = Compound { tag: None, id: None, classes: Vec::new() };
        let is_ident = |ch: char| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_';

        let tag_len = tok.find(|ch: char| !is_ident(ch)).unwrap_or(tok.len());
        if tag_len > 0 {
            c.tag = Some(tok[..tag_len].to_ascii_lowercase());
        }
        let mut rest = &tok[tag_len..];
        while let Some(sigil) = rest.chars().next() {
            let body = &rest[sigil.len_utf8()..];
            let len = body.find(|ch: char| !is_ident(ch)).unwrap_or(body.len());
            if len == 0 {
                return Err(format!("Empty name after '{sigil}' in selector part: {tok}").into());
            }
            let ident = s!(&body[..len]);
            match sigil {
                '.' => c.classes.push(ident),
                '#' => c.id = Some(ident),
                other => return Err(format!("Unsupported selector syntax '{other}' in: {tok}").into()),
            }
            rest = &body[len..];
        }
        Ok(c)
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if &el.name != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id.as_ref() != Some(id) {
                return false;
            }
        }
        self.classes.iter().all(|c| el.classes.iter().any(|have| have == c))
    }
}

/// Compiled selector: compounds joined by descendant combinators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    source: String,
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(src: &str) -> Result<Self, Box<dyn Error>> {
        let parts = src
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Result<Vec<_>, _>>()?;
        if parts.is_empty() {
            return Err("Empty selector".into());
        }
        Ok(Self { source: s!(src.trim()), parts })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    fn matches(&self, doc: &Document, idx: usize) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(&doc.elements[idx]) {
            return false;
        }
        // Right-to-left, nearest matching ancestor for each part.
        let mut cur = doc.elements[idx].parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(p) = cur.filter(|&p| p != 0) else {
                    return false;
                };
                cur = doc.elements[p].parent;
                if part.matches(&doc.elements[p]) {
                    break;
                }
            }
        }
        true
    }
}
