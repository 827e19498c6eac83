// tests/scrape_run.rs
//
// Paced batch scrape with a stub fetcher and a recording progress sink.
//
use std::error::Error;
use std::fs;
use std::time::{Duration, Instant};

use dict_scrape::config::options::{ExtractOptions, WordSource};
use dict_scrape::core::net::Fetch;
use dict_scrape::progress::Progress;
use dict_scrape::runner::{resolve_words, scrape};
use dict_scrape::{DefinitionExtractor, SENTINEL};

struct OnlyCat;
impl Fetch for OnlyCat {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        if url.ends_with("/cat") {
            Ok(s("<span class=\"dtText\">: a feline</span>"))
        } else {
            Err(format!("HTTP error: 404 Not Found {url}").into())
        }
    }
}

fn s(v: &str) -> String {
    v.to_string()
}

#[derive(Default)]
struct Recorder {
    total: usize,
    items: Vec<(String, bool)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, word: &str, found: bool) {
        self.items.push((s(word), found));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn scrape_keeps_order_and_counts() {
    let ex = DefinitionExtractor::new(OnlyCat, ExtractOptions::default()).unwrap();
    let mut rec = Recorder::default();
    let report = scrape(&["fam", "cat", "stan"], &ex, Duration::ZERO, Some(&mut rec));

    assert_eq!(
        report.definitions,
        vec![(s("fam"), s(SENTINEL)), (s("cat"), s("a feline")), (s("stan"), s(SENTINEL))]
    );
    assert_eq!((report.found, report.not_found), (1, 2));
    assert_eq!(rec.total, 3);
    assert_eq!(rec.items, vec![(s("fam"), false), (s("cat"), true), (s("stan"), false)]);
    assert!(rec.finished);
}

#[test]
fn scrape_pauses_between_requests_only() {
    let ex = DefinitionExtractor::new(OnlyCat, ExtractOptions::default()).unwrap();
    let pause = Duration::from_millis(30);

    let start = Instant::now();
    scrape(&["cat", "cat", "cat"], &ex, pause, None);
    assert!(start.elapsed() >= pause * 2);

    let start = Instant::now();
    scrape(&["cat"], &ex, Duration::from_secs(5), None);
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[test]
fn word_sources() {
    let mut dir = std::env::temp_dir();
    dir.push("dict_scrape_sources");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let list = dir.join("list.txt");
    fs::write(&list, "botox\n \nadorbs\n").unwrap();
    assert_eq!(resolve_words(&WordSource::List(list)).unwrap(), vec!["botox", "adorbs"]);

    let missing = dir.join("missing.json");
    fs::write(&missing, "[\n  \"fam\",\n  \"stan\"\n]").unwrap();
    assert_eq!(resolve_words(&WordSource::Missing(missing)).unwrap(), vec!["fam", "stan"]);

    let inline = WordSource::Inline(vec![s("covid")]);
    assert_eq!(resolve_words(&inline).unwrap(), vec!["covid"]);

    assert!(resolve_words(&WordSource::Missing(dir.join("absent.json"))).is_err());
}
