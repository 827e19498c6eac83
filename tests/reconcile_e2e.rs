// tests/reconcile_e2e.rs
use std::fs;
use std::path::PathBuf;

use dict_scrape::config::options::ReconcileOptions;
use dict_scrape::runner::run_reconcile;
use dict_scrape::{reconcile, Dictionary, SENTINEL};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dict_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn cat_and_nonword() {
    let d = Dictionary::from_json(r#"{"cat": "a small domesticated carnivorous mammal"}"#).unwrap();
    let r = reconcile(&["cat", "zzznotaword"], &d);

    assert_eq!(r.resolved["cat"], "a small domesticated carnivorous mammal");
    assert_eq!(r.resolved["zzznotaword"], SENTINEL);
    assert_eq!(r.resolved.len(), 2);
    assert_eq!(r.unresolved, vec!["zzznotaword"]);
}

#[test]
fn every_word_is_a_key_and_unresolved_is_exact() {
    let d = Dictionary::from_json(r#"{"a": "1", "c": "3", "Q": "caps"}"#).unwrap();
    let words = ["a", "b", "c", "b", "q", "a"];
    let r = reconcile(&words, &d);

    for w in words {
        assert!(r.resolved.contains_key(w), "{w}");
    }
    let expected: Vec<&str> = words.iter().copied().filter(|w| !d.contains(w)).collect();
    assert_eq!(r.unresolved, expected);
    assert_eq!(r.unresolved, vec!["b", "b", "q"]);
    assert_eq!(r.found(), 3);
}

#[test]
fn run_writes_both_files_in_input_order() {
    let dir = tmp_dir("reconcile_run");
    let words = dir.join("words.txt");
    let dict = dir.join("dict.json");
    fs::write(&words, "zebra\n\n  cat \nfam\n").unwrap();
    fs::write(&dict, r#"{"cat": "a feline", "zebra": "a striped equine"}"#).unwrap();

    let opts = ReconcileOptions {
        words_path: words,
        dictionary_path: dict,
        out_dir: dir.join("out"),
    };
    let summary = run_reconcile(&opts, None).unwrap();
    assert_eq!(summary.files_written.len(), 2);
    assert_eq!(summary.result.total, 3);

    let a = fs::read_to_string(opts.resolved_path()).unwrap();
    assert_eq!(
        a,
        "{\n  \"zebra\": \"a striped equine\",\n  \"cat\": \"a feline\",\n  \"fam\": \"Definition not found\"\n}"
    );
    let b = fs::read_to_string(opts.unresolved_path()).unwrap();
    assert_eq!(b, "[\n  \"fam\"\n]");
}

#[test]
fn missing_input_writes_nothing() {
    let dir = tmp_dir("reconcile_missing");
    let words = dir.join("words.txt");
    fs::write(&words, "cat\n").unwrap();

    let opts = ReconcileOptions {
        words_path: words,
        dictionary_path: dir.join("nope.json"),
        out_dir: dir.clone(),
    };
    assert!(run_reconcile(&opts, None).is_err());
    assert!(!opts.resolved_path().exists());
    assert!(!opts.unresolved_path().exists());
}

#[test]
fn malformed_dictionary_is_fatal() {
    let dir = tmp_dir("reconcile_malformed");
    let words = dir.join("words.txt");
    let dict = dir.join("dict.json");
    fs::write(&words, "cat\n").unwrap();
    fs::write(&dict, "{ not json").unwrap();

    let opts = ReconcileOptions { words_path: words, dictionary_path: dict, out_dir: dir.clone() };
    assert!(run_reconcile(&opts, None).is_err());
    assert!(!opts.resolved_path().exists());
}

#[test]
fn failed_second_output_leaves_no_first_output() {
    let dir = tmp_dir("reconcile_blocked");
    let words = dir.join("words.txt");
    let dict = dir.join("dict.json");
    fs::write(&words, "cat\nzzznotaword\n").unwrap();
    fs::write(&dict, r#"{"cat": "a feline"}"#).unwrap();

    let opts = ReconcileOptions { words_path: words, dictionary_path: dict, out_dir: dir.join("out") };
    // A directory squatting on the unresolved file name makes that write fail.
    fs::create_dir_all(opts.unresolved_path()).unwrap();

    assert!(run_reconcile(&opts, None).is_err());
    assert!(!opts.resolved_path().exists());
    assert!(opts.unresolved_path().is_dir());

    let leftovers: Vec<_> = fs::read_dir(&opts.out_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}
