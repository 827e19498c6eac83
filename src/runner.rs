// src/runner.rs
use std::error::Error;
use std::path::PathBuf;
use std::{thread, time::Duration};

use crate::{
    config::options::{ExtractOptions, ReconcileOptions, ScrapeOptions, WordSource},
    core::net::Fetch,
    dictionary::Dictionary,
    file,
    progress::Progress,
    reconcile::{reconcile, Reconciliation},
    specs::definition::{is_found, DefinitionExtractor},
};

/// What a reconcile run produced.
pub struct ReconcileSummary {
    pub result: Reconciliation,
    pub files_written: Vec<PathBuf>,
}

/// Load the word list and dictionary, reconcile, write both outputs.
/// Input errors abort before anything is written.
pub fn run_reconcile(
    opts: &ReconcileOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ReconcileSummary, Box<dyn Error>> {
    let words = file::read_word_list(&opts.words_path)?;
    let dictionary = Dictionary::load(&opts.dictionary_path)?;
    logf!("Reconciling {} words against {} dictionary entries", words.len(), dictionary.len());

    let result = reconcile(&words, &dictionary);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(words.len());
        for word in &words {
            p.item_done(word, dictionary.contains(word));
        }
    }

    let files_written = file::write_reconciliation(&result, &opts.resolved_path(), &opts.unresolved_path())?;
    logf!("Reconcile done: {} found, {} not found", result.found(), result.not_found());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(ReconcileSummary { result, files_written })
}

/// Definitions gathered by a scrape, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    pub definitions: Vec<(String, String)>,
    pub found: usize,
    pub not_found: usize,
}

/// Extract every word in order, pausing `pause` between requests.
pub fn scrape<F: Fetch, S: AsRef<str>>(
    words: &[S],
    extractor: &DefinitionExtractor<F>,
    pause: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> ScrapeReport {
    let mut report = ScrapeReport::default();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(words.len());
    }

    for (i, word) in words.iter().enumerate() {
        if i > 0 && !pause.is_zero() {
            thread::sleep(pause); // be polite
        }
        let word = word.as_ref();
        let def = extractor.extract(word);
        let found = is_found(&def);
        if found {
            report.found += 1;
        } else {
            report.not_found += 1;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(word, found);
        }
        report.definitions.push((s!(word), def));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}

pub fn resolve_words(source: &WordSource) -> Result<Vec<String>, Box<dyn Error>> {
    match source {
        WordSource::List(path) => file::read_word_list(path),
        WordSource::Missing(path) => file::read_word_array(path),
        WordSource::Inline(words) => Ok(words.clone()),
    }
}

/// Live scrape: resolve words, fetch each definition, optionally save JSON.
pub fn run_scrape(
    opts: &ScrapeOptions,
    extract: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeReport, Box<dyn Error>> {
    let words = resolve_words(&opts.source)?;
    if words.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No words to scrape.");
        }
        return Ok(ScrapeReport::default());
    }

    let extractor = DefinitionExtractor::http(extract.clone())?;
    logf!("Scraping {} words", words.len());
    let report = scrape(&words, &extractor, opts.pause, progress);
    logf!("Scrape done: {} found, {} not found", report.found, report.not_found);

    if let Some(out) = &opts.out {
        file::write_json_pretty(out, &file::definitions_to_json(&report.definitions))?;
    }
    Ok(report)
}
