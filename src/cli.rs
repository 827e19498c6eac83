// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use crate::config::options::{AppOptions, WordSource};
use crate::dictionary::Dictionary;
use crate::progress::Progress;
use crate::runner;
use crate::specs::definition::DefinitionExtractor;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Reconcile,
    Define(Vec<String>),
    Scrape,
    Lookup(String),
    Suggest(String),
    Help,
}

/// Prints one line per word, the way the batch scripts always did.
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, word: &str, found: bool) {
        self.done += 1;
        let mark = if found { "found" } else { "not found" };
        println!("[{}/{}] {word}: {mark}", self.done, self.total);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = AppOptions::default();
    let args: Vec<String> = env::args().skip(1).collect();
    let cmd = parse_args(&args, &mut opts)?;
    execute(cmd, &opts)
}

fn execute(cmd: Command, opts: &AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
        }
        Command::Reconcile => {
            let mut progress = ConsoleProgress::new();
            let summary = runner::run_reconcile(&opts.reconcile, Some(&mut progress))?;
            let r = &summary.result;
            println!("Processing complete!");
            println!("Total words processed: {}", r.total);
            println!("Definitions found: {}", r.found());
            println!("Definitions not found: {}", r.not_found());
            for path in &summary.files_written {
                println!("Output saved to: {}", path.display());
            }
        }
        Command::Define(words) => {
            let extractor = DefinitionExtractor::http(opts.extract.clone())?;
            let report = runner::scrape(&words, &extractor, opts.scrape.pause, None);
            for (word, def) in &report.definitions {
                println!("{word}: {def}");
            }
        }
        Command::Scrape => {
            let mut progress = ConsoleProgress::new();
            let report = runner::run_scrape(&opts.scrape, &opts.extract, Some(&mut progress))?;
            println!("Definitions found: {}", report.found);
            println!("Definitions not found: {}", report.not_found);
            if let Some(out) = &opts.scrape.out {
                if !report.definitions.is_empty() {
                    println!("Output saved to: {}", out.display());
                }
            }
        }
        Command::Lookup(word) => {
            let dict = Dictionary::load(&opts.reconcile.dictionary_path)?;
            match dict.search(&word) {
                Some(hit) => println!("{} ({} pts): {}", hit.word, hit.score, hit.definition),
                None => println!("{}: not in dictionary", word.trim()),
            }
        }
        Command::Suggest(prefix) => {
            let dict = Dictionary::load(&opts.reconcile.dictionary_path)?;
            for word in dict.suggestions(&prefix) {
                println!("{word}");
            }
        }
    }
    Ok(())
}

/// Parse `args` (program name already stripped) into a command, updating `opts`.
pub fn parse_args(args: &[String], opts: &mut AppOptions) -> Result<Command, Box<dyn std::error::Error>> {
    let mut it = args.iter();
    let Some(first) = it.next() else {
        return Ok(Command::Help);
    };

    let mut positional: Vec<String> = Vec::new();
    let mut out: Option<PathBuf> = None;

    while let Some(a) = it.next() {
        match a.as_str() {
            "--words" => {
                let v = PathBuf::from(it.next().ok_or("Missing value for --words")?);
                opts.reconcile.words_path = v.clone();
                opts.scrape.source = WordSource::List(v);
            }
            "--missing" => {
                let v = it.next().ok_or("Missing value for --missing")?;
                opts.scrape.source = WordSource::Missing(PathBuf::from(v));
            }
            "--dict" => {
                let v = it.next().ok_or("Missing value for --dict")?;
                opts.reconcile.dictionary_path = PathBuf::from(v);
            }
            "-o" | "--out" => out = Some(PathBuf::from(it.next().ok_or("Missing output path")?)),
            "--pause" => {
                let ms: u64 = it.next().ok_or("Missing value for --pause")?.parse()?;
                opts.scrape.pause = Duration::from_millis(ms);
            }
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("Unknown arg: {}", flag).into());
            }
            _ => positional.push(a.clone()),
        }
    }

    let cmd = match first.as_str() {
        "reconcile" => {
            if let Some(dir) = out {
                opts.reconcile.out_dir = dir;
            }
            Command::Reconcile
        }
        "define" => {
            if positional.is_empty() {
                return Err("define: give at least one word".into());
            }
            Command::Define(positional)
        }
        "scrape" => {
            if out.is_some() {
                opts.scrape.out = out;
            }
            if !positional.is_empty() {
                opts.scrape.source = WordSource::Inline(positional);
            }
            Command::Scrape
        }
        "lookup" => Command::Lookup(single(positional, "lookup <word>")?),
        "suggest" => Command::Suggest(single(positional, "suggest <prefix>")?),
        "-h" | "--help" | "help" => Command::Help,
        other => return Err(format!("Unknown command: {}", other).into()),
    };
    Ok(cmd)
}

fn single(mut positional: Vec<String>, usage: &str) -> Result<String, Box<dyn std::error::Error>> {
    if positional.len() != 1 {
        return Err(format!("Usage: {usage}").into());
    }
    Ok(positional.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reconcile_flags() {
        let mut opts = AppOptions::default();
        let cmd = parse_args(&args(&["reconcile", "--words", "w.txt", "--dict", "d.json", "-o", "out"]), &mut opts).unwrap();
        assert_eq!(cmd, Command::Reconcile);
        assert_eq!(opts.reconcile.words_path, PathBuf::from("w.txt"));
        assert_eq!(opts.reconcile.dictionary_path, PathBuf::from("d.json"));
        assert_eq!(opts.reconcile.resolved_path(), PathBuf::from("out").join("words_with_definitions.json"));
    }

    #[test]
    fn scrape_sources_and_pause() {
        let mut opts = AppOptions::default();
        parse_args(&args(&["scrape", "--missing", "m.json", "--pause", "0", "-o", "s.json"]), &mut opts).unwrap();
        assert_eq!(opts.scrape.source, WordSource::Missing(PathBuf::from("m.json")));
        assert_eq!(opts.scrape.pause, Duration::ZERO);
        assert_eq!(opts.scrape.out, Some(PathBuf::from("s.json")));

        let mut opts = AppOptions::default();
        parse_args(&args(&["scrape", "fam", "stan"]), &mut opts).unwrap();
        assert_eq!(opts.scrape.source, WordSource::Inline(args(&["fam", "stan"])));
    }

    #[test]
    fn positional_commands() {
        let mut opts = AppOptions::default();
        assert_eq!(parse_args(&args(&["define", "cat", "dog"]), &mut opts).unwrap(), Command::Define(args(&["cat", "dog"])));
        assert_eq!(parse_args(&args(&["lookup", "cat"]), &mut opts).unwrap(), Command::Lookup(s!("cat")));
        assert_eq!(parse_args(&args(&["suggest", "ca"]), &mut opts).unwrap(), Command::Suggest(s!("ca")));
        assert_eq!(parse_args(&[], &mut opts).unwrap(), Command::Help);
    }

    #[test]
    fn bad_input_is_rejected() {
        let mut opts = AppOptions::default();
        assert!(parse_args(&args(&["define"]), &mut opts).is_err());
        assert!(parse_args(&args(&["lookup", "a", "b"]), &mut opts).is_err());
        assert!(parse_args(&args(&["reconcile", "--bogus"]), &mut opts).is_err());
        assert!(parse_args(&args(&["reconcile", "--words"]), &mut opts).is_err());
        assert!(parse_args(&args(&["frobnicate"]), &mut opts).is_err());
        assert!(parse_args(&args(&["scrape", "--pause", "soon"]), &mut opts).is_err());
    }
}
