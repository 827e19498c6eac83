// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod dictionary;
pub mod file;
pub mod progress;
pub mod reconcile;
pub mod runner;

pub use config::consts::SENTINEL;
pub use dictionary::{Dictionary, WordResult};
pub use reconcile::{reconcile, Reconciliation};
pub use specs::definition::{extract, DefinitionExtractor};
