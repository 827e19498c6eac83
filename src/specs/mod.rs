// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the ground
//! truth lives in the HTML* of one remote page and *how to pull it out*.
//!
//! ## What lives here
//! - **Selector choice & precedence**: an ordered list of locations, most
//!   specific first, because the remote markup is not stable.
//! - **Tolerant extraction** using `core::html` (tree + selectors) and
//!   `core::sanitize` (entities, whitespace, truncation).
//!
//! ## What does **not** live here
//! - Pacing, batching, output files: `runner`.
//! - Local dictionary reconciliation: `reconcile`.
//!
//! ## Testing notes
//! - Specs are testable **offline**: feed canned HTML through a stub `Fetch`
//!   or call the `*_from_html` entry points directly.
pub mod definition;

pub use definition::{CssLocator, DefinitionExtractor, Locator, DEFINITION_SELECTORS};
