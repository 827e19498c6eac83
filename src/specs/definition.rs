// src/specs/definition.rs
//! Scraping *spec* for a dictionary entry page (`/dictionary/<word>`).
//!
//! Purpose:
//! - Fetch the entry page and return one short, cleaned definition.
//! - Prefer the first `.dtText` (text of the first sense); fall back through
//!   broader containers when the page layout differs.
//!
//! Failure handling:
//! - `lookup` reports transport/status errors as `Err` and a selector miss as
//!   `Ok(None)`.
//! - `extract` folds both into [`SENTINEL`] and logs; it never fails.

use std::error::Error;

use crate::config::consts::SENTINEL;
use crate::config::options::ExtractOptions;
use crate::core::html::{Document, Selector};
use crate::core::net::{Fetch, HttpFetcher};
use crate::core::sanitize::normalize_definition;

/// Candidate locations, most specific first.
pub const DEFINITION_SELECTORS: &[&str] = &[
    ".dtText",
    ".sb-0 .dtText",
    ".definition .dtText",
    ".sense .dtText",
    ".dt",
    ".definition",
];

/// One place a definition might live in a parsed page.
pub trait Locator {
    fn label(&self) -> &str;

    /// Raw text of the located fragment, if present.
    fn locate(&self, doc: &Document) -> Option<String>;
}

/// First element matching a CSS-like selector.
pub struct CssLocator {
    selector: Selector,
}

impl CssLocator {
    pub fn new(selector: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Self { selector: Selector::parse(selector)? })
    }
}

impl Locator for CssLocator {
    fn label(&self) -> &str {
        self.selector.as_str()
    }

    fn locate(&self, doc: &Document) -> Option<String> {
        doc.select_first(&self.selector).map(|el| el.trimmed_text())
    }
}

pub struct DefinitionExtractor<F: Fetch> {
    fetcher: F,
    locators: Vec<Box<dyn Locator>>,
    opts: ExtractOptions,
}

impl DefinitionExtractor<HttpFetcher> {
    /// Live extractor with its own HTTP client.
    pub fn http(opts: ExtractOptions) -> Result<Self, Box<dyn Error>> {
        let fetcher = HttpFetcher::new(&opts)?;
        Self::new(fetcher, opts)
    }
}

impl<F: Fetch> DefinitionExtractor<F> {
    /// Extractor using the standard selector chain.
    pub fn new(fetcher: F, opts: ExtractOptions) -> Result<Self, Box<dyn Error>> {
        let locators = DEFINITION_SELECTORS
            .iter()
            .map(|sel| CssLocator::new(sel).map(|l| Box::new(l) as Box<dyn Locator>))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_locators(fetcher, opts, locators))
    }

    pub fn with_locators(fetcher: F, opts: ExtractOptions, locators: Vec<Box<dyn Locator>>) -> Self {
        Self { fetcher, locators, opts }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.opts
    }

    /// Definition for `word`, or [`SENTINEL`]. Never fails.
    pub fn extract(&self, word: &str) -> String {
        match self.lookup(word) {
            Ok(Some(def)) => def,
            Ok(None) => {
                logw!("DEBUG", word, "no definition markup");
                s!(SENTINEL)
            }
            Err(e) => {
                logw!("ERROR", word, "scrape failed: {e}");
                s!(SENTINEL)
            }
        }
    }

    /// Fetch + locate + normalize. `Ok(None)` when no locator yields text.
    pub fn lookup(&self, word: &str) -> Result<Option<String>, Box<dyn Error>> {
        let url = self.opts.url_for(word);
        let body = self.fetcher.get(&url)?;
        Ok(self.definition_from_html(&body))
    }

    /// Run the locator chain over an already-fetched page.
    pub fn definition_from_html(&self, html: &str) -> Option<String> {
        let doc = Document::parse(html);
        self.locators.iter().find_map(|loc| {
            let raw = loc.locate(&doc)?;
            let def = normalize_definition(&raw, self.opts.max_chars);
            if def.is_some() {
                logd!("Definition matched by '{}'", loc.label());
            }
            def
        })
    }
}

/// One-shot extraction with a fresh default client.
pub fn extract(word: &str) -> String {
    match DefinitionExtractor::http(ExtractOptions::default()) {
        Ok(ex) => ex.extract(word),
        Err(e) => {
            logw!("ERROR", word, "could not build HTTP client: {e}");
            s!(SENTINEL)
        }
    }
}

pub fn is_found(definition: &str) -> bool {
    definition != SENTINEL
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFetch;
    impl Fetch for NoFetch {
        fn get(&self, _url: &str) -> Result<String, Box<dyn Error>> {
            Err("offline".into())
        }
    }

    fn extractor() -> DefinitionExtractor<NoFetch> {
        DefinitionExtractor::new(NoFetch, ExtractOptions::default()).unwrap()
    }

    #[test]
    fn all_standard_selectors_compile() {
        for sel in DEFINITION_SELECTORS {
            assert!(CssLocator::new(sel).is_ok(), "{sel}");
        }
    }

    #[test]
    fn primary_selector_wins_over_fallbacks() {
        let html = r#"
            <div class="definition">generic</div>
            <span class="dt">dt text</span>
            <div class="sb-0"><span class="dtText"><strong>: </strong>first sense</span></div>
        "#;
        assert_eq!(extractor().definition_from_html(html).as_deref(), Some("first sense"));
    }

    #[test]
    fn falls_back_to_dt_then_definition() {
        let ex = extractor();
        let dt = "<div class=\"dt\">  : to run\nfast  </div><p class=\"definition\">no</p>";
        assert_eq!(ex.definition_from_html(dt).as_deref(), Some("to run fast"));

        let def = "<section class=\"definition\">\n\tlast\tresort\n</section>";
        assert_eq!(ex.definition_from_html(def).as_deref(), Some("last resort"));
    }

    #[test]
    fn empty_fragment_falls_through() {
        let html = r#"<span class="dtText"> : </span><span class="dt">real one</span>"#;
        assert_eq!(extractor().definition_from_html(html).as_deref(), Some("real one"));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(extractor().definition_from_html("<html><body><p>hi</p></body></html>"), None);
    }

    #[test]
    fn fetch_error_folds_to_sentinel() {
        let ex = extractor();
        assert!(ex.lookup("cat").is_err());
        assert_eq!(ex.extract("cat"), SENTINEL);
        assert!(!is_found(&ex.extract("cat")));
    }

    #[test]
    fn custom_locator_chain() {
        struct Fixed;
        impl Locator for Fixed {
            fn label(&self) -> &str {
                "fixed"
            }

            fn locate(&self, _doc: &Document) -> Option<String> {
                Some(s!("always\nthis"))
            }
        }
        let ex = DefinitionExtractor::with_locators(NoFetch, ExtractOptions::default(), vec![Box::new(Fixed) as Box<dyn Locator>]);
        assert_eq!(ex.definition_from_html("").as_deref(), Some("always this"));
    }
}
