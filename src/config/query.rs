// src/config/query.rs
use super::consts::{PRICE_LOCATOR, PRICE_URL};

/// What to fetch and where the value sits in the page.
/// Built once at startup; never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceQuery {
    url: String,
    locator: String,
}

impl PriceQuery {
    pub fn new(url: impl Into<String>, locator: impl Into<String>) -> Self {
        Self { url: url.into(), locator: locator.into() }
    }

    #[inline]
    pub fn url(&self) -> &str { &self.url }

    /// CSS selector of the element holding the value.
    #[inline]
    pub fn locator(&self) -> &str { &self.locator }
}

impl Default for PriceQuery {
    fn default() -> Self {
        Self::new(PRICE_URL, PRICE_LOCATOR)
    }
}
