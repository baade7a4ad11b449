// src/fetch.rs
//
// One fetch = one GET + one selector lookup. Nothing here is allowed to
// fail past `fetch`: every error becomes `FetchResult::Failure`.
use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    config::PriceQuery,
    core::{html, net},
};

/// Outcome of one fetch attempt, consumed immediately by the display sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResult {
    Success(String),
    Failure(String),
}

impl From<Result<String, FetchError>> for FetchResult {
    fn from(r: Result<String, FetchError>) -> Self {
        match r {
            Ok(text) => FetchResult::Success(text),
            Err(e) => FetchResult::Failure(e.detail()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, timeout, non-2xx status, body read
    #[error("error fetching data: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid locator: {0}")]
    Locator(String),

    #[error("price not found")]
    NotFound,
}

impl FetchError {
    /// Message plus every cause underneath it. reqwest keeps the root
    /// cause (refused, DNS, TLS) out of its own `Display`.
    pub fn detail(&self) -> String {
        with_causes(self)
    }
}

/// `"<err>: <cause>: <cause>…"`, skipping causes the text already shows.
pub fn with_causes(err: &(dyn StdError + 'static)) -> String {
    let mut msg = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        let text = c.to_string();
        // #[from] makes the wrapped error our first source; already printed
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        cause = c.source();
    }
    msg
}

/// Something that can turn a query into a result. The controller only
/// sees this trait; tests plug in stubs.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, query: &PriceQuery) -> FetchResult;
}

/// The real thing: network + HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, query: &PriceQuery) -> FetchResult {
        fetch(query)
    }
}

/// Fetch the page and extract the value.
pub fn fetch(query: &PriceQuery) -> FetchResult {
    let res = try_fetch(query);
    match &res {
        Ok(text) => logf!("Fetch: OK value={}", text),
        Err(e) => loge!("Fetch: {} url={}", e, query.url()),
    }
    res.into()
}

pub fn try_fetch(query: &PriceQuery) -> Result<String, FetchError> {
    // Bad selector is a config problem; don't spend a request on it
    let sel = html::compile(query.locator()).map_err(FetchError::Locator)?;
    let body = net::http_get(query.url())?;
    extract(&body, &sel)
}

/// Apply a compiled locator to a page body.
pub fn extract(body: &str, sel: &scraper::Selector) -> Result<String, FetchError> {
    html::select_text(body, sel).ok_or(FetchError::NotFound)
}
