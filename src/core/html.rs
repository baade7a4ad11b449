// src/core/html.rs
use scraper::{Html, Selector};

/// Compile a CSS selector. The error is flattened to text since the
/// parser's error type borrows the input.
pub fn compile(locator: &str) -> Result<Selector, String> {
    Selector::parse(locator).map_err(|e| format!("{e:?}"))
}

/// Visible text of the first element matching `sel`, trimmed.
/// `None` when nothing matches or the element is blank.
pub fn select_text(doc: &str, sel: &Selector) -> Option<String> {
    let page = Html::parse_document(doc);
    let el = page.select(sel).next()?;
    let text = el.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() { None } else { Some(s!(text)) }
}
