// src/core/net.rs

// HTTPS GET with a browser User-Agent (reqwest, blocking)

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;

/// Fetch `url` and return the body as text.
///
/// Non-2xx statuses are errors. No retries, and the client's default
/// timeout applies.
pub fn http_get(url: &str) -> Result<String, reqwest::Error> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    logd!("HTTP: {} {}", resp.status(), url);
    resp.text()
}
