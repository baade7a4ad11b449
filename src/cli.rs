// src/cli.rs
//
// Headless frontend: same controller, stdout as the display.
use std::{
    error::Error,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};

use crate::{
    config::{PriceQuery, consts::POLL_INTERVAL_MS},
    fetch::{self, FetchResult, HttpFetcher},
    poll::{PollController, ThreadExecutor},
    sink::DisplaySink,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub once: bool,
    /// Stop after this many completed fetches
    pub ticks: Option<usize>,
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--once" => params.once = true,
            "--ticks" => {
                let v: usize = args.next().ok_or("Missing value for --ticks")?.parse()?;
                if v == 0 { return Err("--ticks must be at least 1".into()); }
                params.ticks = Some(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}

/// Prints every sink call as a line.
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn append_log_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Single fetch; the failure message becomes the error.
pub fn fetch_once(query: &PriceQuery) -> Result<String, Box<dyn Error>> {
    match fetch::fetch(query) {
        FetchResult::Success(p) => Ok(p),
        FetchResult::Failure(e) => Err(e.into()),
    }
}

/// A failed `--once` fetch comes back as the error.
pub fn run(params: &Params) -> Result<(), Box<dyn Error>> {
    let query = PriceQuery::default();

    if params.once {
        println!("{}", fetch_once(&query)?);
        return Ok(());
    }

    // Workers unpark us when a result is ready
    let main = thread::current();
    let mut poll = PollController::new(
        query,
        Arc::new(HttpFetcher),
        Box::new(ThreadExecutor),
        Duration::from_millis(POLL_INTERVAL_MS),
        StdoutSink,
    )
    .with_waker(Arc::new(move || main.unpark()));

    poll.start(Instant::now());
    loop {
        let now = Instant::now();
        poll.tick(now);

        if let Some(n) = params.ticks {
            if poll.stats().completed >= n {
                poll.stop();
                return Ok(());
            }
        }
        let wait = poll.time_until_tick(now).unwrap_or(Duration::from_secs(1));
        thread::park_timeout(wait);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn parses_flags() {
        assert_eq!(parse_args(args(&[])).unwrap(), Params::default());
        let p = parse_args(args(&["--ticks", "3", "--once"])).unwrap();
        assert!(p.once);
        assert_eq!(p.ticks, Some(3));
    }

    #[test]
    fn failed_once_fetch_is_an_error() {
        // Locator is checked before any request goes out
        let q = PriceQuery::new("http://0.0.0.0:9/", "td:nth-child(");
        let err = fetch_once(&q).unwrap_err();
        assert!(err.to_string().starts_with("invalid locator"), "{err}");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&["--ticks"])).is_err());
        assert!(parse_args(args(&["--ticks", "0"])).is_err());
        assert!(parse_args(args(&["--ticks", "x"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
