// src/sink.rs
/// Where fetch outcomes end up. Frontends (GUI/CLI) implement this to
/// surface the price and the running log to users.
pub trait DisplaySink {
    /// Latest successfully fetched value, unformatted.
    fn set_current_price(&mut self, _text: &str) {}

    /// One line for the append-only log.
    fn append_log_line(&mut self, _line: &str) {}
}

/// Keeps everything in memory. Handy for tests and headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub price: Option<String>,
    pub price_updates: usize,
    pub lines: Vec<String>,
}

impl MemorySink {
    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.lines.iter().filter(|l| l.starts_with(prefix)).count()
    }
}

impl DisplaySink for MemorySink {
    fn set_current_price(&mut self, text: &str) {
        self.price = Some(s!(text));
        self.price_updates += 1;
    }
    fn append_log_line(&mut self, line: &str) {
        self.lines.push(s!(line));
    }
}
