// src/gui/panel.rs
use crate::sink::DisplaySink;

/// What the window shows. Written by the controller on the UI thread,
/// read by the components each frame.
#[derive(Clone, Debug, Default)]
pub struct PanelState {
    pub price: Option<String>,
    pub log: Vec<String>,
}

impl PanelState {
    pub fn price_label(&self) -> String {
        match &self.price {
            Some(p) => format!("Dollar price: {p}"),
            None => s!("Dollar price: "),
        }
    }
}

impl DisplaySink for PanelState {
    fn set_current_price(&mut self, text: &str) {
        self.price = Some(s!(text));
    }
    fn append_log_line(&mut self, line: &str) {
        self.log.push(s!(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_before_and_after_first_price() {
        let mut p = PanelState::default();
        assert_eq!(p.price_label(), "Dollar price: ");
        p.set_current_price("83,500");
        assert_eq!(p.price_label(), "Dollar price: 83,500");
    }
}
