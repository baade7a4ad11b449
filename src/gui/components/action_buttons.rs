// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::{gui::app::App, poll::PollState};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(6.0);
    ui.heading(app.panel().price_label());
    ui.add_space(6.0);

    let state = app.poll.state();
    let mut start_clicked = false;
    let mut stop_clicked = false;

    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 70);
        let button_start = ui.add_enabled(
            state == PollState::Idle,
            egui::Button::new(egui::RichText::new("Start").strong()).fill(green),
        );
        start_clicked = button_start.clicked();

        let button_stop = ui.add_enabled(state == PollState::Polling, egui::Button::new("Stop"));
        stop_clicked = button_stop.clicked();

        if app.poll.is_busy() {
            ui.add(Spinner::new().size(16.0));
        }

        let status = match state {
            PollState::Polling => format!("Polling every {}s", app.poll.interval().as_secs()),
            PollState::Idle => s!("Idle"),
        };
        ui.label(status);
    });
    ui.add_space(4.0);

    // Handle after the borrow ends
    if start_clicked {
        app.on_start_requested();
    }
    if stop_clicked {
        app.on_stop_requested();
    }
}
