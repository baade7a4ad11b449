// src/gui/components/log_view.rs
//
// Append-only log, newest at the bottom. Sticks to the bottom unless the
// user scrolls up.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let lines = &app.panel().log;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in lines {
                ui.label(egui::RichText::new(line).monospace());
            }
        });
}
