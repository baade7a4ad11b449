// src/gui/app.rs
use std::{error::Error, sync::Arc, time::Instant};

use eframe::egui;

use crate::{
    config::{PriceQuery, consts::APP_TITLE, state::GuiState},
    fetch::HttpFetcher,
    poll::{PollController, ThreadExecutor},
};

use super::{components, panel::PanelState};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(cc, GuiState::default())))),
    )?;
    Ok(())
}

pub struct App {
    pub state: GuiState,

    // single source of truth for price + log (UI thread only)
    pub poll: PollController<PanelState>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: GuiState) -> Self {
        // Workers poke the UI when a result lands
        let ctx = cc.egui_ctx.clone();
        let waker = Arc::new(move || ctx.request_repaint());

        let query = PriceQuery::default();
        logf!("Init: url={} interval={:?}", query.url(), state.interval);

        let poll = PollController::new(
            query,
            Arc::new(HttpFetcher),
            Box::new(ThreadExecutor),
            state.interval,
            PanelState::default(),
        )
        .with_waker(waker);

        Self { state, poll }
    }

    #[inline]
    pub fn panel(&self) -> &PanelState { self.poll.sink() }

    pub fn on_start_requested(&mut self) {
        logf!("UI: Start");
        self.poll.start(Instant::now());
    }

    pub fn on_stop_requested(&mut self) {
        logf!("UI: Stop");
        self.poll.stop();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.poll.tick(now);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::log_view::draw(ui, self);
        });

        // Wake up for the next deadline even if nothing else happens
        if let Some(wait) = self.poll.time_until_tick(now) {
            ctx.request_repaint_after(wait);
        }
    }
}
