// src/poll/controller.rs
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    time::{Duration, Instant},
};

use crate::{
    config::PriceQuery,
    fetch::{FetchResult, Fetcher},
    sink::DisplaySink,
};

use super::{
    Executor, IntervalTimer,
    MSG_ERROR, MSG_FETCHED, MSG_STARTED, MSG_STOPPED,
};

/// Called by the worker after it has posted a result, so the display
/// thread can come back and pick it up (e.g. egui `request_repaint`).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Polling,
}

impl PollState {
    #[inline]
    pub fn is_armed(self) -> bool { self == PollState::Polling }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollStats {
    /// Fetches handed to the executor
    pub dispatched: usize,
    /// Results applied to the sink
    pub completed: usize,
    /// Ticks dropped because a fetch was still out
    pub skipped: usize,
}

/// Owns the timer and the busy guard; writes outcomes to `S`.
///
/// Everything here runs on the thread that owns the controller. Workers
/// only ever see a channel sender and the waker.
pub struct PollController<S: DisplaySink> {
    query: Arc<PriceQuery>,
    fetcher: Arc<dyn Fetcher>,
    executor: Box<dyn Executor>,
    waker: Option<Waker>,

    timer: IntervalTimer,
    // Some = a fetch is outstanding
    in_flight: Option<Receiver<FetchResult>>,

    sink: S,
    stats: PollStats,
}

impl<S: DisplaySink> PollController<S> {
    pub fn new(
        query: PriceQuery,
        fetcher: Arc<dyn Fetcher>,
        executor: Box<dyn Executor>,
        interval: Duration,
        sink: S,
    ) -> Self {
        Self {
            query: Arc::new(query),
            fetcher,
            executor,
            waker: None,
            timer: IntervalTimer::new(interval),
            in_flight: None,
            sink,
            stats: PollStats::default(),
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn state(&self) -> PollState {
        if self.timer.is_armed() { PollState::Polling } else { PollState::Idle }
    }

    #[inline]
    pub fn is_busy(&self) -> bool { self.in_flight.is_some() }

    #[inline]
    pub fn stats(&self) -> PollStats { self.stats }

    #[inline]
    pub fn interval(&self) -> Duration { self.timer.period() }

    #[inline]
    pub fn sink(&self) -> &S { &self.sink }

    /// How long the owner may sleep before the next deadline.
    #[inline]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /* ---------- commands ---------- */

    /// Idle → Polling. No-op (and no log line) when already polling.
    pub fn start(&mut self, now: Instant) {
        if !self.timer.arm(now) {
            logd!("Poll: start ignored, already polling");
            return;
        }
        logf!("Poll: started interval={:?}", self.timer.period());
        self.sink.append_log_line(MSG_STARTED);
    }

    /// Polling → Idle. An in-flight fetch is left to finish and is still
    /// reported. No-op (and no log line) when idle.
    pub fn stop(&mut self) {
        if !self.timer.disarm() {
            logd!("Poll: stop ignored, already idle");
            return;
        }
        logf!("Poll: stopped busy={}", self.is_busy());
        self.sink.append_log_line(MSG_STOPPED);
    }

    /* ---------- loop ---------- */

    /// Apply finished results, then fire the timer if it is due.
    pub fn tick(&mut self, now: Instant) {
        self.drain();

        if !self.timer.fire(now) {
            return;
        }
        if self.is_busy() {
            self.stats.skipped += 1;
            logd!("Poll: tick skipped, fetch still outstanding");
            return;
        }
        self.dispatch();
    }

    /// Apply a finished result, if there is one. Never blocks.
    pub fn drain(&mut self) {
        let Some(rx) = &self.in_flight else { return };

        let outcome = match rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                loge!("Poll: worker ended without a result");
                FetchResult::Failure(s!("fetch worker ended without a result"))
            }
        };
        self.in_flight = None;
        self.apply(outcome);
    }

    fn dispatch(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.in_flight = Some(rx);
        self.stats.dispatched += 1;

        let query = Arc::clone(&self.query);
        let fetcher = Arc::clone(&self.fetcher);
        let waker = self.waker.clone();

        logd!("Poll: dispatch #{}", self.stats.dispatched);

        // → This is where the fetch happens ←
        self.executor.execute(Box::new(move || {
            let res = fetcher.fetch(&query);
            // Receiver gone means the controller was dropped; nothing to do
            let _ = tx.send(res);
            if let Some(w) = waker {
                w();
            }
        }));
    }

    fn apply(&mut self, outcome: FetchResult) {
        self.stats.completed += 1;
        match outcome {
            FetchResult::Success(text) => {
                self.sink.set_current_price(&text);
                self.sink.append_log_line(&format!("{MSG_FETCHED}{text}"));
            }
            FetchResult::Failure(msg) => {
                // Price label keeps the last good value
                self.sink.append_log_line(&format!("{MSG_ERROR}{msg}"));
            }
        }
    }
}
