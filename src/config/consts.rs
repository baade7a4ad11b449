// src/config/consts.rs

// Net config
pub const PRICE_URL: &str = "https://www.tgju.org/profile/price_dollar_rl";
// The site rejects requests that don't look like a browser
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Scrape: first row, value cell of the overview table
pub const PRICE_LOCATOR: &str = concat!(
    "#main > div.stocks-profile",
    " > div.fs-row.bootstrap-fix.widgets.full-w-set.profile-social-share-box",
    " > div.row.tgju-widgets-row",
    " > div.tgju-widgets-block.col-md-12.col-lg-4.tgju-widgets-block-bottom-unset.overview-first-block",
    " > div > div:nth-child(2) > div",
    " > div.tables-default.normal > table > tbody",
    " > tr:nth-child(1) > td.text-left",
);

// Polling
pub const POLL_INTERVAL_MS: u64 = 30_000;

// Local diagnostics
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const APP_TITLE: &str = "Dollar Price Tracker";
pub const WINDOW_W: f32 = 420.0;
pub const WINDOW_H: f32 = 520.0;
