// src/config/mod.rs

pub mod consts;
pub mod query;
pub mod state;

pub use query::PriceQuery;
