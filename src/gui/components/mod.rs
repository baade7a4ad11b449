// src/gui/components/mod.rs
pub mod action_buttons;
pub mod log_view;
