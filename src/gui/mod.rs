// src/gui/mod.rs
pub mod app;
pub mod picker;
pub mod plot;

pub use app::run;
