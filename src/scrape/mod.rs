// src/scrape/mod.rs
mod weather;

pub use weather::{GameBoxParser, GameWeather, WeekParser, parse_doc};
