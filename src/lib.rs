// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod db;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod schedule;
pub mod scrape;
