// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use eframe::egui::ViewportBuilder;
use qbr_weather::config::consts::DEFAULT_DB_FILE;

fn main() {
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([700.0, 600.0]),
        ..Default::default()
    };

    if let Err(e) = qbr_weather::gui::run(&db_path, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
