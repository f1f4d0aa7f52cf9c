// src/gui/app.rs
use std::error::Error;
use std::path::Path;

use eframe::egui;

use crate::db::{BucketRow, Db, PlayerChoice};

use super::{picker, plot};

pub fn run(db_path: &Path, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let db = Db::open(db_path)?;
    let names = db.player_names()?;
    logf!("Init: {} players from {}", names.len(), db_path.display());

    eframe::run_native(
        "QBR vs Weather",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(db, names)))),
    )?;
    Ok(())
}

// Two screens, strictly sequential: pick a player, then plot. There is
// no way back to the picker short of restarting the program.
enum View {
    Picker,
    Plot { title: String, rows: Vec<BucketRow> },
    Failed { message: String },
}

pub struct App {
    db: Option<Db>,
    names: Vec<String>,
    search: String,
    selected: String,
    view: View,
}

impl App {
    pub fn new(db: Db, names: Vec<(String, String)>) -> Self {
        let names = names
            .into_iter()
            .map(|(first, last)| format!("{first} {last}"))
            .collect();
        Self {
            db: Some(db),
            names,
            search: s!(),
            selected: s!(),
            view: View::Picker,
        }
    }

    /// Run the single aggregation query for `choice` and move to the plot.
    /// The connection is dropped here, before anything is rendered.
    fn resolve(&mut self, choice: PlayerChoice) {
        let result = match self.db.take() {
            Some(db) => db.qbr_by_temp_bucket(&choice),
            None => Err("database already closed".into()),
        };

        self.view = match result {
            Ok(rows) => {
                logf!("Query: {:?} buckets={}", choice, rows.len());
                View::Plot { title: choice.title(), rows }
            }
            Err(e) => {
                loge!("Query failed: {}", e);
                View::Failed { message: format!("Query failed: {e}") }
            }
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending: Option<PlayerChoice> = None;

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.view {
            View::Picker => {
                let action = picker::draw(ui, &mut self.search, &mut self.selected, &self.names);
                pending = action.map(|a| match a {
                    // Everyone ignores whatever was typed or selected.
                    picker::PickerAction::Everyone => PlayerChoice::Everyone,
                    picker::PickerAction::Confirm => PlayerChoice::parse(&self.selected),
                });
            }
            View::Plot { title, rows } => plot::draw(ui, title, rows),
            View::Failed { message } => {
                ui.label(message.as_str());
            }
        });

        if let Some(choice) = pending {
            self.resolve(choice);
        }
    }
}
