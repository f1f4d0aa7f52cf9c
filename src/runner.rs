// src/runner.rs
use std::error::Error;
use std::io::{self, Write};

use crate::{
    config::consts::{CSV_SEP, WEATHER_HEADERS},
    config::options::ScrapeOptions,
    csv::write_row,
    file::open_output,
    progress::Progress,
    schedule::{self, Week},
    scrape::{GameWeather, WeekParser},
};

/// Page source for the driving loop. The HTTP client implements this;
/// tests substitute canned documents.
pub trait Fetch {
    fn get(&self, path: &str) -> Result<String, Box<dyn Error>>;
}

impl Fetch for crate::core::net::Client {
    fn get(&self, path: &str) -> Result<String, Box<dyn Error>> {
        crate::core::net::Client::get(self, path)
    }
}

/// Summary of what a run produced.
pub struct RunSummary {
    pub rows_written: usize,
    pub pages_failed: usize,
}

/// Scrape every (season, week) page and write two rows per parsed game,
/// one per team, sharing the temperature. A failed fetch drops that
/// page's rows and the loop continues; output file errors abort the run.
pub fn run(
    opts: &ScrapeOptions,
    fetch: &dyn Fetch,
    parser: &dyn WeekParser,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let weeks = schedule::season_weeks(opts.last_regular_week, opts.playoffs);
    let seasons: Vec<u16> = (opts.first_season..=opts.last_season).collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(seasons.len() * weeks.len());
    }

    let headers: Vec<String> = WEATHER_HEADERS.iter().map(|h| s!(*h)).collect();
    let mut out = open_output(&opts.out, opts.mode, &headers, CSV_SEP)?;

    logf!(
        "Scrape: Begin seasons={}..={} weeks={} playoffs={} out={}",
        opts.first_season, opts.last_season, opts.last_regular_week,
        opts.playoffs, opts.out.display()
    );

    let mut rows_written = 0usize;
    let mut pages_failed = 0usize;

    for &season in &seasons {
        for week in &weeks {
            // Only the fetch is droppable; output file errors abort the run.
            let doc = match fetch.get(&week.url_path(season)) {
                Ok(doc) => doc,
                Err(e) => {
                    loge!("Scrape: {} {}: {}", season, week.label(), e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&format!("Failed to retrieve {}: {}", week.url_path(season), e));
                    }
                    pages_failed += 1;
                    continue;
                }
            };

            rows_written += emit_week(season, week, parser.parse(&doc), &mut out)?;
            if let Some(p) = progress.as_deref_mut() {
                p.page_done(season, &week.label());
            }
        }
    }

    out.flush()?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!("Scrape: Done rows={} failed_pages={}", rows_written, pages_failed);
    Ok(RunSummary { rows_written, pages_failed })
}

fn emit_week<W: Write>(
    season: u16,
    week: &Week,
    games: Vec<GameWeather>,
    out: &mut W,
) -> io::Result<usize> {
    let label = week.label();

    let mut rows = 0usize;
    for game in games {
        for team in [&game.team1, &game.team2] {
            let row = vec![
                season.to_string(),
                label.clone(),
                team.clone(),
                game.temperature.clone(),
            ];
            write_row(&mut *out, &row, CSV_SEP)?;
            rows += 1;
        }
    }
    logd!("Scrape: {} {} games={}", season, label, rows / 2);
    Ok(rows)
}
