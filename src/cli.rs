// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::consts::DEFAULT_DB_FILE;
use crate::config::options::{OutputMode, ScrapeOptions};
use crate::core::net::Client;
use crate::db::Db;
use crate::progress::Progress;
use crate::runner;
use crate::scrape::GameBoxParser;

pub struct Params {
    pub scrape: ScrapeOptions,
    pub load: bool,          // load the CSV into SQLite instead of scraping
    pub db: PathBuf,
}

impl Params {
    pub fn new() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            load: false,
            db: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;

    if params.load {
        let mut db = Db::open(&params.db)?;
        let n = db.load_weather_csv(&params.scrape.out)?;
        println!(
            "Loaded {} rows from {} into {}",
            n,
            params.scrape.out.display(),
            params.db.display()
        );
        return Ok(());
    }

    let client = Client::new()?;
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params.scrape, &client, &GameBoxParser, Some(&mut progress))?;
    println!(
        "Wrote {} rows to {} ({} pages failed)",
        summary.rows_written,
        params.scrape.out.display(),
        summary.pages_failed
    );
    Ok(())
}

fn parse_cli(
    params: &mut Params,
    mut args: impl Iterator<Item = String>,
) -> Result<(), Box<dyn Error>> {
    while let Some(a) = args.next() {
        match a.as_str() {
            "--seasons" => {
                let v = args.next().ok_or("Missing value for --seasons")?;
                let (first, last) = parse_season_range(&v)?;
                params.scrape.first_season = first;
                params.scrape.last_season = last;
            }
            "--weeks" => {
                let v: u8 = args.next().ok_or("Missing value for --weeks")?.parse()?;
                if v == 0 || v > 18 {
                    return Err("Weeks out of range (1..18)".into());
                }
                params.scrape.last_regular_week = v;
            }
            "--no-playoffs" => params.scrape.playoffs = false,
            "-o" | "--out" => {
                params.scrape.out = PathBuf::from(args.next().ok_or("Missing output path")?)
            }
            "--append" => params.scrape.mode = OutputMode::Append,
            "--load" => params.load = true,
            "--db" => params.db = PathBuf::from(args.next().ok_or("Missing value for --db")?),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

fn parse_season_range(s: &str) -> Result<(u16, u16), Box<dyn Error>> {
    if let Some(dash) = s.find('-') {
        let a: u16 = s[..dash].trim().parse()?;
        let b: u16 = s[dash + 1..].trim().parse()?;
        if a > b {
            return Err(format!("Invalid range: {}", s).into());
        }
        Ok((a, b))
    } else {
        let y: u16 = s.trim().parse()?;
        Ok((y, y))
    }
}

#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, season: u16, label: &str) {
        self.done += 1;
        println!("[{}/{}] {} {}", self.done, self.total, season, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Params, Box<dyn Error>> {
        let mut params = Params::new();
        parse_cli(&mut params, args.iter().map(|a| s!(*a)))?;
        Ok(params)
    }

    #[test]
    fn defaults_match_the_original_run() {
        let p = parse(&[]).unwrap();
        assert_eq!(p.scrape.first_season, 2013);
        assert_eq!(p.scrape.last_season, 2022);
        assert_eq!(p.scrape.last_regular_week, 16);
        assert!(p.scrape.playoffs);
        assert_eq!(p.scrape.mode, OutputMode::Overwrite);
        assert!(!p.load);
    }

    #[test]
    fn season_range_forms() {
        assert_eq!(parse_season_range("2015-2018").unwrap(), (2015, 2018));
        assert_eq!(parse_season_range("2019").unwrap(), (2019, 2019));
        assert!(parse_season_range("2020-2015").is_err());
        assert!(parse_season_range("nope").is_err());
    }

    #[test]
    fn flags_are_applied() {
        let p = parse(&[
            "--seasons", "2020-2021",
            "--weeks", "17",
            "--no-playoffs",
            "--append",
            "-o", "w.csv",
            "--db", "my.db",
        ])
        .unwrap();
        assert_eq!(p.scrape.first_season, 2020);
        assert_eq!(p.scrape.last_season, 2021);
        assert_eq!(p.scrape.last_regular_week, 17);
        assert!(!p.scrape.playoffs);
        assert_eq!(p.scrape.mode, OutputMode::Append);
        assert_eq!(p.scrape.out, PathBuf::from("w.csv"));
        assert_eq!(p.db, PathBuf::from("my.db"));
    }

    #[test]
    fn unknown_arg_is_rejected() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--weeks", "0"]).is_err());
    }
}
