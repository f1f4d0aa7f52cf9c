// src/db.rs
//
// SQLite storage for the two fact tables and the one aggregation the
// plotter needs. All grouping/averaging stays in SQL.

use std::error::Error;
use std::path::Path;

use rusqlite::Connection;

use crate::config::consts::{CSV_SEP, MIN_QBR_SEASON};
use crate::csv::parse_rows;

/// Dialog outcome: one player, or no player filter at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    Everyone,
    One { first: String, last: String },
}

impl PlayerChoice {
    /// Parse a "First Last" selection: split on the first space and
    /// capitalize both parts. Anything unsplittable means everyone.
    pub fn parse(selection: &str) -> PlayerChoice {
        match selection.split_once(' ') {
            Some((first, last)) if !first.is_empty() && !last.trim().is_empty() => {
                PlayerChoice::One {
                    first: capitalize(first),
                    last: capitalize(last),
                }
            }
            _ => PlayerChoice::Everyone,
        }
    }

    pub fn title(&self) -> String {
        match self {
            PlayerChoice::Everyone => s!("Average QBR vs Temp (All Players)"),
            PlayerChoice::One { first, last } => {
                format!("Average QBR vs Temp - {first} {last}")
            }
        }
    }
}

// Uppercase the first char, lowercase the rest ("griffin III" → "Griffin iii").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => s!(),
    }
}

/// One aggregated scatter point.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketRow {
    pub bucket: i64,   // floor of the 10-degree bucket
    pub avg_qbr: f64,  // rounded to 2 decimals in SQL
    pub games: i64,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS nfl_weather (
    year        INTEGER NOT NULL,
    week        TEXT    NOT NULL,
    team        TEXT    NOT NULL,
    temperature INTEGER
);
CREATE TABLE IF NOT EXISTS weekly_qbr (
    season      INTEGER NOT NULL,
    week_text   TEXT    NOT NULL,
    team        TEXT    NOT NULL,
    first_name  TEXT    NOT NULL,
    last_name   TEXT    NOT NULL,
    qbr_total   REAL
);
";

pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Distinct player names, ordered by last name then first.
    pub fn player_names(&self) -> Result<Vec<(String, String)>, Box<dyn Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT first_name, last_name FROM weekly_qbr
             ORDER BY last_name, first_name",
        )?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }

    /// Average QBR per 10-degree temperature bucket, joined on
    /// (season, week label, team). Games missing a temperature or a QBR
    /// value drop out. Buckets floor correctly below zero: -2° lands in
    /// -10, not 0.
    pub fn qbr_by_temp_bucket(&self, choice: &PlayerChoice) -> Result<Vec<BucketRow>, Box<dyn Error>> {
        let mut query = String::from(
            "SELECT w.temperature - (((w.temperature % 10) + 10) % 10) AS temp_bucket,
                    ROUND(AVG(q.qbr_total), 2) AS avg_qbr,
                    COUNT(*) AS game_count
             FROM weekly_qbr q
             JOIN nfl_weather w
               ON q.season = w.year
              AND q.week_text = w.week
              AND q.team = w.team
             WHERE w.temperature IS NOT NULL
               AND q.qbr_total IS NOT NULL
               AND q.season >= ?",
        );

        let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(MIN_QBR_SEASON)];

        if let PlayerChoice::One { first, last } = choice {
            query.push_str(" AND q.first_name = ? AND q.last_name = ?");
            params.push(Box::new(first.clone()));
            params.push(Box::new(last.clone()));
        }

        query.push_str(" GROUP BY temp_bucket ORDER BY temp_bucket");

        let mut stmt = self.conn.prepare(&query)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], |row| {
            Ok(BucketRow {
                bucket: row.get(0)?,
                avg_qbr: row.get(1)?,
                games: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Load the scraper's CSV into nfl_weather. The temperature cell is a
    /// token like "34°"; its leading signed integer is stored, NULL when
    /// there is none (domes report "Dome" and such).
    pub fn load_weather_csv(&mut self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let text = std::fs::read_to_string(path)?;
        let mut rows = parse_rows(&text, CSV_SEP);

        // Drop the fixed header row if present.
        if rows.first().and_then(|r| r.first()).map(String::as_str) == Some("year") {
            rows.remove(0);
        }

        let tx = self.conn.transaction()?;
        let mut inserted = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO nfl_weather (year, week, team, temperature) VALUES (?, ?, ?, ?)",
            )?;
            for row in &rows {
                if row.len() < 4 {
                    continue;
                }
                let Ok(year) = row[0].parse::<i64>() else { continue };
                stmt.execute(rusqlite::params![year, row[1], row[2], parse_temp(&row[3])])?;
                inserted += 1;
            }
        }
        tx.commit()?;

        logf!("Load: {} weather rows from {}", inserted, path.display());
        Ok(inserted)
    }

    pub fn insert_weather(
        &self,
        year: i64,
        week: &str,
        team: &str,
        temperature: Option<i64>,
    ) -> Result<(), Box<dyn Error>> {
        self.conn.execute(
            "INSERT INTO nfl_weather (year, week, team, temperature) VALUES (?, ?, ?, ?)",
            rusqlite::params![year, week, team, temperature],
        )?;
        Ok(())
    }

    pub fn insert_qbr(
        &self,
        season: i64,
        week_text: &str,
        team: &str,
        first: &str,
        last: &str,
        qbr: Option<f64>,
    ) -> Result<(), Box<dyn Error>> {
        self.conn.execute(
            "INSERT INTO weekly_qbr (season, week_text, team, first_name, last_name, qbr_total)
             VALUES (?, ?, ?, ?, ?, ?)",
            rusqlite::params![season, week_text, team, first, last, qbr],
        )?;
        Ok(())
    }
}

/// Leading signed integer of a temperature token: "34°" → 34, "-2°F" → -2,
/// "Dome" → None.
pub fn parse_temp(token: &str) -> Option<i64> {
    let mut digits = String::new();
    for (i, ch) in token.chars().enumerate() {
        if ch == '-' && i == 0 {
            digits.push(ch);
        } else if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            break;
        }
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_temp_variants() {
        assert_eq!(parse_temp("34°"), Some(34));
        assert_eq!(parse_temp("34°F"), Some(34));
        assert_eq!(parse_temp("-2°"), Some(-2));
        assert_eq!(parse_temp("71"), Some(71));
        assert_eq!(parse_temp("Dome"), None);
        assert_eq!(parse_temp(""), None);
        assert_eq!(parse_temp("-"), None);
    }

    #[test]
    fn choice_parse_capitalizes_both_parts() {
        assert_eq!(
            PlayerChoice::parse("aaron rodgers"),
            PlayerChoice::One { first: s!("Aaron"), last: s!("Rodgers") }
        );
    }

    #[test]
    fn choice_parse_splits_on_first_space_only() {
        // Multi-word surnames keep the remainder as one lowercased tail,
        // matching the dialog's normalization.
        assert_eq!(
            PlayerChoice::parse("Robert Griffin III"),
            PlayerChoice::One { first: s!("Robert"), last: s!("Griffin iii") }
        );
    }

    #[test]
    fn choice_parse_unsplittable_means_everyone() {
        assert_eq!(PlayerChoice::parse("Lamar"), PlayerChoice::Everyone);
        assert_eq!(PlayerChoice::parse(""), PlayerChoice::Everyone);
    }

    #[test]
    fn titles_name_the_selection() {
        assert_eq!(
            PlayerChoice::parse("josh allen").title(),
            "Average QBR vs Temp - Josh Allen"
        );
        assert_eq!(PlayerChoice::Everyone.title(), "Average QBR vs Temp (All Players)");
    }
}
