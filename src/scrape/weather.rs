// src/scrape/weather.rs

use crate::core::html::{find_class_blocks, first_class_block, has_class, next_tag_block_ci, text_of};
use crate::core::sanitize::first_token;

/// One parsed game box: both team names and the shared temperature text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameWeather {
    pub team1: String,
    pub team2: String,
    pub temperature: String,
}

/// Given one week page, produce zero or more game records. The driving
/// loop only sees this capability, so the site-specific markup logic can
/// be swapped or mocked without touching it.
pub trait WeekParser {
    fn parse(&self, doc: &str) -> Vec<GameWeather>;
}

/// nflweather.com markup, circa the 2022 redesign: games live in
/// `div.game-box`, team names in `span.fw-bold` (away carries `ms-1`),
/// the weather line in the first span under `div.mx-2`.
pub struct GameBoxParser;

impl WeekParser for GameBoxParser {
    fn parse(&self, doc: &str) -> Vec<GameWeather> {
        parse_doc(doc)
    }
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str) -> Vec<GameWeather> {
    let mut out = Vec::new();

    for game in find_class_blocks(doc, "div", "game-box") {
        let weather = first_class_block(game, "div", "mx-2")
            .and_then(|wdiv| next_tag_block_ci(wdiv, "<span", "</span>", 0).map(|(s, e)| &wdiv[s..e]))
            .map(text_of);

        let spans = find_class_blocks(game, "span", "fw-bold");
        let team1 = spans.iter().find(|sp| !has_class(sp, "ms-1")).map(|sp| text_of(sp));
        let team2 = spans.iter().find(|sp| has_class(sp, "ms-1")).map(|sp| text_of(sp));

        // Any missing element skips the game, no row and no error.
        if let (Some(weather), Some(team1), Some(team2)) = (weather, team1, team2) {
            out.push(GameWeather {
                team1,
                team2,
                temperature: first_token(&weather),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_box(team1: &str, team2: &str, weather: &str) -> String {
        format!(
            r#"<div class="game-box">
                 <div class="d-flex">
                   <span class="fw-bold">{team1}</span>
                   <span class="fw-bold ms-1">{team2}</span>
                 </div>
                 <div class="mx-2"><span>{weather}</span></div>
               </div>"#
        )
    }

    #[test]
    fn parses_one_game() {
        let doc = game_box("Packers", "Bears", "34°F Fair");
        let games = parse_doc(&doc);
        assert_eq!(
            games,
            vec![GameWeather {
                team1: s!("Packers"),
                team2: s!("Bears"),
                temperature: s!("34°F"),
            }]
        );
    }

    #[test]
    fn temperature_is_first_token_only() {
        let doc = game_box("Bills", "Jets", "12° Snow 15mph wind");
        assert_eq!(parse_doc(&doc)[0].temperature, "12°");
    }

    #[test]
    fn parses_games_in_document_order() {
        let doc = join!(
            game_box("Packers", "Bears", "34° Fair"),
            &game_box("Chiefs", "Raiders", "71° Clear"),
        );
        let games = parse_doc(&doc);
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].team1, "Packers");
        assert_eq!(games[1].team1, "Chiefs");
    }

    #[test]
    fn missing_weather_span_skips_game() {
        let doc = r#"<div class="game-box">
            <span class="fw-bold">Packers</span>
            <span class="fw-bold ms-1">Bears</span>
        </div>"#;
        assert!(parse_doc(doc).is_empty());
    }

    #[test]
    fn missing_second_team_skips_game() {
        let doc = r#"<div class="game-box">
            <span class="fw-bold">Packers</span>
            <div class="mx-2"><span>34°</span></div>
        </div>"#;
        assert!(parse_doc(doc).is_empty());
    }

    #[test]
    fn one_bad_box_does_not_poison_the_rest() {
        let bad = r#"<div class="game-box"><span class="fw-bold">Lions</span></div>"#;
        let doc = join!(bad, &game_box("Chiefs", "Raiders", "71° Clear"));
        let games = parse_doc(&doc);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].team1, "Chiefs");
    }

    #[test]
    fn no_game_boxes_yields_no_games() {
        assert!(parse_doc("<html><body><p>offseason</p></body></html>").is_empty());
    }
}
