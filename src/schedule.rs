// src/schedule.rs
//
// Canonical week enumeration. The weather rows and the QBR fact table are
// joined on the week label string, so the slug → label mapping here is the
// single source of truth for that key.

/// One scrapeable week of an NFL season.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Week {
    Regular(u8),
    WildCard,
    Divisional,
    ConferenceChampionship,
    SuperBowl,
}

impl Week {
    /// URL path segment as nflweather.com spells it.
    pub fn slug(&self) -> String {
        match self {
            Week::Regular(n) => format!("week-{n}"),
            Week::WildCard => s!("wildcard-weekend"),
            Week::Divisional => s!("divisional-playoffs"),
            Week::ConferenceChampionship => s!("conf-championships"),
            Week::SuperBowl => s!("superbowl"),
        }
    }

    /// Display label, also the join key against the QBR table's week_text.
    pub fn label(&self) -> String {
        match self {
            Week::Regular(n) => format!("Week {n}"),
            Week::WildCard => s!("Wild Card"),
            Week::Divisional => s!("Divisional Round"),
            Week::ConferenceChampionship => s!("Conference Championship"),
            Week::SuperBowl => s!("Super Bowl"),
        }
    }

    pub fn url_path(&self, year: u16) -> String {
        format!("/week/{}/{}", year, self.slug())
    }
}

/// All weeks requested for one season, in request order: regular weeks
/// first, then the four playoff rounds.
pub fn season_weeks(last_regular: u8, playoffs: bool) -> Vec<Week> {
    let mut weeks: Vec<Week> = (1..=last_regular).map(Week::Regular).collect();
    if playoffs {
        weeks.push(Week::WildCard);
        weeks.push(Week::Divisional);
        weeks.push(Week::ConferenceChampionship);
        weeks.push(Week::SuperBowl);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_week_url_and_label() {
        let w = Week::Regular(3);
        assert_eq!(w.url_path(2019), "/week/2019/week-3");
        assert_eq!(w.label(), "Week 3");
    }

    #[test]
    fn playoff_slugs_map_to_display_names() {
        let cases = [
            (Week::WildCard, "wildcard-weekend", "Wild Card"),
            (Week::Divisional, "divisional-playoffs", "Divisional Round"),
            (Week::ConferenceChampionship, "conf-championships", "Conference Championship"),
            (Week::SuperBowl, "superbowl", "Super Bowl"),
        ];
        for (week, slug, label) in cases {
            assert_eq!(week.slug(), slug);
            assert_eq!(week.label(), label);
            assert_eq!(week.url_path(2013), format!("/week/2013/{slug}"));
        }
    }

    #[test]
    fn season_weeks_default_bound_requests_sixteen_regular_weeks() {
        let weeks = season_weeks(crate::config::consts::REGULAR_SEASON_WEEKS, true);
        assert_eq!(weeks.len(), 20);
        assert_eq!(weeks[0], Week::Regular(1));
        assert_eq!(weeks[15], Week::Regular(16));
        assert_eq!(weeks[16], Week::WildCard);
        assert_eq!(weeks[19], Week::SuperBowl);
    }

    #[test]
    fn season_weeks_can_skip_playoffs() {
        let weeks = season_weeks(2, false);
        assert_eq!(weeks, vec![Week::Regular(1), Week::Regular(2)]);
    }
}
