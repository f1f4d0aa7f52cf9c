// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.nflweather.com";
pub const USER_AGENT: &str = "qbr_weather/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Scrape range
pub const FIRST_SEASON: u16 = 2013;
pub const LAST_SEASON: u16 = 2022;

// The source loop ran `range(1, 17)`, so only weeks 1..16 were ever
// requested. Kept as the default rather than silently bumped to 17;
// override with --weeks.
pub const REGULAR_SEASON_WEEKS: u8 = 16;

// Output
pub const DEFAULT_OUT_FILE: &str = "nfl_weather.csv";
pub const CSV_SEP: char = ',';
pub const WEATHER_HEADERS: [&str; 4] = ["year", "week", "team", "temperature"];

// Database
pub const DEFAULT_DB_FILE: &str = "qbr.db";
pub const MIN_QBR_SEASON: u16 = 2013;

// Logging
pub const LOG_FILE: &str = "qbr_weather.log";
