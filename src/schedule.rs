//! Season and game-number ranges for the NHL regular season.

use crate::constants::schedule::{
    EXPANDED_LEAGUE_FIRST_SEASON, GAMES_BEFORE_EXPANSION, GAMES_SINCE_EXPANSION,
    REGULAR_SEASON_GAME_TYPE, SEASON_START_MONTH,
};
use crate::error::AppError;
use chrono::{Datelike, Local, NaiveDate};

/// One regular season, identified by the year it starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    pub start_year: i32,
    pub max_games: u32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self {
            start_year,
            max_games: max_games_for_season(start_year),
        }
    }

    pub fn game_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.max_games
    }

    pub fn game_id(&self, game_number: u32) -> String {
        game_id(self.start_year, game_number)
    }
}

/// Regular-season game count: 1230 before the 2017 expansion, 1271 after.
pub fn max_games_for_season(start_year: i32) -> u32 {
    if start_year < EXPANDED_LEAGUE_FIRST_SEASON {
        GAMES_BEFORE_EXPANSION
    } else {
        GAMES_SINCE_EXPANSION
    }
}

/// Builds the API game identifier, e.g. `2019020042`.
pub fn game_id(season: i32, game_number: u32) -> String {
    format!("{season}{REGULAR_SEASON_GAME_TYPE}{game_number:04}")
}

/// The start year of the latest season that has begun on `today`.
/// Seasons start in September, so before that the previous year's season
/// is still the current one.
pub fn last_season_start_year(today: NaiveDate) -> i32 {
    if today.month() >= SEASON_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Every season from `start` through the current one.
pub fn seasons_from(start: i32) -> Result<Vec<Season>, AppError> {
    seasons_from_with_date(start, Local::now().date_naive())
}

/// Like [`seasons_from`], with an explicit current date for testing.
pub fn seasons_from_with_date(start: i32, today: NaiveDate) -> Result<Vec<Season>, AppError> {
    let last = last_season_start_year(today);
    if start > last {
        return Err(AppError::config_error(format!(
            "Season {start} has not started yet (latest season is {last})"
        )));
    }
    Ok((start..=last).map(Season::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_max_games_boundary() {
        assert_eq!(max_games_for_season(2010), 1230);
        assert_eq!(max_games_for_season(2016), 1230);
        assert_eq!(max_games_for_season(2017), 1271);
        assert_eq!(max_games_for_season(2023), 1271);
    }

    #[test]
    fn test_game_id_format() {
        assert_eq!(game_id(2019, 1), "2019020001");
        assert_eq!(game_id(2016, 1230), "2016021230");
        assert_eq!(Season::new(2018).game_id(42), "2018020042");
    }

    #[test]
    fn test_game_numbers_cover_full_season() {
        let season = Season::new(2015);
        let numbers: Vec<u32> = season.game_numbers().collect();
        assert_eq!(numbers.len(), 1230);
        assert_eq!(numbers.first(), Some(&1));
        assert_eq!(numbers.last(), Some(&1230));
    }

    #[test]
    fn test_last_season_before_and_after_september() {
        assert_eq!(last_season_start_year(date(2024, 8, 31)), 2023);
        assert_eq!(last_season_start_year(date(2024, 9, 1)), 2024);
        assert_eq!(last_season_start_year(date(2024, 1, 15)), 2023);
        assert_eq!(last_season_start_year(date(2024, 12, 31)), 2024);
    }

    #[test]
    fn test_seasons_from_includes_in_progress_season() {
        let seasons = seasons_from_with_date(2016, date(2018, 10, 5)).unwrap();
        let years: Vec<i32> = seasons.iter().map(|s| s.start_year).collect();
        assert_eq!(years, vec![2016, 2017, 2018]);
        assert_eq!(seasons[0].max_games, 1230);
        assert_eq!(seasons[1].max_games, 1271);
    }

    #[test]
    fn test_seasons_from_spring_stops_at_previous_year() {
        let seasons = seasons_from_with_date(2016, date(2018, 3, 1)).unwrap();
        assert_eq!(seasons.last().map(|s| s.start_year), Some(2017));
    }

    #[test]
    fn test_future_start_season_is_rejected() {
        let result = seasons_from_with_date(2025, date(2024, 10, 1));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
