use std::cmp::Ordering;

use chrono::Datelike;

use crate::domain::Film;
use crate::stats::average;
use crate::stats::member::MIN_RATINGS_FOR_CONSENSUS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Year,
    ClubAverage,
    WatchDate,
    /// A specific member's own score, matched case-insensitively
    MemberScore(String),
    /// Max minus min of a film's valid ratings
    ScoreSpread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl SortKey {
    /// Direction a freshly selected sort column starts in
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortKey::Title => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

/// Current sort column and direction, with the toggle behavior of a
/// clickable table header: re-selecting the active column flips direction,
/// selecting a new column resets to that column's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey) -> Self {
        let direction = key.default_direction();
        Self { key, direction }
    }

    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.reversed();
        } else {
            *self = SortState::new(key);
        }
    }
}

/// Sort films in place. Films missing the sort value always land at the
/// end: they stand in as +∞ when ascending and −∞ when descending.
pub fn sort_films(films: &mut [Film], state: &SortState) {
    match &state.key {
        SortKey::Title => films.sort_by(|a, b| {
            let ord = a.title.to_lowercase().cmp(&b.title.to_lowercase());
            apply_direction(ord, state.direction)
        }),
        key => films.sort_by(|a, b| {
            compare_metrics(metric(a, key), metric(b, key), state.direction)
        }),
    }
}

fn metric(film: &Film, key: &SortKey) -> Option<f64> {
    match key {
        SortKey::Title => None,
        SortKey::Year => film.release_year().map(f64::from),
        SortKey::ClubAverage => average(film.ratings()),
        SortKey::WatchDate => film.watch_date().map(|d| f64::from(d.num_days_from_ce())),
        SortKey::MemberScore(name) => film.score_for(name),
        SortKey::ScoreSpread => score_spread(film),
    }
}

fn score_spread(film: &Film) -> Option<f64> {
    let scores: Vec<f64> = film.valid_scores().collect();
    if scores.len() < MIN_RATINGS_FOR_CONSENSUS {
        return None;
    }
    let max = scores.iter().cloned().fold(f64::MIN, f64::max);
    let min = scores.iter().cloned().fold(f64::MAX, f64::min);
    Some(max - min)
}

fn compare_metrics(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    let fill = match direction {
        SortDirection::Ascending => f64::INFINITY,
        SortDirection::Descending => f64::NEG_INFINITY,
    };
    let a = a.unwrap_or(fill);
    let b = b.unwrap_or(fill);
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    apply_direction(ord, direction)
}

fn apply_direction(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClubInfo, Rating};

    fn film(title: &str, year: &str, ratings: Vec<(&str, Option<f64>)>, watch_date: Option<&str>) -> Film {
        Film {
            imdb_id: title.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            genre: "Drama".to_string(),
            country: String::new(),
            language: String::new(),
            runtime: String::new(),
            director: String::new(),
            writer: String::new(),
            actors: String::new(),
            poster: None,
            club_info: Some(ClubInfo {
                selector: None,
                watch_date: watch_date.map(str::to_string),
                club_ratings: ratings
                    .into_iter()
                    .map(|(user, score)| Rating {
                        user: user.to_string(),
                        score,
                        blurb: None,
                    })
                    .collect(),
                trophy_info: None,
                trophy_notes: None,
            }),
        }
    }

    fn titles(films: &[Film]) -> Vec<&str> {
        films.iter().map(|f| f.title.as_str()).collect()
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let mut films = vec![
            film("zodiac", "2007", vec![], None),
            film("Alien", "1979", vec![], None),
            film("Brazil", "1985", vec![], None),
        ];
        sort_films(&mut films, &SortState::new(SortKey::Title));
        assert_eq!(titles(&films), vec!["Alien", "Brazil", "zodiac"]);
    }

    #[test]
    fn test_missing_values_sort_last_in_both_directions() {
        let mut films = vec![
            film("Undated", "2001", vec![], None),
            film("Old", "2001", vec![], Some("2022-01-01")),
            film("New", "2001", vec![], Some("2023-01-01")),
        ];

        let mut state = SortState::new(SortKey::WatchDate);
        sort_films(&mut films, &state);
        assert_eq!(titles(&films), vec!["New", "Old", "Undated"]);

        state.toggle(SortKey::WatchDate);
        sort_films(&mut films, &state);
        assert_eq!(titles(&films), vec!["Old", "New", "Undated"]);
    }

    #[test]
    fn test_toggle_resets_direction_on_new_key() {
        let mut state = SortState::new(SortKey::Year);
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortKey::Year);
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortKey::Title);
        assert_eq!(state.key, SortKey::Title);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_member_score_sort() {
        let mut films = vec![
            film("Low", "2001", vec![("andy", Some(4.0))], None),
            film("High", "2001", vec![("andy", Some(9.0))], None),
            film("Unrated", "2001", vec![], None),
        ];
        let state = SortState::new(SortKey::MemberScore("Andy".to_string()));
        sort_films(&mut films, &state);
        assert_eq!(titles(&films), vec!["High", "Low", "Unrated"]);
    }

    #[test]
    fn test_score_spread_needs_two_valid_ratings() {
        let spread = score_spread(&film(
            "Split",
            "2001",
            vec![("andy", Some(9.0)), ("gabe", Some(4.0)), ("joey", None)],
            None,
        ));
        assert_eq!(spread, Some(5.0));
        assert_eq!(
            score_spread(&film("Solo", "2001", vec![("andy", Some(9.0))], None)),
            None
        );
    }
}
