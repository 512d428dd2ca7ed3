use chrono::NaiveDate;

use crate::domain::Film;

use super::member::{score_against_others, MIN_RATINGS_FOR_CONSENSUS};

/// A film on which the queried member was the single most divergent rater
#[derive(Debug, Clone, PartialEq)]
pub struct ControversialFilm {
    pub imdb_id: String,
    pub title: String,
    pub poster: Option<String>,
    pub watch_date: Option<NaiveDate>,
    pub user_score: f64,
    pub others_avg_score: f64,
    pub divergence: f64,
}

/// Find the films where this member's score strayed furthest from the rest
/// of the club.
///
/// Each film with at least 2 valid ratings is attributed to exactly one
/// member: whoever holds the maximum absolute divergence from the other
/// raters. An exact tie goes to the earlier entry in clubRatings order.
/// Results are sorted by absolute divergence, then watch date, descending.
pub fn find_controversial(member_name: &str, films: &[Film]) -> Vec<ControversialFilm> {
    let mut results: Vec<ControversialFilm> = films
        .iter()
        .filter(|f| f.valid_scores().count() >= MIN_RATINGS_FOR_CONSENSUS)
        .filter_map(|f| most_divergent_rater(f))
        .filter(|(rater, _)| rater.eq_ignore_ascii_case(member_name))
        .map(|(_, entry)| entry)
        .collect();

    results.sort_by(|a, b| {
        b.divergence
            .abs()
            .partial_cmp(&a.divergence.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.watch_date.cmp(&a.watch_date))
    });
    results
}

/// The rater with the greatest absolute divergence on this film, with the
/// strict comparison keeping the first-encountered rater on exact ties
fn most_divergent_rater(film: &Film) -> Option<(String, ControversialFilm)> {
    let mut best: Option<(String, f64, f64)> = None;

    for rating in film.ratings() {
        if rating.valid_score().is_none() {
            continue;
        }
        let Some((own, others_avg)) = score_against_others(film, &rating.user) else {
            continue;
        };
        let divergence = own - others_avg;
        let is_new_best = best
            .as_ref()
            .map(|(_, prev_own, prev_others)| divergence.abs() > (prev_own - prev_others).abs())
            .unwrap_or(true);
        if is_new_best {
            best = Some((rating.user.clone(), own, others_avg));
        }
    }

    let (rater, user_score, others_avg) = best?;
    let divergence = user_score - others_avg;
    Some((
        rater,
        ControversialFilm {
            imdb_id: film.imdb_id.clone(),
            title: film.title.clone(),
            poster: film.poster.clone(),
            watch_date: film.watch_date(),
            user_score,
            others_avg_score: others_avg,
            divergence,
        },
    ))
}
