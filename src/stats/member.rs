use crate::domain::{Film, Rating};

use super::average::{average, mean};

/// Films with fewer valid ratings than this have no meaningful club consensus
pub const MIN_RATINGS_FOR_CONSENSUS: usize = 2;

/// How many genres a member profile surfaces
const TOP_GENRES: usize = 3;

/// Occurrence count for one genre token among a member's selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Derived profile of one member over the whole film collection.
///
/// Every metric is None when no data supports it; `total_selections` is the
/// one exception, a plain count that may legitimately be 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStats {
    pub total_selections: usize,
    pub total_runtime: Option<u32>,
    pub avg_runtime: Option<f64>,
    pub top_genres: Vec<GenreCount>,
    pub avg_selected_score: Option<f64>,
    pub avg_given_score: Option<f64>,
    pub avg_divergence: Option<f64>,
    pub avg_absolute_divergence: Option<f64>,
    pub language_count: Option<usize>,
    pub country_count: Option<usize>,
    pub country_diversity_percentage: Option<f64>,
    pub avg_selection_year: Option<f64>,
}

/// Compute a member's full statistics profile.
///
/// Selections are matched case-sensitively against `ClubInfo.selector`;
/// the member's own ratings are matched case-insensitively against
/// `Rating.user` (the data mixes display names and lowercase handles).
pub fn calculate_member_stats(member_name: &str, films: &[Film]) -> MemberStats {
    let selections: Vec<&Film> = films
        .iter()
        .filter(|f| f.selector() == Some(member_name))
        .collect();

    let (total_runtime, avg_runtime) = runtime_totals(&selections);
    let (avg_divergence, avg_absolute_divergence) = divergence_averages(member_name, films);

    MemberStats {
        total_selections: selections.len(),
        total_runtime,
        avg_runtime,
        top_genres: top_genres(&selections),
        avg_selected_score: avg_selected_score(&selections),
        avg_given_score: avg_given_score(member_name, films),
        avg_divergence,
        avg_absolute_divergence,
        language_count: distinct_count(&selections, |f| f.primary_language()),
        country_count: distinct_count(&selections, |f| f.primary_country()),
        country_diversity_percentage: country_diversity(&selections),
        avg_selection_year: avg_selection_year(&selections),
    }
}

/// A rater's valid score on a film alongside the mean score of all other
/// valid raters, when both sides exist
pub(crate) fn score_against_others(film: &Film, rater_name: &str) -> Option<(f64, f64)> {
    let own = film.score_for(rater_name)?;
    let others: Vec<f64> = film
        .ratings()
        .iter()
        .filter(|r| !r.is_by(rater_name))
        .filter_map(Rating::valid_score)
        .collect();
    mean(&others).map(|others_avg| (own, others_avg))
}

fn runtime_totals(selections: &[&Film]) -> (Option<u32>, Option<f64>) {
    let minutes: Vec<u32> = selections
        .iter()
        .filter_map(|f| f.runtime_minutes())
        .collect();
    if minutes.is_empty() {
        return (None, None);
    }
    let total: u32 = minutes.iter().sum();
    (Some(total), Some(f64::from(total) / minutes.len() as f64))
}

fn top_genres(selections: &[&Film]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for film in selections {
        for genre in film.genres() {
            match counts.iter_mut().find(|c| c.genre == genre) {
                Some(entry) => entry.count += 1,
                None => counts.push(GenreCount {
                    genre: genre.to_string(),
                    count: 1,
                }),
            }
        }
    }
    // Stable sort keeps first-encountered order for equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_GENRES);
    counts
}

/// Mean of the club averages across selections that reached consensus
/// (at least 2 valid individual ratings)
fn avg_selected_score(selections: &[&Film]) -> Option<f64> {
    let averages: Vec<f64> = selections
        .iter()
        .filter(|f| f.valid_scores().count() >= MIN_RATINGS_FOR_CONSENSUS)
        .filter_map(|f| average(f.ratings()))
        .collect();
    mean(&averages)
}

/// Mean of every valid score this member handed out, across all films
fn avg_given_score(member_name: &str, films: &[Film]) -> Option<f64> {
    let given: Vec<f64> = films.iter().filter_map(|f| f.score_for(member_name)).collect();
    mean(&given)
}

/// Signed and absolute divergence from the rest of the group, averaged over
/// every film where the member and at least one other member scored
fn divergence_averages(member_name: &str, films: &[Film]) -> (Option<f64>, Option<f64>) {
    let divergences: Vec<f64> = films
        .iter()
        .filter_map(|f| score_against_others(f, member_name))
        .map(|(own, others_avg)| own - others_avg)
        .collect();
    let absolute: Vec<f64> = divergences.iter().map(|d| d.abs()).collect();
    (mean(&divergences), mean(&absolute))
}

fn distinct_count<'a, F>(selections: &[&'a Film], key: F) -> Option<usize>
where
    F: Fn(&'a Film) -> Option<&'a str>,
{
    if selections.is_empty() {
        return None;
    }
    let mut seen: Vec<&str> = Vec::new();
    for &film in selections {
        if let Some(value) = key(film) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
    }
    Some(seen.len())
}

fn country_diversity(selections: &[&Film]) -> Option<f64> {
    let countries = distinct_count(selections, |f| f.primary_country())?;
    Some(countries as f64 / selections.len() as f64 * 100.0)
}

fn avg_selection_year(selections: &[&Film]) -> Option<f64> {
    let years: Vec<f64> = selections
        .iter()
        .filter_map(|f| f.release_year())
        .map(f64::from)
        .collect();
    mean(&years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClubInfo;

    fn rating(user: &str, score: Option<f64>) -> Rating {
        Rating {
            user: user.to_string(),
            score,
            blurb: None,
        }
    }

    fn film(id: &str, selector: Option<&str>, ratings: Vec<Rating>) -> Film {
        Film {
            imdb_id: id.to_string(),
            title: id.to_string(),
            year: "2000".to_string(),
            genre: "Drama".to_string(),
            country: "USA".to_string(),
            language: "English".to_string(),
            runtime: "100 min".to_string(),
            director: "Someone".to_string(),
            writer: String::new(),
            actors: String::new(),
            poster: None,
            club_info: Some(ClubInfo {
                selector: selector.map(str::to_string),
                watch_date: Some("2023-01-01".to_string()),
                club_ratings: ratings,
                trophy_info: None,
                trophy_notes: None,
            }),
        }
    }

    #[test]
    fn test_no_selections_yields_nulls_not_zeroes() {
        let films = vec![film("tt1", Some("Gabe"), vec![])];
        let stats = calculate_member_stats("Andy", &films);

        assert_eq!(stats.total_selections, 0);
        assert_eq!(stats.total_runtime, None);
        assert_eq!(stats.avg_runtime, None);
        assert!(stats.top_genres.is_empty());
        assert_eq!(stats.avg_selected_score, None);
        assert_eq!(stats.avg_given_score, None);
        assert_eq!(stats.avg_divergence, None);
        assert_eq!(stats.language_count, None);
        assert_eq!(stats.country_count, None);
        assert_eq!(stats.country_diversity_percentage, None);
        assert_eq!(stats.avg_selection_year, None);
    }

    #[test]
    fn test_selector_match_is_case_sensitive() {
        let films = vec![film("tt1", Some("andy"), vec![])];
        assert_eq!(calculate_member_stats("Andy", &films).total_selections, 0);
        assert_eq!(calculate_member_stats("andy", &films).total_selections, 1);
    }

    #[test]
    fn test_given_score_match_is_case_insensitive() {
        let films = vec![film("tt1", None, vec![rating("andy", Some(7.0))])];
        let stats = calculate_member_stats("Andy", &films);
        assert_eq!(stats.avg_given_score, Some(7.0));
    }

    #[test]
    fn test_selected_score_requires_two_valid_ratings() {
        let films = vec![
            // Only one valid rating, contributes nothing
            film("tt1", Some("Andy"), vec![rating("andy", Some(9.0))]),
            film(
                "tt2",
                Some("Andy"),
                vec![rating("andy", Some(6.0)), rating("gabe", Some(8.0))],
            ),
        ];
        let stats = calculate_member_stats("Andy", &films);
        assert_eq!(stats.avg_selected_score, Some(7.0));
    }

    #[test]
    fn test_divergence_antisymmetry_for_two_raters() {
        let films = vec![film(
            "tt1",
            None,
            vec![rating("andy", Some(9.0)), rating("gabe", Some(5.0))],
        )];
        let andy = calculate_member_stats("Andy", &films);
        let gabe = calculate_member_stats("Gabe", &films);
        assert_eq!(andy.avg_divergence, Some(4.0));
        assert_eq!(gabe.avg_divergence, Some(-4.0));
        assert_eq!(andy.avg_absolute_divergence, gabe.avg_absolute_divergence);
    }

    #[test]
    fn test_sole_rater_contributes_no_divergence() {
        let films = vec![film("tt1", None, vec![rating("andy", Some(9.0))])];
        let stats = calculate_member_stats("Andy", &films);
        assert_eq!(stats.avg_given_score, Some(9.0));
        assert_eq!(stats.avg_divergence, None);
        assert_eq!(stats.avg_absolute_divergence, None);
    }

    #[test]
    fn test_top_genres_ties_keep_first_encountered_order() {
        let mut first = film("tt1", Some("Andy"), vec![]);
        first.genre = "Horror, Comedy".to_string();
        let mut second = film("tt2", Some("Andy"), vec![]);
        second.genre = "Comedy, Horror, Drama".to_string();

        let stats = calculate_member_stats("Andy", &[first, second]);
        let genres: Vec<&str> = stats.top_genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(genres, vec!["Horror", "Comedy", "Drama"]);
        assert_eq!(stats.top_genres[0].count, 2);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let films = vec![
            film(
                "tt1",
                Some("Andy"),
                vec![rating("andy", Some(8.0)), rating("gabe", Some(7.0))],
            ),
            film("tt2", Some("Gabe"), vec![rating("andy", Some(5.0))]),
        ];
        assert_eq!(
            calculate_member_stats("Andy", &films),
            calculate_member_stats("Andy", &films)
        );
    }

    #[test]
    fn test_runtime_and_diversity_aggregates() {
        let mut a = film("tt1", Some("Andy"), vec![]);
        a.runtime = "90 min".to_string();
        a.country = "USA, UK".to_string();
        let mut b = film("tt2", Some("Andy"), vec![]);
        b.runtime = "N/A".to_string();
        b.country = "France".to_string();

        let stats = calculate_member_stats("Andy", &[a, b]);
        // Unparseable runtime excluded from numerator and denominator
        assert_eq!(stats.total_runtime, Some(90));
        assert_eq!(stats.avg_runtime, Some(90.0));
        assert_eq!(stats.country_count, Some(2));
        assert_eq!(stats.country_diversity_percentage, Some(100.0));
        assert_eq!(stats.avg_selection_year, Some(2000.0));
    }
}
