use crate::domain::Film;

/// Optional predicates combined with logical AND
#[derive(Debug, Clone, Default)]
pub struct FilmFilter {
    /// Case-insensitive substring match against title or director
    pub search: Option<String>,
    /// Exact membership in the film's genre list
    pub genre: Option<String>,
    /// Exact match against the recorded selector
    pub selector: Option<String>,
    /// Keep only films with at least one valid club rating
    pub rated_only: bool,
    /// Keep only films with at least this many valid club ratings
    pub min_ratings: Option<usize>,
    /// Keep only films this member gave a valid score
    pub rated_by: Option<String>,
}

impl FilmFilter {
    pub fn matches(&self, film: &Film) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let in_title = film.title.to_lowercase().contains(&needle);
            let in_director = film.director.to_lowercase().contains(&needle);
            if !in_title && !in_director {
                return false;
            }
        }

        if let Some(genre) = &self.genre {
            if !film.genres().any(|g| g == genre) {
                return false;
            }
        }

        if let Some(selector) = &self.selector {
            if film.selector() != Some(selector.as_str()) {
                return false;
            }
        }

        let valid_ratings = film.valid_scores().count();
        if self.rated_only && valid_ratings == 0 {
            return false;
        }
        if let Some(min) = self.min_ratings {
            if valid_ratings < min {
                return false;
            }
        }

        if let Some(member) = &self.rated_by {
            if film.score_for(member).is_none() {
                return false;
            }
        }

        true
    }
}
