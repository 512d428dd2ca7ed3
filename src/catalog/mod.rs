pub mod filter;
pub mod sort;

pub use filter::FilmFilter;
pub use sort::{sort_films, SortDirection, SortKey, SortState};

use crate::domain::Film;

/// Filter configuration plus the active sort column
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub filter: FilmFilter,
    pub sort: SortState,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            filter: FilmFilter::default(),
            sort: SortState::new(SortKey::Title),
        }
    }
}

/// Apply the filter predicates, then sort the surviving films
pub fn filter_and_sort(films: &[Film], view: &CatalogView) -> Vec<Film> {
    let mut selected: Vec<Film> = films
        .iter()
        .filter(|f| view.filter.matches(f))
        .cloned()
        .collect();
    sort_films(&mut selected, &view.sort);
    selected
}
