use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::assets::AssetStore;
use crate::catalog::{filter_and_sort, CatalogView};
use crate::config::settings::AppConfig;
use crate::domain::Film;
use crate::stats::average;

/// Prints the film collection as a table after filtering and sorting
pub struct FilmListService {
    config: AppConfig,
    store: AssetStore,
}

impl FilmListService {
    pub fn new(config: AppConfig) -> Self {
        let store = AssetStore::new(&config.data.data_dir);
        Self { config, store }
    }

    pub fn run(&self, view: &CatalogView) -> Result<()> {
        let films = self.store.load_films()?;
        let selected = filter_and_sort(&films, view);
        info!("{} of {} films match the filter", selected.len(), films.len());

        self.print_header();
        for film in &selected {
            self.print_row(film);
        }
        println!("\n{} films", selected.len());
        Ok(())
    }

    fn print_header(&self) {
        let width = self.config.stats.title_width;
        println!(
            "{:<width$}  {:>4}  {:>4}  {:<10}  {}",
            "Title".bold(),
            "Year".bold(),
            "Avg".bold(),
            "Watched".bold(),
            "Selector".bold(),
        );
    }

    fn print_row(&self, film: &Film) {
        let width = self.config.stats.title_width;
        let title: String = if film.title.chars().count() > width {
            film.title.chars().take(width - 1).chain(std::iter::once('…')).collect()
        } else {
            film.title.clone()
        };

        let avg = average(film.ratings())
            .map(|a| format!("{:.1}", a))
            .unwrap_or_else(|| "—".to_string());
        let watched = film
            .watch_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "—".to_string());

        println!(
            "{:<width$}  {:>4}  {:>4}  {:<10}  {}",
            title,
            film.release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "—".to_string()),
            avg,
            watched,
            film.selector().unwrap_or("—"),
        );
    }
}
