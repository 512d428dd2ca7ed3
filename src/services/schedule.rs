use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::assets::AssetStore;
use crate::config::settings::AppConfig;
use crate::domain::Film;
use crate::stats::identify_current_selector;

/// Reports whose turn it is to pick, and the scheduled film if one exists
pub struct ScheduleService {
    store: AssetStore,
}

impl ScheduleService {
    pub fn new(config: AppConfig) -> Self {
        let store = AssetStore::new(&config.data.data_dir);
        Self { store }
    }

    pub fn run(&self) -> Result<()> {
        let films = self.store.load_films()?;
        let members = self.store.load_members()?;

        let up_next = find_up_next(&films);
        if let Some(film) = up_next {
            info!("Found scheduled film '{}'", film.title);
        }

        match identify_current_selector(up_next, &members, &films) {
            Some(name) => {
                println!("Next selection: {}", name.bold().cyan());
                if let Some(film) = up_next {
                    println!("Scheduled film: {}", film.title.green());
                }
            }
            None => println!("No active members in the selection cycle"),
        }
        Ok(())
    }
}

/// A film already assigned a selector but not yet watched
fn find_up_next(films: &[Film]) -> Option<&Film> {
    films
        .iter()
        .find(|f| !f.is_watched() && f.selector().is_some())
}
