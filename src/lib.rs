pub mod assets;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod services;
pub mod stats;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;

use crate::catalog::{CatalogView, FilmFilter, SortKey, SortState};
use crate::cli::{FilmsArgs, SortColumn};
use crate::config::settings::AppConfig;
use crate::services::{FilmListService, MemberReportService, ScheduleService};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_member(data_dir: &str, name: &str) -> Result<()> {
    let config = AppConfig::with_data_dir(data_dir);
    let service = MemberReportService::new(config);
    service.run(name)
}

pub fn handle_films(data_dir: &str, args: &FilmsArgs) -> Result<()> {
    let config = AppConfig::with_data_dir(data_dir);
    let service = FilmListService::new(config);
    let view = build_view(args)?;
    service.run(&view)
}

pub fn handle_upnext(data_dir: &str) -> Result<()> {
    let config = AppConfig::with_data_dir(data_dir);
    let service = ScheduleService::new(config);
    service.run()
}

fn build_view(args: &FilmsArgs) -> Result<CatalogView> {
    let key = match args.sort {
        SortColumn::Title => SortKey::Title,
        SortColumn::Year => SortKey::Year,
        SortColumn::Average => SortKey::ClubAverage,
        SortColumn::WatchDate => SortKey::WatchDate,
        SortColumn::Score => match &args.rated_by {
            Some(member) => SortKey::MemberScore(member.clone()),
            None => bail!("--sort score needs --rated-by to name whose score to sort on"),
        },
        SortColumn::Spread => SortKey::ScoreSpread,
    };

    let mut sort = SortState::new(key.clone());
    if args.reverse {
        sort.toggle(key);
    }

    Ok(CatalogView {
        filter: FilmFilter {
            search: args.search.clone(),
            genre: args.genre.clone(),
            selector: args.selector.clone(),
            rated_only: args.rated,
            // Spread over a single rating is meaningless, hide those films
            min_ratings: (args.sort == SortColumn::Spread).then_some(2),
            rated_by: args.rated_by.clone(),
        },
        sort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortDirection;

    fn films_args() -> FilmsArgs {
        FilmsArgs {
            search: None,
            genre: None,
            selector: None,
            rated: false,
            rated_by: None,
            sort: SortColumn::Title,
            reverse: false,
        }
    }

    #[test]
    fn test_build_view_defaults() {
        let view = build_view(&films_args()).unwrap();
        assert_eq!(view.sort.key, SortKey::Title);
        assert_eq!(view.sort.direction, SortDirection::Ascending);
        assert_eq!(view.filter.min_ratings, None);
    }

    #[test]
    fn test_reverse_flips_default_direction() {
        let args = FilmsArgs {
            sort: SortColumn::Year,
            reverse: true,
            ..films_args()
        };
        let view = build_view(&args).unwrap();
        assert_eq!(view.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_spread_sort_requires_consensus_films() {
        let args = FilmsArgs {
            sort: SortColumn::Spread,
            ..films_args()
        };
        let view = build_view(&args).unwrap();
        assert_eq!(view.filter.min_ratings, Some(2));
    }

    #[test]
    fn test_score_sort_requires_rated_by() {
        let args = FilmsArgs {
            sort: SortColumn::Score,
            ..films_args()
        };
        assert!(build_view(&args).is_err());
    }
}
