use anyhow::{anyhow, Result};
use colored::Colorize;
use log::info;

use crate::assets::AssetStore;
use crate::config::settings::AppConfig;
use crate::domain::{Film, TeamMember};
use crate::stats::{calculate_member_stats, find_controversial, rank, round_tenths, MemberStats};

/// Prints one member's statistics profile, each metric with its rank
/// across the whole club
pub struct MemberReportService {
    config: AppConfig,
    store: AssetStore,
}

impl MemberReportService {
    pub fn new(config: AppConfig) -> Self {
        let store = AssetStore::new(&config.data.data_dir);
        Self { config, store }
    }

    pub fn run(&self, member_name: &str) -> Result<()> {
        let films = self.store.load_films()?;
        let members = self.store.load_members()?;

        let member = members
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(member_name))
            .ok_or_else(|| anyhow!("No member named '{}'", member_name))?;

        info!(
            "Computing statistics for {} over {} films",
            member.name,
            films.len()
        );

        let stats = calculate_member_stats(&member.name, &films);
        let club_stats: Vec<MemberStats> = members
            .iter()
            .map(|m| calculate_member_stats(&m.name, &films))
            .collect();

        self.print_profile(member, &stats, &club_stats);
        self.print_controversial(member, &films);
        Ok(())
    }

    fn print_profile(&self, member: &TeamMember, stats: &MemberStats, club: &[MemberStats]) {
        println!("\n{}", member.name.bold().cyan());

        let selections = Some(stats.total_selections as f64);
        let all_selections: Vec<Option<f64>> =
            club.iter().map(|s| Some(s.total_selections as f64)).collect();
        println!(
            "  Selections           {:>8}  {}",
            stats.total_selections,
            rank_label(rank(selections, &all_selections, true))
        );

        self.print_metric(
            "Total runtime",
            stats.total_runtime.map(f64::from),
            column(club, |s| s.total_runtime.map(f64::from)),
            true,
            " min",
        );
        self.print_metric(
            "Avg runtime",
            stats.avg_runtime,
            column(club, |s| s.avg_runtime),
            true,
            " min",
        );
        self.print_metric(
            "Avg selected score",
            stats.avg_selected_score,
            column(club, |s| s.avg_selected_score),
            true,
            "",
        );
        self.print_metric(
            "Avg given score",
            stats.avg_given_score,
            column(club, |s| s.avg_given_score),
            true,
            "",
        );
        self.print_metric(
            "Score divergence",
            stats.avg_divergence,
            column(club, |s| s.avg_divergence),
            true,
            "",
        );
        // Low absolute divergence means voting with the room
        self.print_metric(
            "Abs. divergence",
            stats.avg_absolute_divergence,
            column(club, |s| s.avg_absolute_divergence),
            false,
            "",
        );
        self.print_metric(
            "Country diversity",
            stats.country_diversity_percentage,
            column(club, |s| s.country_diversity_percentage),
            true,
            "%",
        );
        self.print_metric(
            "Avg selection year",
            stats.avg_selection_year,
            column(club, |s| s.avg_selection_year),
            true,
            "",
        );

        if let (Some(languages), Some(countries)) = (stats.language_count, stats.country_count) {
            println!("  Languages / countries {:>7}", format!("{} / {}", languages, countries));
        }

        if !stats.top_genres.is_empty() {
            let genres: Vec<String> = stats
                .top_genres
                .iter()
                .map(|g| format!("{} ({})", g.genre, g.count))
                .collect();
            println!("  Top genres           {}", genres.join(", ").yellow());
        }
    }

    fn print_metric(
        &self,
        label: &str,
        value: Option<f64>,
        all_values: Vec<Option<f64>>,
        higher_is_better: bool,
        unit: &str,
    ) {
        let rendered = match value {
            Some(v) => format!("{:.1}{}", round_tenths(v), unit),
            None => "—".to_string(),
        };
        println!(
            "  {:<20} {:>8}  {}",
            label,
            rendered,
            rank_label(rank(value, &all_values, higher_is_better))
        );
    }

    fn print_controversial(&self, member: &TeamMember, films: &[Film]) {
        let mut picks = find_controversial(&member.name, films);
        picks.truncate(self.config.stats.controversial_limit);
        if picks.is_empty() {
            return;
        }

        println!("\n  {}", "Most controversial takes".bold());
        for pick in &picks {
            let date = pick
                .watch_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unwatched".to_string());
            println!(
                "    {} ({})  scored {:.1} vs {:.1} ({:+.1})",
                pick.title.green(),
                date,
                pick.user_score,
                round_tenths(pick.others_avg_score),
                pick.divergence
            );
        }
    }
}

fn column<F>(club: &[MemberStats], extract: F) -> Vec<Option<f64>>
where
    F: Fn(&MemberStats) -> Option<f64>,
{
    club.iter().map(extract).collect()
}

fn rank_label(rank: Option<String>) -> String {
    match rank {
        Some(r) => format!("rank {}", r),
        None => String::new(),
    }
}
