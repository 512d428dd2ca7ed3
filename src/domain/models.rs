use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder used throughout the source data for unknown fields
const NOT_AVAILABLE: &str = "N/A";

/// One member's assessment of one film
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub user: String,
    pub score: Option<f64>,
    #[serde(default)]
    pub blurb: Option<String>,
}

impl Rating {
    /// A rating counts toward aggregates only once it carries a finite score
    pub fn valid_score(&self) -> Option<f64> {
        self.score.filter(|s| s.is_finite())
    }

    pub fn is_by(&self, member_name: &str) -> bool {
        self.user.eq_ignore_ascii_case(member_name)
    }
}

/// Club bookkeeping attached to a film once it has been scheduled or watched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubInfo {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub watch_date: Option<String>,
    #[serde(default)]
    pub club_ratings: Vec<Rating>,
    #[serde(default)]
    pub trophy_info: Option<String>,
    #[serde(default)]
    pub trophy_notes: Option<String>,
}

/// A single movie record from the static films.json asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub writer: String,
    #[serde(default)]
    pub actors: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(rename = "movieClubInfo", default)]
    pub club_info: Option<ClubInfo>,
}

fn minutes_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("valid literal regex"))
}

/// Split a comma-separated field into trimmed tokens, dropping empties and "N/A"
pub fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != NOT_AVAILABLE)
}

impl Film {
    /// First integer found in the runtime string ("142 min" → 142)
    pub fn runtime_minutes(&self) -> Option<u32> {
        minutes_regex()
            .find(&self.runtime)
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Release year parsed from the first 4 characters of the year field
    pub fn release_year(&self) -> Option<i32> {
        let prefix = self.year.get(..4)?;
        prefix.parse::<i32>().ok().filter(|y| *y > 1000)
    }

    pub fn genres(&self) -> impl Iterator<Item = &str> {
        split_list(&self.genre)
    }

    pub fn primary_language(&self) -> Option<&str> {
        split_list(&self.language).next()
    }

    pub fn primary_country(&self) -> Option<&str> {
        split_list(&self.country).next()
    }

    /// The member who picked this film, if the club has scheduled it
    pub fn selector(&self) -> Option<&str> {
        self.club_info.as_ref()?.selector.as_deref()
    }

    pub fn ratings(&self) -> &[Rating] {
        self.club_info
            .as_ref()
            .map(|info| info.club_ratings.as_slice())
            .unwrap_or_default()
    }

    /// Scores that actually carry a numeric value
    pub fn valid_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.ratings().iter().filter_map(Rating::valid_score)
    }

    /// This member's own valid score on the film, matched case-insensitively
    pub fn score_for(&self, member_name: &str) -> Option<f64> {
        self.ratings()
            .iter()
            .find(|r| r.is_by(member_name))
            .and_then(Rating::valid_score)
    }

    pub fn watch_date(&self) -> Option<NaiveDate> {
        let raw = self.club_info.as_ref()?.watch_date.as_deref()?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn is_watched(&self) -> bool {
        self.club_info
            .as_ref()
            .is_some_and(|info| info.watch_date.is_some())
    }
}

/// A club participant from the static members.json asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub queue: Option<i32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl TeamMember {
    /// A positive queue value marks the member as part of the selection cycle
    pub fn is_active(&self) -> bool {
        self.queue.is_some_and(|q| q > 0)
    }
}

/// Active members in selection-cycle order (ascending queue value)
pub fn active_cycle(members: &[TeamMember]) -> Vec<&TeamMember> {
    let mut active: Vec<&TeamMember> = members.iter().filter(|m| m.is_active()).collect();
    active.sort_by_key(|m| m.queue.unwrap_or(i32::MAX));
    active
}
