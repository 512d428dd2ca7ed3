pub mod models;

pub use models::{active_cycle, split_list, ClubInfo, Film, Rating, TeamMember};
