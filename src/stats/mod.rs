pub mod average;
pub mod controversy;
pub mod member;
pub mod ranking;
pub mod selector;

pub use average::{average, round_tenths};
pub use controversy::{find_controversial, ControversialFilm};
pub use member::{calculate_member_stats, GenreCount, MemberStats};
pub use ranking::rank;
pub use selector::identify_current_selector;
