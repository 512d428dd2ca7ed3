use log::warn;

use crate::domain::{active_cycle, Film, TeamMember};

/// Work out whose turn it is to pick the next film.
///
/// Decision chain: an explicit up-next film's selector wins if they are in
/// the active cycle; otherwise advance the cycle one step past whoever
/// selected the most recently watched film; otherwise fall back to the head
/// of the cycle. None only when there is no active member at all.
pub fn identify_current_selector(
    up_next: Option<&Film>,
    members: &[TeamMember],
    all_films: &[Film],
) -> Option<String> {
    let cycle = active_cycle(members);
    if cycle.is_empty() {
        warn!("No active members in the selection cycle, cannot identify a selector");
        return None;
    }

    if let Some(film) = up_next {
        if let Some(selector) = film.selector() {
            if let Some(member) = find_member(&cycle, selector) {
                return Some(member.name.clone());
            }
            warn!(
                "Up-next film '{}' names selector '{}' who is not an active member",
                film.title, selector
            );
        }
    }

    if let Some(film) = last_watched(all_films) {
        if let Some(selector) = film.selector() {
            if let Some(position) = cycle
                .iter()
                .position(|m| m.name.eq_ignore_ascii_case(selector))
            {
                let next = cycle[(position + 1) % cycle.len()];
                return Some(next.name.clone());
            }
            warn!(
                "Last watched film '{}' has selector '{}' outside the active cycle, defaulting to cycle start",
                film.title, selector
            );
        } else {
            warn!(
                "Last watched film '{}' has no recorded selector, defaulting to cycle start",
                film.title
            );
        }
    } else {
        warn!("No watched films found, defaulting to cycle start");
    }

    Some(cycle[0].name.clone())
}

fn find_member<'a>(cycle: &[&'a TeamMember], name: &str) -> Option<&'a TeamMember> {
    cycle
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .copied()
}

/// Most recently watched film by parsed watch date
fn last_watched(films: &[Film]) -> Option<&Film> {
    films
        .iter()
        .filter(|f| f.watch_date().is_some())
        .max_by_key(|f| f.watch_date())
}
