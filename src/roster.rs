//! The built-in team roster
//!
//! The scoreboard plays with a fixed set of teams created once at game
//! start. Resetting the game rebuilds this roster from scratch, which is
//! also how every score returns to zero.

use crate::team::{Team, TeamId};

/// Names and display tokens of the built-in teams, in roster order
const INITIAL_TEAMS: [(u32, &str, &str); 5] = [
    (1, "Chennai Super Kings", "bg-yellow-400"),
    (2, "Mumbai Indians", "bg-blue-600"),
    (3, "Royal Challengers Bangalore", "bg-red-600"),
    (4, "Kolkata Knight Riders", "bg-purple-700"),
    (5, "Rajasthan Royals", "bg-pink-500"),
];

/// Builds the initial roster with all scores at zero
///
/// The order of the returned teams is significant: it is the tie-break
/// order used when the final standings are computed.
pub fn initial_roster() -> Vec<Team> {
    INITIAL_TEAMS
        .into_iter()
        .map(|(id, name, color)| Team::new(TeamId::new(id), name, color))
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_roster_shape() {
        let roster = initial_roster();
        assert_eq!(roster.len(), 5);
        assert!(roster.iter().all(|team| team.score == 0));
        assert!(roster.iter().all(|team| !team.name.trim().is_empty()));
    }

    #[test]
    fn test_roster_ids_are_unique() {
        let roster = initial_roster();
        let ids: HashSet<_> = roster.iter().map(|team| team.id).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_roster_order_is_stable() {
        let first = initial_roster();
        let second = initial_roster();
        assert_eq!(first, second);
        assert_eq!(first[0].id, TeamId::new(1));
        assert_eq!(first[4].id, TeamId::new(5));
    }
}
