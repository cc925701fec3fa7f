//! Final standings and winner determination
//!
//! This module computes the end-of-game ordering of teams. The sort is
//! stable and descends by score, so teams sharing the maximum score keep
//! their original roster order and the earliest of them wins. Scores can
//! no longer change once the game has concluded, so the final ordering
//! is computed once and cached.

use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::team::{Team, TeamId};

/// Cached end-of-game standings
///
/// The cache starts empty and fills on first query after the game
/// concludes; a game reset replaces the whole structure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Standings {
    /// Team identifiers in final order, best first (computed once when needed)
    #[serde(skip)]
    final_order: once_cell_serde::sync::OnceCell<Vec<TeamId>>,
}

impl Standings {
    /// Orders teams by score descending, ties broken by roster order
    ///
    /// Stability of the sort is what carries the tie-break rule: among
    /// equal scores the team appearing earliest in `teams` comes first.
    fn compute_order(teams: &[Team]) -> Vec<TeamId> {
        teams
            .iter()
            .sorted_by_key(|team| Reverse(team.score))
            .map(|team| team.id)
            .collect_vec()
    }

    /// Returns the final ordering of team identifiers, best first
    ///
    /// The ordering is computed from `teams` on the first call and cached
    /// for subsequent calls.
    pub fn final_order(&self, teams: &[Team]) -> &[TeamId] {
        self.final_order.get_or_init(|| Self::compute_order(teams))
    }

    /// Returns the winning team, if any
    ///
    /// # Returns
    ///
    /// The first team of the final ordering, or `None` for an empty roster
    pub fn winner<'a>(&self, teams: &'a [Team]) -> Option<&'a Team> {
        let id = self.final_order(teams).first().copied()?;
        teams.iter().find(|team| team.id == id)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::team::Team;

    fn team(id: u32, name: &str, score: i64) -> Team {
        Team {
            score,
            ..Team::new(TeamId::new(id), name, "bg-slate-500")
        }
    }

    #[test]
    fn test_final_order_descends_by_score() {
        let teams = vec![team(1, "A", 5), team(2, "B", 30), team(3, "C", 10)];
        let standings = Standings::default();
        assert_eq!(
            standings.final_order(&teams),
            &[TeamId::new(2), TeamId::new(3), TeamId::new(1)]
        );
    }

    #[test]
    fn test_tie_break_prefers_roster_order() {
        let teams = vec![team(1, "A", 10), team(2, "B", 10), team(3, "C", 5)];
        let standings = Standings::default();
        let winner = standings.winner(&teams).unwrap();
        assert_eq!(winner.id, TeamId::new(1));
        assert_eq!(winner.name, "A");
    }

    #[test]
    fn test_negative_scores_sort_last() {
        let teams = vec![team(1, "A", -5), team(2, "B", 0), team(3, "C", -10)];
        let standings = Standings::default();
        assert_eq!(
            standings.final_order(&teams),
            &[TeamId::new(2), TeamId::new(1), TeamId::new(3)]
        );
        assert_eq!(standings.winner(&teams).unwrap().id, TeamId::new(2));
    }

    #[test]
    fn test_empty_roster_has_no_winner() {
        let standings = Standings::default();
        assert!(standings.winner(&[]).is_none());
    }

    #[test]
    fn test_order_is_cached() {
        let mut teams = vec![team(1, "A", 10), team(2, "B", 20)];
        let standings = Standings::default();
        assert_eq!(standings.final_order(&teams)[0], TeamId::new(2));

        // later mutations are not observed; the first query pinned the order
        teams[0].score = 100;
        assert_eq!(standings.final_order(&teams)[0], TeamId::new(2));
    }
}
