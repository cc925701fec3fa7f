//! Team identity and name management
//!
//! This module defines the team data carried through a game: the stable
//! team identifier, the team record itself, and the validation applied
//! to user-submitted team names.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unique identifier for a team on the scoreboard
///
/// Identifiers come from the static roster and stay stable for the whole
/// game; renames and score changes never touch them.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
pub struct TeamId(u32);

impl TeamId {
    /// Creates an identifier from its raw roster value
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// A team tracked by the scoreboard
///
/// Identity is the `id` field; `name` changes only through an explicit
/// rename and `score` only through the point transitions of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Stable identifier from the roster
    pub id: TeamId,
    /// Display name, mutable by explicit user edit
    pub name: String,
    /// Accumulated points; negative marking can push this below zero
    pub score: i64,
    /// Opaque display token consumed by the presentation layer
    pub color: String,
}

impl Team {
    /// Creates a team with a zero score
    pub fn new(id: TeamId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            color: color.into(),
        }
    }
}

/// Errors that can occur during team name validation
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name is empty or contains only whitespace
    #[error("name cannot be empty")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("name is too long")]
    TooLong,
}

/// Validates a user-submitted team name
///
/// The name is trimmed of leading and trailing whitespace before the
/// checks run; the trimmed form is what gets stored.
///
/// # Arguments
///
/// * `name` - The requested team name
///
/// # Returns
///
/// The cleaned name on success.
///
/// # Errors
///
/// * `Error::Empty` - Name is empty after trimming whitespace
/// * `Error::TooLong` - Name exceeds the configured maximum length
pub fn clean_name(name: &str) -> Result<String, Error> {
    if name.len() > crate::constants::team::MAX_NAME_LENGTH {
        return Err(Error::TooLong);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Empty);
    }
    Ok(name.to_owned())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_trims_whitespace() {
        assert_eq!(clean_name("  Night Owls  "), Ok("Night Owls".to_owned()));
        assert_eq!(clean_name("Quiz\tWhizzes"), Ok("Quiz\tWhizzes".to_owned()));
    }

    #[test]
    fn test_clean_name_rejects_empty() {
        assert_eq!(clean_name(""), Err(Error::Empty));
        assert_eq!(clean_name("   "), Err(Error::Empty));
        assert_eq!(clean_name("\t\n"), Err(Error::Empty));
    }

    #[test]
    fn test_clean_name_rejects_too_long() {
        let long_name = "x".repeat(crate::constants::team::MAX_NAME_LENGTH + 1);
        assert_eq!(clean_name(&long_name), Err(Error::TooLong));
    }

    #[test]
    fn test_new_team_starts_at_zero() {
        let team = Team::new(TeamId::new(7), "Trailblazers", "bg-teal-500");
        assert_eq!(team.score, 0);
        assert_eq!(team.id, TeamId::new(7));
        assert_eq!(team.name, "Trailblazers");
    }

    #[test]
    fn test_team_id_display() {
        assert_eq!(TeamId::new(3).to_string(), "3");
    }
}
