//! # Scoreboard Library
//!
//! This library provides the core logic for a quiz scorekeeping widget.
//! It tracks a fixed roster of teams through a sequence of predefined
//! rounds, accumulates scores under round-specific rules (including
//! optional negative marking), and declares a winner at the end.
//!
//! The scoring state machine lives in [`game`]; it is pure with respect
//! to side effects, returning [`feedback::Effect`] descriptors that a
//! thin boundary layer interprets against the audio and animation
//! collaborators. The presentation layer attaches through the
//! [`session::Surface`] trait and drives the game exclusively through
//! [`game::IncomingMessage`] intents.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod celebration;
pub mod constants;
pub mod feedback;
pub mod game;
pub mod roster;
pub mod round;
pub mod session;
pub mod standings;
pub mod team;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::feedback::{ClipId, Effect};
    use crate::game::Game;
    use crate::team::TeamId;

    #[test]
    fn test_sync_message_serializes() {
        let game = Game::default();
        let json = game.state_message().to_message();

        assert!(json.contains("Playing"));
        assert!(json.contains("Round 1"));
        assert!(json.contains("Mumbai Indians"));
    }

    #[test]
    fn test_effects_serialize_for_inspection() {
        let json = serde_json::to_string(&Effect::Sound(ClipId::Winner)).unwrap();
        assert!(json.contains("Sound"));
        assert!(json.contains("Winner"));
    }

    #[test]
    fn test_default_game_wires_roster_and_catalog() {
        let game = Game::default();
        assert_eq!(game.teams().len(), 5);
        assert_eq!(game.round_count(), 5);
        assert_eq!(game.current_round_index(), 0);
        assert!(!game.is_game_over());
        assert!(game.team(TeamId::new(1)).is_some());
    }
}
