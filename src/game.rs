//! Core game state and transitions
//!
//! This module contains the game struct and the scoring state machine:
//! applying points under the current round's rules, advancing rounds,
//! concluding the game, and determining the winner. All transitions are
//! synchronous and total; invalid inputs degrade to no-ops rather than
//! raised failures. Side effects are returned as [`Effect`] descriptors
//! and interpreted elsewhere, which keeps every transition directly
//! testable.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::{
    feedback::{ClipId, Effect},
    roster,
    round::{RoundCatalog, RoundConfig},
    session::Surface,
    standings::Standings,
    team::{self, Team, TeamId},
};

/// The phase a game is in
///
/// A game is `Playing` for every round index and becomes `Over` once the
/// final round has been advanced past. `Over` carries the visibility of
/// the winner summary: dismissing it lets the surface show the score
/// view again without reopening the game, so the point controls stay
/// disabled either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Rounds are still in progress
    Playing,
    /// The final round has concluded
    Over {
        /// Whether the winner summary has been dismissed to inspect scores
        summary_dismissed: bool,
    },
}

/// A complete quiz scorekeeping game
///
/// Owns the team roster and the round position, and is the sole
/// authority over their mutation. The presentation layer holds exactly
/// one instance and funnels every user intent through
/// [`Game::receive_message`] (or the individual transition methods).
#[derive(Debug, Serialize, Deserialize)]
pub struct Game {
    /// The static scoring rules the game is played under
    catalog: RoundCatalog,
    /// The teams in roster order; the order is the tie-break order
    teams: Vec<Team>,
    /// Index of the active round within the catalog
    current_round_index: usize,
    /// Current phase of the game
    phase: Phase,
    /// Cached end-of-game standings
    standings: Standings,
}

/// User intents dispatched to the game
///
/// Each variant corresponds to one user-triggered control on the
/// surface; disabled controls map exactly to the no-op preconditions of
/// the matching transition.
#[derive(Debug, Deserialize, Clone)]
pub enum IncomingMessage {
    /// A team answered correctly
    CorrectAnswer {
        /// The team to award points to
        team_id: TeamId,
    },
    /// A team answered wrongly
    WrongAnswer {
        /// The team to deduct points from
        team_id: TeamId,
    },
    /// Move to the next round, or conclude the game from the last one
    AdvanceRound,
    /// Dismiss the winner summary to inspect scores
    ReopenScores,
    /// Change a team's display name
    Rename {
        /// The team to rename
        team_id: TeamId,
        /// The requested name; trimmed before it is stored
        name: String,
    },
    /// Discard all state and restart from the initial roster
    ///
    /// Destructive and without undo; the surface is expected to obtain
    /// explicit user confirmation before sending this.
    Reset,
}

/// Update messages sent to the surface about view changes
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum UpdateMessage {
    /// The active round changed
    RoundChanged {
        /// Index of the new active round
        index: usize,
        /// Total number of rounds
        count: usize,
        /// Rules of the new active round
        round: RoundConfig,
    },
    /// A team's score changed
    ScoreChanged {
        /// The team whose score moved
        team_id: TeamId,
        /// The team's new total
        score: i64,
    },
    /// A team was renamed
    NameChanged {
        /// The renamed team
        team_id: TeamId,
        /// The stored (trimmed) name
        name: String,
    },
    /// The game concluded and the winner summary should be shown
    SummaryShown {
        /// The winning team, if the roster was not empty
        winner: Option<Team>,
    },
    /// The winner summary was dismissed in favor of the score view
    SummaryDismissed,
    /// The game was reset; a full sync follows
    GameReset,
}

/// Sync messages carrying the full visible state
///
/// Sent when a surface attaches or after a reset so it can render from
/// scratch.
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum SyncMessage {
    /// The game is mid-play
    Playing {
        /// Index of the active round
        index: usize,
        /// Total number of rounds
        count: usize,
        /// Rules of the active round
        round: RoundConfig,
        /// All teams in roster order
        teams: Vec<Team>,
    },
    /// The game has concluded
    Summary {
        /// All teams in roster order
        teams: Vec<Team>,
        /// The winning team, if the roster was not empty
        winner: Option<Team>,
        /// Whether the winner summary has been dismissed
        summary_dismissed: bool,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

impl Default for Game {
    /// A game over the built-in roster and round catalog
    fn default() -> Self {
        Self::new(RoundCatalog::default())
    }
}

// Accessors
impl Game {
    /// Creates a fresh game at round zero over the built-in roster
    pub fn new(catalog: RoundCatalog) -> Self {
        Self {
            catalog,
            teams: roster::initial_roster(),
            current_round_index: 0,
            phase: Phase::Playing,
            standings: Standings::default(),
        }
    }

    /// Returns the teams in roster order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Looks up a team by its identifier
    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    fn team_mut(&mut self, team_id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|team| team.id == team_id)
    }

    /// Returns the index of the active round
    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    /// Returns the rules of the active round
    pub fn current_round(&self) -> &RoundConfig {
        self.catalog
            .get(self.current_round_index)
            .expect("round index stays within the catalog")
    }

    /// Returns the total number of rounds
    pub fn round_count(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the game has concluded
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Whether the winner summary has been dismissed for score inspection
    pub fn summary_dismissed(&self) -> bool {
        matches!(
            self.phase,
            Phase::Over {
                summary_dismissed: true
            }
        )
    }

    /// Returns the winning team once the game has concluded
    ///
    /// # Returns
    ///
    /// `None` while the game is still in progress; otherwise the team
    /// with the highest score, ties broken by roster order.
    pub fn winner(&self) -> Option<&Team> {
        if self.is_game_over() {
            self.standings.winner(&self.teams)
        } else {
            None
        }
    }

    /// Returns the final ordering of team identifiers, best first
    ///
    /// `None` while the game is still in progress.
    pub fn final_standings(&self) -> Option<&[TeamId]> {
        self.is_game_over()
            .then(|| self.standings.final_order(&self.teams))
    }

    /// Produces a full state snapshot for a (re)attaching surface
    pub fn state_message(&self) -> SyncMessage {
        match self.phase {
            Phase::Playing => SyncMessage::Playing {
                index: self.current_round_index,
                count: self.catalog.len(),
                round: self.current_round().clone(),
                teams: self.teams.clone(),
            },
            Phase::Over { summary_dismissed } => SyncMessage::Summary {
                teams: self.teams.clone(),
                winner: self.winner().cloned(),
                summary_dismissed,
            },
        }
    }
}

// Transitions
impl Game {
    /// Awards the active round's points to a team for a correct answer
    ///
    /// No-op while the game is over (policy guard) or for an unknown team
    /// id (defensive; surface controls only carry rendered ids).
    ///
    /// # Returns
    ///
    /// The feedback effects to interpret: a `Correct` sound when points
    /// were applied, nothing otherwise.
    pub fn apply_correct(&mut self, team_id: TeamId) -> Vec<Effect> {
        if self.is_game_over() {
            return Vec::new();
        }
        let points = self.current_round().correct_points;
        match self.team_mut(team_id) {
            Some(team) => {
                team.score += points;
                vec![Effect::Sound(ClipId::Correct)]
            }
            None => Vec::new(),
        }
    }

    /// Applies the active round's deduction to a team for a wrong answer
    ///
    /// No-op while the game is over or when the active round disallows
    /// negative marking; the surface disables the control in exactly
    /// those situations.
    ///
    /// # Returns
    ///
    /// The feedback effects to interpret: a `Wrong` sound when the
    /// deduction was applied, nothing otherwise.
    pub fn apply_wrong(&mut self, team_id: TeamId) -> Vec<Effect> {
        if self.is_game_over() || !self.current_round().allow_negative {
            return Vec::new();
        }
        let points = self.current_round().wrong_points;
        match self.team_mut(team_id) {
            Some(team) => {
                team.score += points;
                vec![Effect::Sound(ClipId::Wrong)]
            }
            None => Vec::new(),
        }
    }

    /// Moves to the next round, or concludes the game from the last one
    ///
    /// Advancing from any round but the last increments the round index.
    /// Advancing from the last round concludes the game with the index
    /// unchanged. Advancing an already concluded game re-shows the winner
    /// summary without emitting the conclusion effects again.
    ///
    /// # Returns
    ///
    /// The `Winner` sound and `Celebrate` effects exactly once, on the
    /// transition into the concluded phase with a determined winner.
    pub fn advance_round(&mut self) -> Vec<Effect> {
        if !self.is_game_over() && self.current_round_index < self.catalog.last_index() {
            self.current_round_index += 1;
            return Vec::new();
        }

        let concluding = !self.is_game_over();
        self.phase = Phase::Over {
            summary_dismissed: false,
        };
        if concluding && self.winner().is_some() {
            vec![Effect::Sound(ClipId::Winner), Effect::Celebrate]
        } else {
            Vec::new()
        }
    }

    /// Dismisses the winner summary to let the surface show scores again
    ///
    /// Scores, the round index, and the concluded phase itself are
    /// untouched; the point controls therefore stay disabled. No-op while
    /// the game is still in progress.
    ///
    /// # Returns
    ///
    /// `true` when the summary was visible and is now dismissed.
    pub fn reopen_scores(&mut self) -> bool {
        match &mut self.phase {
            Phase::Over { summary_dismissed } if !*summary_dismissed => {
                *summary_dismissed = true;
                true
            }
            _ => false,
        }
    }

    /// Renames a team
    ///
    /// The name is trimmed before it is stored; score and id are
    /// untouched. Renaming stays available after the game has concluded.
    /// An unknown team id validates the name but changes nothing.
    ///
    /// # Errors
    ///
    /// * [`team::Error::Empty`] - Name is empty after trimming whitespace
    /// * [`team::Error::TooLong`] - Name exceeds the maximum length
    pub fn rename_team(&mut self, team_id: TeamId, new_name: &str) -> Result<(), team::Error> {
        let name = team::clean_name(new_name)?;
        if let Some(team) = self.team_mut(team_id) {
            team.name = name;
        }
        Ok(())
    }

    /// Discards all state and restarts from the initial roster
    ///
    /// Unconditionally destructive, with no undo; obtaining user
    /// confirmation is the caller's responsibility.
    pub fn reset(&mut self) {
        let catalog = self.catalog.clone();
        *self = Self::new(catalog);
    }
}

// Message-driven dispatch
impl Game {
    /// Processes a user intent and notifies the surface of view changes
    ///
    /// This is the reducer the presentation layer calls for every
    /// control: it runs the matching transition, pushes the resulting
    /// update messages through `surface`, and hands back the feedback
    /// effects for interpretation. Rejected renames are logged and
    /// otherwise silent; the absence of change is the only feedback.
    ///
    /// # Arguments
    ///
    /// * `message` - The user intent to process
    /// * `surface` - The presentation surface to notify
    ///
    /// # Returns
    ///
    /// The feedback effects emitted by the transition.
    pub fn receive_message<S: Surface>(
        &mut self,
        message: IncomingMessage,
        surface: &S,
    ) -> Vec<Effect> {
        match message {
            IncomingMessage::CorrectAnswer { team_id } => {
                let effects = self.apply_correct(team_id);
                if !effects.is_empty() {
                    if let Some(team) = self.team(team_id) {
                        surface.send_message(&UpdateMessage::ScoreChanged {
                            team_id,
                            score: team.score,
                        });
                    }
                }
                effects
            }
            IncomingMessage::WrongAnswer { team_id } => {
                let effects = self.apply_wrong(team_id);
                if !effects.is_empty() {
                    if let Some(team) = self.team(team_id) {
                        surface.send_message(&UpdateMessage::ScoreChanged {
                            team_id,
                            score: team.score,
                        });
                    }
                }
                effects
            }
            IncomingMessage::AdvanceRound => {
                let effects = self.advance_round();
                match self.phase {
                    Phase::Playing => surface.send_message(&UpdateMessage::RoundChanged {
                        index: self.current_round_index,
                        count: self.catalog.len(),
                        round: self.current_round().clone(),
                    }),
                    Phase::Over { .. } => surface.send_message(&UpdateMessage::SummaryShown {
                        winner: self.winner().cloned(),
                    }),
                }
                effects
            }
            IncomingMessage::ReopenScores => {
                if self.reopen_scores() {
                    surface.send_message(&UpdateMessage::SummaryDismissed);
                }
                Vec::new()
            }
            IncomingMessage::Rename { team_id, name } => {
                match self.rename_team(team_id, &name) {
                    Ok(()) => {
                        if let Some(team) = self.team(team_id) {
                            surface.send_message(&UpdateMessage::NameChanged {
                                team_id,
                                name: team.name.clone(),
                            });
                        }
                    }
                    Err(error) => debug!(%team_id, %error, "rename rejected"),
                }
                Vec::new()
            }
            IncomingMessage::Reset => {
                self.reset();
                surface.send_message(&UpdateMessage::GameReset);
                surface.send_state(&self.state_message());
                Vec::new()
            }
        }
    }
}
