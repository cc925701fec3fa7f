//! Feedback collaborators: sound playback and celebration triggering
//!
//! Transitions of the game never perform side effects themselves; they
//! return [`Effect`] descriptors instead. This module defines those
//! descriptors, the collaborator traits that interpret them, and the
//! fire-and-forget dispatcher that bridges the two. Collaborator
//! failures are logged and swallowed; they never reach the game state.

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The sound clips the scoreboard can request
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, derive_more::Display,
)]
pub enum ClipId {
    /// Played when a team earns points
    Correct,
    /// Played when a team loses points
    Wrong,
    /// Played once when the game concludes with a winner
    Winner,
}

/// Returns the built-in clip source table
///
/// Maps each clip to the URL of its default audio asset. Audio player
/// implementations are free to substitute their own sources.
pub fn default_clip_sources() -> EnumMap<ClipId, &'static str> {
    enum_map! {
        ClipId::Correct => "https://cdn.freesound.org/previews/171/171671_2437358-lq.mp3",
        ClipId::Wrong => "https://cdn.freesound.org/previews/142/142608_1840739-lq.mp3",
        ClipId::Winner => "https://cdn.freesound.org/previews/659/659798_11502450-lq.mp3",
    }
}

/// Errors an audio player can report from a playback attempt
///
/// Dispatching only ever logs these; playback failure is invisible to
/// the game and to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refused to start playback (e.g. autoplay policy)
    #[error("playback blocked: {0}")]
    Blocked(String),
    /// The clip source could not be loaded
    #[error("clip unavailable: {0}")]
    Unavailable(String),
}

/// Capability to play a sound clip
pub trait AudioPlayer {
    /// Attempts to play the given clip
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] when the platform blocks playback or
    /// the clip cannot be loaded. Callers going through
    /// [`dispatch`] never observe the error.
    fn play(&self, clip: ClipId) -> Result<(), PlaybackError>;
}

/// Capability to run the end-of-game celebration animation
///
/// The animation is a bounded, self-terminating loop (see
/// [`crate::celebration`]); there is no cancellation hook.
pub trait AnimationTrigger {
    /// Starts the celebration; runs independently for a fixed duration
    fn celebrate(&self);
}

/// A side effect requested by a game transition
///
/// Effects are descriptions, not actions: the transition that produced
/// them has already completed by the time they are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    /// Play a sound clip
    Sound(ClipId),
    /// Run the end-of-game celebration
    Celebrate,
}

/// Interprets a batch of effects against the collaborators
///
/// Dispatch is fire-and-forget: completion is never awaited and audio
/// failures are logged at warn level, then dropped.
///
/// # Arguments
///
/// * `effects` - The effect descriptors returned by a transition
/// * `audio` - The audio playback collaborator
/// * `animation` - The celebration animation collaborator
pub fn dispatch<A: AudioPlayer, C: AnimationTrigger>(effects: &[Effect], audio: &A, animation: &C) {
    for effect in effects {
        match effect {
            Effect::Sound(clip) => {
                if let Err(error) = audio.play(*clip) {
                    warn!(%clip, %error, "sound playback failed");
                }
            }
            Effect::Celebrate => animation.celebrate(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingAudio {
        played: RefCell<Vec<ClipId>>,
        fail: bool,
    }

    impl RecordingAudio {
        fn new(fail: bool) -> Self {
            Self {
                played: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl AudioPlayer for RecordingAudio {
        fn play(&self, clip: ClipId) -> Result<(), PlaybackError> {
            self.played.borrow_mut().push(clip);
            if self.fail {
                Err(PlaybackError::Blocked("autoplay policy".to_owned()))
            } else {
                Ok(())
            }
        }
    }

    struct CountingAnimation {
        celebrations: RefCell<usize>,
    }

    impl AnimationTrigger for CountingAnimation {
        fn celebrate(&self) {
            *self.celebrations.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_dispatch_plays_sounds_and_celebrates() {
        let audio = RecordingAudio::new(false);
        let animation = CountingAnimation {
            celebrations: RefCell::new(0),
        };

        dispatch(
            &[
                Effect::Sound(ClipId::Winner),
                Effect::Celebrate,
                Effect::Sound(ClipId::Correct),
            ],
            &audio,
            &animation,
        );

        assert_eq!(*audio.played.borrow(), vec![ClipId::Winner, ClipId::Correct]);
        assert_eq!(*animation.celebrations.borrow(), 1);
    }

    #[test]
    fn test_dispatch_swallows_playback_failures() {
        let audio = RecordingAudio::new(true);
        let animation = CountingAnimation {
            celebrations: RefCell::new(0),
        };

        // both effects still get interpreted despite the first one failing
        dispatch(
            &[Effect::Sound(ClipId::Wrong), Effect::Celebrate],
            &audio,
            &animation,
        );

        assert_eq!(*audio.played.borrow(), vec![ClipId::Wrong]);
        assert_eq!(*animation.celebrations.borrow(), 1);
    }

    #[test]
    fn test_default_clip_sources_are_complete() {
        let sources = default_clip_sources();
        for (_, source) in &sources {
            assert!(source.starts_with("https://"));
        }
    }
}
