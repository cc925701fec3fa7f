//! Configuration constants for the scoreboard
//!
//! This module contains the configuration limits and constraints used
//! throughout the scoreboard to ensure data integrity and provide
//! consistent boundaries for the different components.

/// Team and roster configuration constants
pub mod team {
    /// Maximum length of a team name in characters
    pub const MAX_NAME_LENGTH: usize = 100;
}

/// Round catalog configuration constants
pub mod rounds {
    /// Maximum number of rounds allowed in a single catalog
    pub const MAX_ROUND_COUNT: usize = 50;
    /// Maximum length of a round name in characters
    pub const MAX_NAME_LENGTH: usize = 100;
}

/// Celebration (confetti) configuration constants
pub mod celebration {
    /// Total duration of the celebration in milliseconds
    pub const DURATION_MILLIS: u64 = 5_000;
    /// Interval between confetti bursts in milliseconds
    pub const TICK_MILLIS: u64 = 250;
    /// Particle count of a burst fired at the very start of the celebration;
    /// later bursts scale down linearly with the time remaining
    pub const MAX_PARTICLES_PER_BURST: u32 = 50;
    /// Initial velocity of confetti particles
    pub const START_VELOCITY: f64 = 30.0;
    /// Angular spread of confetti particles in degrees
    pub const SPREAD: f64 = 360.0;
    /// Lifetime of confetti particles in animation frames
    pub const PARTICLE_TICKS: u32 = 60;
}
