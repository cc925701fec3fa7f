//! End-of-game confetti schedule
//!
//! The celebration is a bounded, self-terminating plan: bursts fire on a
//! fixed tick for a fixed total duration, with particle counts decaying
//! linearly as time runs out. The plan is computed up front as plain
//! data; an [`crate::feedback::AnimationTrigger`] implementation replays
//! it against whatever confetti renderer the platform offers. Dismissing
//! the winner view early does not cancel the plan; it is short enough to
//! simply run out.

use serde::Serialize;
use web_time::Duration;

use crate::constants::celebration;

/// Where on the viewport a burst originates
///
/// Coordinates are fractions of the viewport; `y` may be slightly
/// negative so confetti falls in from above the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    /// Horizontal position in `[0, 1]`
    pub x: f64,
    /// Vertical position, nominally in `[-0.2, 0.8)`
    pub y: f64,
}

/// A single confetti burst within the celebration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Burst {
    /// Offset from the start of the celebration
    pub delay: Duration,
    /// Number of particles in this burst
    pub particle_count: u32,
    /// Launch position of the burst
    pub origin: Origin,
    /// Initial particle velocity
    pub start_velocity: f64,
    /// Angular spread of the burst in degrees
    pub spread: f64,
    /// Particle lifetime in animation frames
    pub ticks: u32,
}

fn random_in_range(min: f64, max: f64) -> f64 {
    fastrand::f64() * (max - min) + min
}

fn burst(delay: Duration, particle_count: u32, x_min: f64, x_max: f64) -> Burst {
    Burst {
        delay,
        particle_count,
        origin: Origin {
            x: random_in_range(x_min, x_max),
            y: random_in_range(-0.2, 0.8),
        },
        start_velocity: celebration::START_VELOCITY,
        spread: celebration::SPREAD,
        ticks: celebration::PARTICLE_TICKS,
    }
}

/// Builds the full celebration plan
///
/// Every tick fires two bursts, one from each side of the viewport, with
/// randomized origins. The last tick lands strictly before the total
/// duration elapses, which is what makes the plan self-terminating.
pub fn schedule() -> Vec<Burst> {
    let duration = Duration::from_millis(celebration::DURATION_MILLIS);
    let tick = Duration::from_millis(celebration::TICK_MILLIS);

    let mut bursts = Vec::new();
    let mut elapsed = tick;
    while elapsed < duration {
        let fraction = (duration - elapsed).as_secs_f64() / duration.as_secs_f64();
        let particle_count =
            (f64::from(celebration::MAX_PARTICLES_PER_BURST) * fraction).round() as u32;

        bursts.push(burst(elapsed, particle_count, 0.1, 0.3));
        bursts.push(burst(elapsed, particle_count, 0.7, 0.9));

        elapsed += tick;
    }
    bursts
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_is_bounded() {
        let duration = Duration::from_millis(celebration::DURATION_MILLIS);
        let plan = schedule();
        assert!(!plan.is_empty());
        assert!(plan.iter().all(|b| b.delay < duration));
    }

    #[test]
    fn test_two_bursts_per_tick() {
        let plan = schedule();
        assert_eq!(plan.len() % 2, 0);
        for pair in plan.chunks(2) {
            assert_eq!(pair[0].delay, pair[1].delay);
            assert_eq!(pair[0].particle_count, pair[1].particle_count);
        }
    }

    #[test]
    fn test_particle_counts_decay() {
        let plan = schedule();
        let counts: Vec<u32> = plan.chunks(2).map(|pair| pair[0].particle_count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert!(counts[0] > *counts.last().unwrap());
        assert!(counts[0] <= celebration::MAX_PARTICLES_PER_BURST);
    }

    #[test]
    fn test_origins_stay_in_their_lanes() {
        for pair in schedule().chunks(2) {
            assert!((0.1..=0.3).contains(&pair[0].origin.x));
            assert!((0.7..=0.9).contains(&pair[1].origin.x));
            for b in pair {
                assert!((-0.2..0.8).contains(&b.origin.y));
            }
        }
    }
}
