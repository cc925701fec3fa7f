//! Presentation boundary
//!
//! This module defines the trait through which the game notifies the
//! presentation layer. The surface abstraction keeps the game free of
//! rendering concerns while letting different frontends (a desktop
//! window, a web view) consume the same message stream.

use super::game::{SyncMessage, UpdateMessage};

/// Trait for delivering messages to a presentation surface
///
/// Every user intent flows into the game through
/// [`crate::game::Game::receive_message`]; the resulting view changes
/// flow back out through an implementation of this trait.
pub trait Surface {
    /// Delivers an incremental update to the surface
    ///
    /// Update messages describe a single change to the rendered view,
    /// such as one team's score moving.
    ///
    /// # Arguments
    ///
    /// * `message` - The update message to deliver
    fn send_message(&self, message: &UpdateMessage);

    /// Delivers a full state snapshot to the surface
    ///
    /// Sync messages let a surface render from scratch, typically when it
    /// first attaches or after a game reset.
    ///
    /// # Arguments
    ///
    /// * `state` - The synchronization message to deliver
    fn send_state(&self, state: &SyncMessage);

    /// Detaches the surface
    ///
    /// Called when the surface is torn down and no further messages
    /// should be delivered.
    fn close(self);
}
