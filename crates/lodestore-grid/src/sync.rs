//! Receipt side of the settings channel.
//!
//! The host's networking layer decodes a [`SettingsUpdate`] and hands it
//! here with the sending player's id. The handler resolves that player's
//! currently-open session, checks the message kind against the session's
//! tag, and applies the fields — validated ones individually, tab fields
//! unconditionally. Every failure path is a silent no-op: there is no
//! error channel back to the client, only a debug log line.

use std::collections::HashMap;

use lodestore_host::{HostWorlds, PlayerId};
use lodestore_net::SettingsUpdate;

use crate::grid::GridSession;

// ---------------------------------------------------------------------------
// SessionRegistry
// ---------------------------------------------------------------------------

/// The server's currently-open grid sessions, one per player.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    open: HashMap<PlayerId, GridSession>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `session` as `player`'s open session, replacing any previous
    /// one (a player has at most one grid screen open).
    pub fn open_session(&mut self, player: PlayerId, session: GridSession) {
        self.open.insert(player, session);
    }

    /// Removes and returns `player`'s open session.
    pub fn close_session(&mut self, player: PlayerId) -> Option<GridSession> {
        self.open.remove(&player)
    }

    /// The player's open session, if any.
    pub fn get(&self, player: PlayerId) -> Option<&GridSession> {
        self.open.get(&player)
    }

    /// Mutable access to the player's open session.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut GridSession> {
        self.open.get_mut(&player)
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if no session is open.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

/// Applies a received settings update to `player`'s open session.
///
/// No session, or a session of a different kind than the message, makes the
/// whole update a no-op. Otherwise fields apply per the session's rules:
/// enum fields validated one by one (an invalid value is dropped and the
/// prior value kept, the rest of the message still applies), tab fields
/// unconditionally.
pub fn apply_settings_update(
    registry: &mut SessionRegistry,
    host: &mut HostWorlds,
    player: PlayerId,
    update: &SettingsUpdate,
) {
    let Some(session) = registry.get_mut(player) else {
        tracing::debug!(?player, kind = ?update.kind(), "settings update without open session");
        return;
    };

    match (update, session) {
        (SettingsUpdate::Grid(msg), GridSession::Block(grid)) => {
            grid.apply_settings_message(msg, host);
        }
        (SettingsUpdate::WirelessGrid(msg), GridSession::Wireless(grid)) => {
            grid.apply_settings_message(msg);
        }
        (SettingsUpdate::WirelessFluidGrid(msg), GridSession::WirelessFluid(grid)) => {
            grid.apply_settings_message(msg);
        }
        (update, _) => {
            tracing::debug!(?player, kind = ?update.kind(), "settings update for wrong session kind");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
