//! Identifiers and coordinates shared across the mod.

use serde::{Deserialize, Serialize};

/// Opaque identifier of a world (dimension) in the host game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldId(pub u64);

/// Integer block coordinates within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Creates a position from its components.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Player identifier assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

/// The slice of player context the grid layer needs: who the player is and
/// which world they are standing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Player identifier.
    pub id: PlayerId,
    /// World the player currently occupies.
    pub world: WorldId,
}

impl Player {
    /// Creates a player context.
    pub fn new(id: PlayerId, world: WorldId) -> Self {
        Self { id, world }
    }
}
