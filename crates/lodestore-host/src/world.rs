//! World and block-entity lookup.
//!
//! [`HostWorlds`] is the explicit resolution context a grid session is
//! handed when it needs to re-find its remote network: world by id, block
//! entity by position, node from the entity, network from the node. Every
//! hop is fallible; none of the results may be cached across accesses.

use std::collections::HashMap;

use lodestore_item::DataTag;

use crate::network::{Network, NetworkId};
use crate::pos::{BlockPos, WorldId};

// ---------------------------------------------------------------------------
// Block entities
// ---------------------------------------------------------------------------

/// Tagged kind of a block entity. Consumers match on this tag instead of
/// inspecting the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockEntityKind {
    /// A grid block (storage-browsing UI anchor).
    Grid,
    /// A network controller.
    Controller,
    /// Any other block entity the mod does not interact with.
    Other,
}

/// A network node embedded in a block entity. Unbound nodes (not yet part
/// of a network) carry no network id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkNode {
    /// Owning network, if the node is bound.
    pub network: Option<NetworkId>,
}

impl NetworkNode {
    /// Creates a node bound to `network`.
    pub fn bound(network: NetworkId) -> Self {
        Self {
            network: Some(network),
        }
    }

    /// Creates an unbound node.
    pub fn unbound() -> Self {
        Self { network: None }
    }
}

/// A block-level entity: kind tag, optional network node, and the attached
/// persisted data blob (the block-anchored analogue of an item tag).
#[derive(Debug, Clone)]
pub struct BlockEntity {
    /// What kind of block entity this is.
    pub kind: BlockEntityKind,
    /// The network node, for network-participating blocks.
    pub node: Option<NetworkNode>,
    /// Persisted per-block data.
    pub data: DataTag,
}

impl BlockEntity {
    /// Creates a block entity of `kind` with the given node and empty data.
    pub fn new(kind: BlockEntityKind, node: Option<NetworkNode>) -> Self {
        Self {
            kind,
            node,
            data: DataTag::new(),
        }
    }

    /// The entity's network node, if it has one.
    pub fn node(&self) -> Option<&NetworkNode> {
        self.node.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Worlds
// ---------------------------------------------------------------------------

/// One loaded world: block entities by position.
#[derive(Debug, Clone, Default)]
pub struct HostWorld {
    block_entities: HashMap<BlockPos, BlockEntity>,
}

impl HostWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the block entity at `pos`.
    pub fn block_entity_at(&self, pos: BlockPos) -> Option<&BlockEntity> {
        self.block_entities.get(&pos)
    }

    /// Mutable block entity lookup.
    pub fn block_entity_at_mut(&mut self, pos: BlockPos) -> Option<&mut BlockEntity> {
        self.block_entities.get_mut(&pos)
    }

    /// Places a block entity at `pos`, replacing any existing one.
    pub fn set_block_entity(&mut self, pos: BlockPos, entity: BlockEntity) {
        self.block_entities.insert(pos, entity);
    }

    /// Removes the block entity at `pos` (block broken / chunk unloaded).
    pub fn remove_block_entity(&mut self, pos: BlockPos) -> Option<BlockEntity> {
        self.block_entities.remove(&pos)
    }
}

// ---------------------------------------------------------------------------
// HostWorlds
// ---------------------------------------------------------------------------

/// The server's loaded worlds and live networks — the full lookup context
/// for binding resolution.
#[derive(Debug, Clone, Default)]
pub struct HostWorlds {
    worlds: HashMap<WorldId, HostWorld>,
    networks: HashMap<NetworkId, Network>,
}

impl HostWorlds {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a world by id.
    pub fn world(&self, id: WorldId) -> Option<&HostWorld> {
        self.worlds.get(&id)
    }

    /// Mutable world lookup.
    pub fn world_mut(&mut self, id: WorldId) -> Option<&mut HostWorld> {
        self.worlds.get_mut(&id)
    }

    /// Inserts (or replaces) a world.
    pub fn set_world(&mut self, id: WorldId, world: HostWorld) {
        self.worlds.insert(id, world);
    }

    /// Removes a world (dimension unloaded).
    pub fn remove_world(&mut self, id: WorldId) -> Option<HostWorld> {
        self.worlds.remove(&id)
    }

    /// Follows a node to its owning live network.
    pub fn network(&self, node: &NetworkNode) -> Option<&Network> {
        self.networks.get(&node.network?)
    }

    /// Mutable network access by id.
    pub fn network_mut(&mut self, id: NetworkId) -> Option<&mut Network> {
        self.networks.get_mut(&id)
    }

    /// Registers a live network.
    pub fn set_network(&mut self, network: Network) {
        self.networks.insert(network.id(), network);
    }

    /// Removes a network (controller broken).
    pub fn remove_network(&mut self, id: NetworkId) -> Option<Network> {
        self.networks.remove(&id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
