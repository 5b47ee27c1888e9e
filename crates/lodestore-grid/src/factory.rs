//! Grid session factories.
//!
//! A session can be created by using a block in the world or by using a
//! handheld item; each grid variant supplies one factory implementing
//! exactly one of the two branches and returning `None` (not an error) on
//! the other. Adding a grid variant means registering one new factory —
//! nothing dispatches on concrete types.

use std::collections::HashMap;

use lodestore_host::{BlockPos, HostWorlds, Player};
use lodestore_item::ItemStack;

use crate::block::BlockGrid;
use crate::grid::GridSession;
use crate::settings::{GridSettings, GridTarget};
use crate::wireless::{WIRELESS_GRID_ITEM, WirelessGrid};
use crate::wireless_fluid::{WIRELESS_FLUID_GRID_ITEM, WirelessFluidGrid};

/// Registry id of the block grid factory.
pub const GRID_FACTORY_ID: &str = "lodestore:grid";
/// Registry id of the wireless grid factory.
pub const WIRELESS_GRID_FACTORY_ID: &str = "lodestore:wireless_grid";
/// Registry id of the wireless fluid grid factory.
pub const WIRELESS_FLUID_GRID_FACTORY_ID: &str = "lodestore:wireless_fluid_grid";

/// Which branch a factory serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryKind {
    /// Sessions created from a block in the world.
    Block,
    /// Sessions created from a held item.
    Item,
}

/// Creates grid sessions for one variant.
pub trait GridFactory {
    /// The branch this factory serves.
    fn kind(&self) -> FactoryKind;

    /// Creates a session from a held item. `None` for block factories and
    /// for stacks of the wrong item kind.
    fn create_from_item_use(
        &self,
        player: &Player,
        stack: &ItemStack,
        slot: usize,
    ) -> Option<GridSession>;

    /// Creates a session from a block in the player's world. `None` for
    /// item factories and for positions without a matching block.
    fn create_from_block_use(
        &self,
        player: &Player,
        pos: BlockPos,
        host: &HostWorlds,
    ) -> Option<GridSession>;
}

// ---------------------------------------------------------------------------
// Factories
// ---------------------------------------------------------------------------

/// Factory for block-anchored grids.
pub struct BlockGridFactory {
    defaults: GridSettings,
}

impl BlockGridFactory {
    /// Creates the factory with the configured default settings.
    pub fn new(defaults: GridSettings) -> Self {
        Self { defaults }
    }
}

impl GridFactory for BlockGridFactory {
    fn kind(&self) -> FactoryKind {
        FactoryKind::Block
    }

    fn create_from_item_use(
        &self,
        _player: &Player,
        _stack: &ItemStack,
        _slot: usize,
    ) -> Option<GridSession> {
        None
    }

    fn create_from_block_use(
        &self,
        player: &Player,
        pos: BlockPos,
        host: &HostWorlds,
    ) -> Option<GridSession> {
        let target = GridTarget::new(player.world, pos);
        BlockGrid::new(target, host, &self.defaults).map(GridSession::Block)
    }
}

/// Factory for wireless item grids.
pub struct WirelessGridFactory {
    defaults: GridSettings,
}

impl WirelessGridFactory {
    /// Creates the factory with the configured default settings.
    pub fn new(defaults: GridSettings) -> Self {
        Self { defaults }
    }
}

impl GridFactory for WirelessGridFactory {
    fn kind(&self) -> FactoryKind {
        FactoryKind::Item
    }

    fn create_from_item_use(
        &self,
        _player: &Player,
        stack: &ItemStack,
        slot: usize,
    ) -> Option<GridSession> {
        if stack.kind != WIRELESS_GRID_ITEM {
            return None;
        }
        Some(GridSession::Wireless(WirelessGrid::new(
            stack.clone(),
            slot,
            &self.defaults,
        )))
    }

    fn create_from_block_use(
        &self,
        _player: &Player,
        _pos: BlockPos,
        _host: &HostWorlds,
    ) -> Option<GridSession> {
        None
    }
}

/// Factory for wireless fluid grids.
pub struct WirelessFluidGridFactory {
    defaults: GridSettings,
}

impl WirelessFluidGridFactory {
    /// Creates the factory with the configured default settings.
    pub fn new(defaults: GridSettings) -> Self {
        Self { defaults }
    }
}

impl GridFactory for WirelessFluidGridFactory {
    fn kind(&self) -> FactoryKind {
        FactoryKind::Item
    }

    fn create_from_item_use(
        &self,
        _player: &Player,
        stack: &ItemStack,
        slot: usize,
    ) -> Option<GridSession> {
        if stack.kind != WIRELESS_FLUID_GRID_ITEM {
            return None;
        }
        Some(GridSession::WirelessFluid(WirelessFluidGrid::new(
            stack.clone(),
            slot,
            &self.defaults,
        )))
    }

    fn create_from_block_use(
        &self,
        _player: &Player,
        _pos: BlockPos,
        _host: &HostWorlds,
    ) -> Option<GridSession> {
        None
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// String-id keyed factory registry.
#[derive(Default)]
pub struct GridFactoryRegistry {
    factories: HashMap<String, Box<dyn GridFactory>>,
}

impl GridFactoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry with the three built-in factories, all using the
    /// same configured defaults.
    pub fn with_builtin(defaults: GridSettings) -> Self {
        let mut registry = Self::new();
        registry.register(GRID_FACTORY_ID, Box::new(BlockGridFactory::new(defaults)));
        registry.register(
            WIRELESS_GRID_FACTORY_ID,
            Box::new(WirelessGridFactory::new(defaults)),
        );
        registry.register(
            WIRELESS_FLUID_GRID_FACTORY_ID,
            Box::new(WirelessFluidGridFactory::new(defaults)),
        );
        registry
    }

    /// Registers `factory` under `id`, replacing any previous registration.
    pub fn register(&mut self, id: &str, factory: Box<dyn GridFactory>) {
        self.factories.insert(id.to_string(), factory);
    }

    /// Looks up a factory by id.
    pub fn get(&self, id: &str) -> Option<&dyn GridFactory> {
        self.factories.get(id).map(Box::as_ref)
    }

    /// Registered factory ids.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use lodestore_host::{
        BlockEntity, BlockEntityKind, HostWorld, Network, NetworkId, NetworkNode, PlayerId,
        WorldId,
    };
    use lodestore_item::ItemKind;

    fn player() -> Player {
        Player::new(PlayerId(1), WorldId(0))
    }

    fn host_with_grid_block(pos: BlockPos) -> HostWorlds {
        let mut host = HostWorlds::new();
        host.set_network(Network::new(NetworkId(1)));
        let mut world = HostWorld::new();
        world.set_block_entity(
            pos,
            BlockEntity::new(BlockEntityKind::Grid, Some(NetworkNode::bound(NetworkId(1)))),
        );
        host.set_world(WorldId(0), world);
        host
    }

    #[test]
    fn test_block_factory_serves_only_the_block_branch() {
        let factory = BlockGridFactory::new(GridSettings::default());
        assert_eq!(factory.kind(), FactoryKind::Block);

        let pos = BlockPos::new(1, 2, 3);
        let host = host_with_grid_block(pos);
        let stack = ItemStack::new(WIRELESS_GRID_ITEM);

        assert!(factory.create_from_item_use(&player(), &stack, 0).is_none());
        let session = factory.create_from_block_use(&player(), pos, &host);
        assert!(matches!(session, Some(GridSession::Block(_))));
    }

    #[test]
    fn test_wireless_factory_serves_only_the_item_branch() {
        let factory = WirelessGridFactory::new(GridSettings::default());
        assert_eq!(factory.kind(), FactoryKind::Item);

        let pos = BlockPos::new(1, 2, 3);
        let host = host_with_grid_block(pos);
        let stack = ItemStack::new(WIRELESS_GRID_ITEM);

        assert!(factory.create_from_block_use(&player(), pos, &host).is_none());
        let session = factory.create_from_item_use(&player(), &stack, 4);
        assert!(matches!(session, Some(GridSession::Wireless(_))));
    }

    #[test]
    fn test_item_factories_check_the_item_kind() {
        let wireless = WirelessGridFactory::new(GridSettings::default());
        let fluid = WirelessFluidGridFactory::new(GridSettings::default());
        let wrong = ItemStack::new(ItemKind(0x99));

        assert!(wireless.create_from_item_use(&player(), &wrong, 0).is_none());
        assert!(fluid.create_from_item_use(&player(), &wrong, 0).is_none());

        let fluid_stack = ItemStack::new(WIRELESS_FLUID_GRID_ITEM);
        assert!(
            matches!(
                fluid.create_from_item_use(&player(), &fluid_stack, 0),
                Some(GridSession::WirelessFluid(_))
            ),
            "fluid item must open a fluid session"
        );
        // The item-kind check keeps variants apart.
        assert!(
            wireless
                .create_from_item_use(&player(), &fluid_stack, 0)
                .is_none()
        );
    }

    #[test]
    fn test_block_factory_rejects_non_grid_blocks() {
        let factory = BlockGridFactory::new(GridSettings::default());
        let pos = BlockPos::new(1, 2, 3);
        let mut host = host_with_grid_block(pos);
        host.world_mut(WorldId(0)).unwrap().set_block_entity(
            pos,
            BlockEntity::new(BlockEntityKind::Controller, None),
        );
        assert!(factory.create_from_block_use(&player(), pos, &host).is_none());
    }

    #[test]
    fn test_registry_builtin_ids() {
        let registry = GridFactoryRegistry::with_builtin(GridSettings::default());
        assert!(registry.get(GRID_FACTORY_ID).is_some());
        assert!(registry.get(WIRELESS_GRID_FACTORY_ID).is_some());
        assert!(registry.get(WIRELESS_FLUID_GRID_FACTORY_ID).is_some());
        assert!(registry.get("lodestore:unknown").is_none());
        assert_eq!(registry.ids().count(), 3);
    }
}
