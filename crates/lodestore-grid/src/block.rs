//! The block-anchored grid: a session opened by using a grid block.
//!
//! Unlike the wireless variants, the authoritative copy of a block grid's
//! settings lives in the grid block entity's data blob on the server. The
//! client session mutates its local copy and pushes changes over the
//! settings channel; only the receipt-side apply writes the blob.

use lodestore_host::{BlockEntityKind, HostWorlds, Network, StorageCache};
use lodestore_net::{GridSettingsUpdate, SettingsSink, SettingsUpdate};

use crate::data;
use crate::filter::{self, FilterList};
use crate::grid::{Grid, GridType};
use crate::settings::{
    GridSettings, GridSize, GridTarget, SearchBoxMode, SortingDirection, SortingType, ViewType,
};
use crate::tasks::{FrameTaskQueue, ScreenKind, UiAction, UiTask};

/// A block-anchored grid session.
#[derive(Debug)]
pub struct BlockGrid {
    target: GridTarget,
    settings: GridSettings,
    filters: FilterList,
}

impl BlockGrid {
    /// Opens a session over the grid block at `target`. Returns `None` if
    /// the block entity is missing or is not a grid.
    pub fn new(target: GridTarget, host: &HostWorlds, defaults: &GridSettings) -> Option<Self> {
        let entity = host.world(target.world)?.block_entity_at(target.pos)?;
        if entity.kind != BlockEntityKind::Grid {
            return None;
        }
        Some(Self {
            target,
            settings: data::read_settings(Some(&entity.data), defaults),
            filters: data::read_filters(Some(&entity.data)),
        })
    }

    /// The block this session is anchored to.
    pub fn target(&self) -> GridTarget {
        self.target
    }

    fn settings_message(&self) -> GridSettingsUpdate {
        GridSettingsUpdate {
            view_type: self.settings.view_type.as_raw(),
            sorting_direction: self.settings.sorting_direction.as_raw(),
            sorting_type: self.settings.sorting_type.as_raw(),
            search_box_mode: self.settings.search_box_mode.as_raw(),
            size: self.settings.size.as_raw(),
            tab_selected: self.settings.tab_selected,
            tab_page: self
                .settings
                .tab_page
                .min(filter::total_tab_pages(self.filters.tab_count())),
        }
    }

    /// Receipt-side apply: validated fields update the session and persist
    /// into the block entity's data blob; tab fields apply unconditionally.
    /// If the block has vanished, the in-memory session still updates (it
    /// renders inactive regardless) and persistence is skipped.
    pub(crate) fn apply_settings_message(&mut self, msg: &GridSettingsUpdate, host: &mut HostWorlds) {
        if let Some(v) = ViewType::from_raw(msg.view_type) {
            self.settings.view_type = v;
        } else {
            tracing::debug!(raw = msg.view_type, "dropped invalid view type");
        }
        if let Some(v) = SortingDirection::from_raw(msg.sorting_direction) {
            self.settings.sorting_direction = v;
        } else {
            tracing::debug!(raw = msg.sorting_direction, "dropped invalid sorting direction");
        }
        if let Some(v) = SortingType::from_raw(msg.sorting_type) {
            self.settings.sorting_type = v;
        } else {
            tracing::debug!(raw = msg.sorting_type, "dropped invalid sorting type");
        }
        if let Some(v) = SearchBoxMode::from_raw(msg.search_box_mode) {
            self.settings.search_box_mode = v;
        } else {
            tracing::debug!(raw = msg.search_box_mode, "dropped invalid search box mode");
        }
        if let Some(v) = GridSize::from_raw(msg.size) {
            self.settings.size = v;
        } else {
            tracing::debug!(raw = msg.size, "dropped invalid size");
        }
        self.settings.tab_selected = msg.tab_selected;
        self.settings.tab_page = msg.tab_page;

        if let Some(entity) = host
            .world_mut(self.target.world)
            .and_then(|w| w.block_entity_at_mut(self.target.pos))
        {
            data::write_settings(&mut entity.data, &self.settings);
        } else {
            tracing::debug!(pos = ?self.target.pos, "grid block gone, settings not persisted");
        }
    }
}

impl Grid for BlockGrid {
    fn grid_type(&self) -> GridType {
        GridType::Normal
    }

    fn settings(&self) -> &GridSettings {
        &self.settings
    }

    fn filters(&self) -> &FilterList {
        &self.filters
    }

    fn title(&self) -> &'static str {
        "gui.lodestore.grid"
    }

    fn network<'a>(&self, host: &'a HostWorlds) -> Option<&'a Network> {
        let node = host
            .world(self.target.world)?
            .block_entity_at(self.target.pos)?
            .node()?;
        host.network(node)
    }

    fn item_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache> {
        self.network(host).map(Network::item_cache)
    }

    fn fluid_cache<'a>(&self, _host: &'a HostWorlds) -> Option<&'a StorageCache> {
        None
    }

    fn on_view_type_changed(
        &mut self,
        view_type: ViewType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        let mut msg = self.settings_message();
        msg.view_type = view_type.as_raw();
        sink.send(SettingsUpdate::Grid(msg));
        self.settings.view_type = view_type;
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_sorting_type_changed(
        &mut self,
        sorting_type: SortingType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        let mut msg = self.settings_message();
        msg.sorting_type = sorting_type.as_raw();
        sink.send(SettingsUpdate::Grid(msg));
        self.settings.sorting_type = sorting_type;
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_sorting_direction_changed(
        &mut self,
        direction: SortingDirection,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        let mut msg = self.settings_message();
        msg.sorting_direction = direction.as_raw();
        sink.send(SettingsUpdate::Grid(msg));
        self.settings.sorting_direction = direction;
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_search_box_mode_changed(&mut self, mode: SearchBoxMode, sink: &mut dyn SettingsSink) {
        let mut msg = self.settings_message();
        msg.search_box_mode = mode.as_raw();
        sink.send(SettingsUpdate::Grid(msg));
        self.settings.search_box_mode = mode;
    }

    fn on_size_changed(
        &mut self,
        size: GridSize,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        let mut msg = self.settings_message();
        msg.size = size.as_raw();
        sink.send(SettingsUpdate::Grid(msg));
        self.settings.size = size;
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::Relayout,
        });
    }

    fn on_tab_selection_changed(
        &mut self,
        tab: i32,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        self.settings.tab_selected = if tab == self.settings.tab_selected {
            -1
        } else {
            tab
        };
        sink.send(SettingsUpdate::Grid(self.settings_message()));
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_tab_page_changed(&mut self, page: i32, sink: &mut dyn SettingsSink) {
        if page >= 0 && page <= filter::total_tab_pages(self.filters.tab_count()) {
            let mut msg = self.settings_message();
            msg.tab_page = page;
            sink.send(SettingsUpdate::Grid(msg));
            self.settings.tab_page = page;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::keys;
    use lodestore_host::{
        BlockEntity, BlockPos, HostWorld, Network, NetworkId, NetworkNode, WorldId,
    };
    use lodestore_net::queued_sink;

    const WORLD: WorldId = WorldId(2);
    const NET: NetworkId = NetworkId(7);

    fn pos() -> BlockPos {
        BlockPos::new(-4, 12, 30)
    }

    fn host() -> HostWorlds {
        let mut host = HostWorlds::new();
        host.set_network(Network::new(NET));
        let mut world = HostWorld::new();
        world.set_block_entity(
            pos(),
            BlockEntity::new(BlockEntityKind::Grid, Some(NetworkNode::bound(NET))),
        );
        host.set_world(WORLD, world);
        host
    }

    #[test]
    fn test_opens_only_on_grid_blocks() {
        let mut h = host();
        let target = GridTarget::new(WORLD, pos());
        assert!(BlockGrid::new(target, &h, &GridSettings::default()).is_some());

        // Replace with a non-grid entity.
        h.world_mut(WORLD).unwrap().set_block_entity(
            pos(),
            BlockEntity::new(BlockEntityKind::Controller, Some(NetworkNode::bound(NET))),
        );
        assert!(BlockGrid::new(target, &h, &GridSettings::default()).is_none());

        // Missing entity entirely.
        let other = GridTarget::new(WORLD, BlockPos::new(0, 0, 0));
        assert!(BlockGrid::new(other, &h, &GridSettings::default()).is_none());
    }

    #[test]
    fn test_resolves_through_own_node() {
        let h = host();
        let grid = BlockGrid::new(GridTarget::new(WORLD, pos()), &h, &GridSettings::default())
            .unwrap();
        assert_eq!(grid.network(&h).unwrap().id(), NET);
        assert!(grid.is_active(&h));
    }

    #[test]
    fn test_settings_read_from_block_entity_data() {
        let mut h = host();
        let entity = h
            .world_mut(WORLD)
            .unwrap()
            .block_entity_at_mut(pos())
            .unwrap();
        entity.data.put_int(keys::SIZE, GridSize::Large.as_raw());

        let grid = BlockGrid::new(GridTarget::new(WORLD, pos()), &h, &GridSettings::default())
            .unwrap();
        assert_eq!(grid.settings().size, GridSize::Large);
    }

    #[test]
    fn test_callback_sends_block_grid_message() {
        let h = host();
        let mut grid =
            BlockGrid::new(GridTarget::new(WORLD, pos()), &h, &GridSettings::default()).unwrap();
        let (mut sink, rx) = queued_sink();
        let mut ui = FrameTaskQueue::new();

        grid.on_view_type_changed(ViewType::Craftables, &mut sink, &mut ui);
        match rx.try_recv().unwrap() {
            SettingsUpdate::Grid(m) => {
                assert_eq!(m.view_type, ViewType::Craftables.as_raw());
            }
            other => panic!("unexpected update: {other:?}"),
        }
        assert_eq!(grid.settings().view_type, ViewType::Craftables);
    }

    #[test]
    fn test_apply_persists_into_block_entity() {
        let mut h = host();
        let mut grid =
            BlockGrid::new(GridTarget::new(WORLD, pos()), &h, &GridSettings::default()).unwrap();

        let msg = GridSettingsUpdate {
            view_type: 1,
            sorting_direction: 0,
            sorting_type: 2,
            search_box_mode: 0,
            size: 2,
            tab_selected: -1,
            tab_page: 0,
        };
        grid.apply_settings_message(&msg, &mut h);

        let entity = h.world(WORLD).unwrap().block_entity_at(pos()).unwrap();
        assert_eq!(entity.data.int(keys::SORTING_TYPE), Some(2));
        assert_eq!(entity.data.int(keys::SIZE), Some(2));
        assert_eq!(grid.settings().view_type, ViewType::NonCraftables);
    }

    #[test]
    fn test_apply_with_block_gone_updates_memory_only() {
        let mut h = host();
        let mut grid =
            BlockGrid::new(GridTarget::new(WORLD, pos()), &h, &GridSettings::default()).unwrap();
        h.world_mut(WORLD).unwrap().remove_block_entity(pos());

        let msg = GridSettingsUpdate {
            view_type: 2,
            sorting_direction: 1,
            sorting_type: 0,
            search_box_mode: 0,
            size: 0,
            tab_selected: -1,
            tab_page: 0,
        };
        // Must not panic; session updates, nothing to persist.
        grid.apply_settings_message(&msg, &mut h);
        assert_eq!(grid.settings().view_type, ViewType::Craftables);
        assert!(!grid.is_active(&h));
    }
}
