//! The wireless item grid: a handheld session over a remote network.
//!
//! The carrying item persists the target block's identity (written when the
//! item is bound to a grid block) plus the player's view settings and
//! filters. At use time the session re-resolves the target through the
//! world lookup chain on every access; settings changes are pushed to the
//! server through the settings channel and written through to the stack's
//! tag immediately.

use lodestore_host::{HostWorlds, Network, PlayerId, StorageCache};
use lodestore_item::{ItemKind, ItemStack};
use lodestore_net::{SettingsSink, SettingsUpdate, WirelessGridSettingsUpdate};

use crate::data::{self, keys};
use crate::filter::{self, FilterList};
use crate::grid::{Grid, GridType};
use crate::settings::{
    GridSettings, GridSize, GridTarget, SearchBoxMode, SortingDirection, SortingType, ViewType,
};
use crate::tasks::{FrameTaskQueue, ScreenKind, UiAction, UiTask};

/// Host-registered item kind of the wireless grid item.
pub const WIRELESS_GRID_ITEM: ItemKind = ItemKind(0x20);

/// A wireless item-grid session.
#[derive(Debug)]
pub struct WirelessGrid {
    stack: ItemStack,
    slot: usize,
    target: Option<GridTarget>,
    settings: GridSettings,
    filters: FilterList,
}

impl WirelessGrid {
    /// Opens a session over the given stack. Settings, filters, and the
    /// target identity are read from the stack's tag; missing or invalid
    /// entries fall back to `defaults`.
    pub fn new(stack: ItemStack, slot: usize, defaults: &GridSettings) -> Self {
        let target = data::read_target(stack.tag());
        let settings = data::read_settings(stack.tag(), defaults);
        let filters = data::read_filters(stack.tag());
        Self {
            stack,
            slot,
            target,
            settings,
            filters,
        }
    }

    /// The carrying stack.
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Inventory slot the stack was used from.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// The bound target, if the item has been configured.
    pub fn target(&self) -> Option<GridTarget> {
        self.target
    }

    /// Replaces the filter list, writing it through to the stack tag.
    pub fn update_filters(&mut self, filters: FilterList) {
        self.filters = filters;
        data::write_filters(self.stack.tag_or_insert(), &self.filters);
    }

    /// Registers the player's open session with the network, if reachable.
    pub fn on_opened(&self, player: PlayerId, host: &mut HostWorlds) {
        if let Some(id) = self.resolve_network_id(host)
            && let Some(network) = host.network_mut(id)
        {
            network.item_manager_mut().open(player);
        }
    }

    fn resolve_network_id(&self, host: &HostWorlds) -> Option<lodestore_host::NetworkId> {
        let target = self.target?;
        host.world(target.world)?
            .block_entity_at(target.pos)?
            .node()?
            .network
    }

    fn persist_setting(&mut self, key: &str, raw: i32) {
        self.stack.tag_or_insert().put_int(key, raw);
    }

    /// Snapshot of the current settings as a wire message. Callbacks
    /// overwrite the one field they change before sending.
    fn settings_message(&self) -> WirelessGridSettingsUpdate {
        WirelessGridSettingsUpdate {
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

    /// Applies a received settings message to this (server-side) session:
    /// enum fields are validated one by one and invalid values dropped with
    /// the prior value retained; tab fields apply unconditionally, trusting
    /// the sender-side clamp.
    pub(crate) fn apply_settings_message(&mut self, msg: &WirelessGridSettingsUpdate) {
        if let Some(v) = ViewType::from_raw(msg.view_type) {
            self.settings.view_type = v;
            self.persist_setting(keys::VIEW_TYPE, v.as_raw());
        } else {
            tracing::debug!(raw = msg.view_type, "dropped invalid view type");
        }
        if let Some(v) = SortingDirection::from_raw(msg.sorting_direction) {
            self.settings.sorting_direction = v;
            self.persist_setting(keys::SORTING_DIRECTION, v.as_raw());
        } else {
            tracing::debug!(raw = msg.sorting_direction, "dropped invalid sorting direction");
        }
        if let Some(v) = SortingType::from_raw(msg.sorting_type) {
            self.settings.sorting_type = v;
            self.persist_setting(keys::SORTING_TYPE, v.as_raw());
        } else {
            tracing::debug!(raw = msg.sorting_type, "dropped invalid sorting type");
        }
        if let Some(v) = SearchBoxMode::from_raw(msg.search_box_mode) {
            self.settings.search_box_mode = v;
            self.persist_setting(keys::SEARCH_BOX_MODE, v.as_raw());
        } else {
            tracing::debug!(raw = msg.search_box_mode, "dropped invalid search box mode");
        }
        if let Some(v) = GridSize::from_raw(msg.size) {
            self.settings.size = v;
            self.persist_setting(keys::SIZE, v.as_raw());
        } else {
            tracing::debug!(raw = msg.size, "dropped invalid size");
        }

        self.settings.tab_selected = msg.tab_selected;
        self.persist_setting(keys::TAB_SELECTED, msg.tab_selected);
        self.settings.tab_page = msg.tab_page;
        self.persist_setting(keys::TAB_PAGE, msg.tab_page);
    }
}

impl Grid for WirelessGrid {
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
        let target = self.target?;
        let node = host
            .world(target.world)?
            .block_entity_at(target.pos)?
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
        sink.send(SettingsUpdate::WirelessGrid(msg));
        self.settings.view_type = view_type;
        self.persist_setting(keys::VIEW_TYPE, view_type.as_raw());
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
        sink.send(SettingsUpdate::WirelessGrid(msg));
        self.settings.sorting_type = sorting_type;
        self.persist_setting(keys::SORTING_TYPE, sorting_type.as_raw());
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
        sink.send(SettingsUpdate::WirelessGrid(msg));
        self.settings.sorting_direction = direction;
        self.persist_setting(keys::SORTING_DIRECTION, direction.as_raw());
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_search_box_mode_changed(&mut self, mode: SearchBoxMode, sink: &mut dyn SettingsSink) {
        let mut msg = self.settings_message();
        msg.search_box_mode = mode.as_raw();
        sink.send(SettingsUpdate::WirelessGrid(msg));
        self.settings.search_box_mode = mode;
        self.persist_setting(keys::SEARCH_BOX_MODE, mode.as_raw());
    }

    fn on_size_changed(
        &mut self,
        size: GridSize,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        let mut msg = self.settings_message();
        msg.size = size.as_raw();
        sink.send(SettingsUpdate::WirelessGrid(msg));
        self.settings.size = size;
        self.persist_setting(keys::SIZE, size.as_raw());
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
        self.persist_setting(keys::TAB_SELECTED, self.settings.tab_selected);
        sink.send(SettingsUpdate::WirelessGrid(self.settings_message()));
        ui.schedule(UiTask {
            screen: ScreenKind::Grid,
            action: UiAction::SortView,
        });
    }

    fn on_tab_page_changed(&mut self, page: i32, sink: &mut dyn SettingsSink) {
        if page >= 0 && page <= filter::total_tab_pages(self.filters.tab_count()) {
            let mut msg = self.settings_message();
            msg.tab_page = page;
            sink.send(SettingsUpdate::WirelessGrid(msg));
            self.settings.tab_page = page;
            self.persist_setting(keys::TAB_PAGE, page);
        }
    }

    fn on_closed(&mut self, player: PlayerId, host: &mut HostWorlds) {
        if let Some(id) = self.resolve_network_id(host)
            && let Some(network) = host.network_mut(id)
        {
            network.item_manager_mut().close(player);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
