//! The grid session contract.
//!
//! A grid is a UI-bound view over a storage network, owned by one player at
//! a time. The [`Grid`] trait is what generic UI code consumes; the
//! concrete variants ([`BlockGrid`], [`WirelessGrid`],
//! [`WirelessFluidGrid`]) differ in where their settings persist and which
//! storage channel they expose. [`GridSession`] is the tagged union the
//! server keeps per player — receipt-side code matches on the tag, never on
//! a concrete type.
//!
//! Network access is re-resolved on every call. The remote block can
//! disappear between two accesses (chunk unload, block break), so a cached
//! reference would risk acting on stale state; `None` simply renders the
//! session inactive.

use lodestore_host::{HostWorlds, Network, PlayerId, StorageCache};
use lodestore_net::SettingsSink;

use crate::block::BlockGrid;
use crate::filter::{self, FilterList};
use crate::settings::{
    GridSettings, GridSize, SearchBoxMode, SortingDirection, SortingType, ViewType,
};
use crate::tasks::FrameTaskQueue;
use crate::wireless::WirelessGrid;
use crate::wireless_fluid::WirelessFluidGrid;

/// Which storage channel a grid browses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridType {
    /// Item storage.
    Normal,
    /// Fluid storage.
    Fluid,
}

/// A player's view over a storage network.
pub trait Grid {
    /// The storage channel this grid browses.
    fn grid_type(&self) -> GridType;

    /// Current settings.
    fn settings(&self) -> &GridSettings;

    /// The grid's filters and tabs.
    fn filters(&self) -> &FilterList;

    /// Translation key of the screen title.
    fn title(&self) -> &'static str;

    /// Resolves the live network, if the target still exists. Never cached.
    fn network<'a>(&self, host: &'a HostWorlds) -> Option<&'a Network>;

    /// Item-channel cache, for grids with item access.
    fn item_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache>;

    /// Fluid-channel cache, for grids with fluid access.
    fn fluid_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache>;

    /// The cache backing this grid's own view.
    fn storage_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache> {
        match self.grid_type() {
            GridType::Normal => self.item_cache(host),
            GridType::Fluid => self.fluid_cache(host),
        }
    }

    /// `true` when the network is reachable and running. An inactive grid
    /// renders greyed out; it never errors.
    fn is_active(&self, host: &HostWorlds) -> bool {
        self.network(host).is_some_and(Network::can_run)
    }

    /// Selected tab index, −1 for none.
    fn tab_selected(&self) -> i32 {
        self.settings().tab_selected
    }

    /// Current tab page, clamped to [`total_tab_pages`](Grid::total_tab_pages)
    /// in case tabs were removed since the page was persisted.
    fn tab_page(&self) -> i32 {
        self.settings().tab_page.min(self.total_tab_pages())
    }

    /// Last valid tab page index.
    fn total_tab_pages(&self) -> i32 {
        filter::total_tab_pages(self.filters().tab_count())
    }

    /// View type changed from the UI.
    fn on_view_type_changed(
        &mut self,
        view_type: ViewType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    );

    /// Sorting type changed from the UI.
    fn on_sorting_type_changed(
        &mut self,
        sorting_type: SortingType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    );

    /// Sorting direction changed from the UI.
    fn on_sorting_direction_changed(
        &mut self,
        direction: SortingDirection,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    );

    /// Search box mode changed from the UI.
    fn on_search_box_mode_changed(&mut self, mode: SearchBoxMode, sink: &mut dyn SettingsSink);

    /// Grid size changed from the UI.
    fn on_size_changed(
        &mut self,
        size: GridSize,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    );

    /// Tab clicked. Re-selecting the current tab deselects (−1).
    fn on_tab_selection_changed(
        &mut self,
        tab: i32,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    );

    /// Tab page changed. Accepted iff `0 ≤ page ≤ total_tab_pages`,
    /// otherwise ignored entirely.
    fn on_tab_page_changed(&mut self, page: i32, sink: &mut dyn SettingsSink);

    /// The player closed the screen.
    fn on_closed(&mut self, _player: PlayerId, _host: &mut HostWorlds) {}
}

// ---------------------------------------------------------------------------
// GridSession
// ---------------------------------------------------------------------------

/// A grid session tagged by kind. The settings-update handler matches this
/// tag against the incoming message kind.
#[derive(Debug)]
pub enum GridSession {
    /// Block-anchored grid.
    Block(BlockGrid),
    /// Wireless item grid.
    Wireless(WirelessGrid),
    /// Wireless fluid grid.
    WirelessFluid(WirelessFluidGrid),
}

macro_rules! with_grid {
    ($session:expr, $grid:ident => $body:expr) => {
        match $session {
            GridSession::Block($grid) => $body,
            GridSession::Wireless($grid) => $body,
            GridSession::WirelessFluid($grid) => $body,
        }
    };
}

impl Grid for GridSession {
    fn grid_type(&self) -> GridType {
        with_grid!(self, g => g.grid_type())
    }

    fn settings(&self) -> &GridSettings {
        with_grid!(self, g => g.settings())
    }

    fn filters(&self) -> &FilterList {
        with_grid!(self, g => g.filters())
    }

    fn title(&self) -> &'static str {
        with_grid!(self, g => g.title())
    }

    fn network<'a>(&self, host: &'a HostWorlds) -> Option<&'a Network> {
        with_grid!(self, g => g.network(host))
    }

    fn item_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache> {
        with_grid!(self, g => g.item_cache(host))
    }

    fn fluid_cache<'a>(&self, host: &'a HostWorlds) -> Option<&'a StorageCache> {
        with_grid!(self, g => g.fluid_cache(host))
    }

    fn on_view_type_changed(
        &mut self,
        view_type: ViewType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        with_grid!(self, g => g.on_view_type_changed(view_type, sink, ui))
    }

    fn on_sorting_type_changed(
        &mut self,
        sorting_type: SortingType,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        with_grid!(self, g => g.on_sorting_type_changed(sorting_type, sink, ui))
    }

    fn on_sorting_direction_changed(
        &mut self,
        direction: SortingDirection,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        with_grid!(self, g => g.on_sorting_direction_changed(direction, sink, ui))
    }

    fn on_search_box_mode_changed(&mut self, mode: SearchBoxMode, sink: &mut dyn SettingsSink) {
        with_grid!(self, g => g.on_search_box_mode_changed(mode, sink))
    }

    fn on_size_changed(
        &mut self,
        size: GridSize,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        with_grid!(self, g => g.on_size_changed(size, sink, ui))
    }

    fn on_tab_selection_changed(
        &mut self,
        tab: i32,
        sink: &mut dyn SettingsSink,
        ui: &mut FrameTaskQueue,
    ) {
        with_grid!(self, g => g.on_tab_selection_changed(tab, sink, ui))
    }

    fn on_tab_page_changed(&mut self, page: i32, sink: &mut dyn SettingsSink) {
        with_grid!(self, g => g.on_tab_page_changed(page, sink))
    }

    fn on_closed(&mut self, player: PlayerId, host: &mut HostWorlds) {
        with_grid!(self, g => g.on_closed(player, host))
    }
}
