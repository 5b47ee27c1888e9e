//! Grid sessions: player-facing views over storage networks.
//!
//! A grid is opened from a block or a handheld wireless item, binds to a
//! remote network by stored identity, and re-resolves that binding on every
//! access. Client-side setting changes go out over the settings channel
//! (`lodestore-net`) and are applied server-side with per-field validation;
//! both halves live here.

mod block;
mod data;
mod factory;
mod filter;
mod grid;
mod settings;
mod sync;
mod tasks;
mod wireless;
mod wireless_fluid;

pub use block::BlockGrid;
pub use data::{keys, read_filters, read_settings, read_target, write_filters, write_settings,
    write_target};
pub use factory::{
    BlockGridFactory, FactoryKind, GRID_FACTORY_ID, GridFactory, GridFactoryRegistry,
    WIRELESS_FLUID_GRID_FACTORY_ID, WIRELESS_GRID_FACTORY_ID, WirelessFluidGridFactory,
    WirelessGridFactory,
};
pub use filter::{
    FilterCodecError, FilterList, GridFilter, GridTab, TABS_PER_PAGE, total_tab_pages,
};
pub use grid::{Grid, GridSession, GridType};
pub use settings::{
    GridSettings, GridSize, GridTarget, SearchBoxMode, SortingDirection, SortingType, ViewType,
};
pub use sync::{SessionRegistry, apply_settings_update};
pub use tasks::{FrameTaskQueue, ScreenKind, UiAction, UiTask};
pub use wireless::{WIRELESS_GRID_ITEM, WirelessGrid};
pub use wireless_fluid::{WIRELESS_FLUID_GRID_ITEM, WirelessFluidGrid};
