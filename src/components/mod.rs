pub mod detail_panel;
pub mod dex_grid;
pub mod loading;
pub mod navigator;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_panel::{DetailPanel, DetailPanelProps};
pub use dex_grid::{DexGrid, DexGridProps, CARD_HEIGHT, GRID_COLUMNS};
pub use loading::{LoadingIndicator, LoadingIndicatorProps};
pub use navigator::{Navigator, NavigatorProps};
