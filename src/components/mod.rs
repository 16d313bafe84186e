pub mod card_grid;
pub mod control_bar;
pub mod detail_overlay;
pub mod pokedex_display;
pub mod theme;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use card_grid::{CardGrid, CardGridProps};
pub use control_bar::{ControlBar, ControlBarProps, CONTROL_BAR_HEIGHT};
pub use detail_overlay::{DetailOverlay, DetailOverlayProps};
pub use pokedex_display::{split_areas, PokedexDisplay, PokedexDisplayProps, ScreenAreas};
