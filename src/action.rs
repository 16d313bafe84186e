//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::Pokemon;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    /// Start the one-shot pokedex load
    Init,

    // ===== Pokedex category =====
    /// Result: entries received
    PokedexDidLoad(Vec<Pokemon>),

    /// Result: network, decode or validation failure
    PokedexDidError(String),

    // ===== Search category =====
    /// Move keyboard focus to the search input
    SearchFocus,

    /// Search text changed (live filter)
    SearchQueryChange(String),

    /// Leave the search input, keeping the query
    SearchSubmit,

    /// Leave the search input and clear the query
    SearchCancel,

    // ===== Filter category =====
    FilterSortNext,
    FilterSortPrev,
    FilterGenerationNext,
    FilterGenerationPrev,

    /// Drop search text, sort and generation filter
    FilterClear,

    // ===== Grid category =====
    /// Move the cursor by a number of cards
    GridMove(i16),

    /// Move the cursor by a number of rows
    GridMoveRows(i16),

    GridHome,
    GridEnd,

    // ===== Detail category =====
    /// Open the overlay for an entry (index into the loaded entries)
    DetailOpen(usize),

    DetailClose,

    // ===== UI category =====
    UiToggleLang,
    UiTerminalResize(u16, u16),

    /// Force a re-render (cursor movement in the search input)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading indicator
    Tick,

    Quit,
}
