//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::catalog::{self, SortOption, SortTable};
use crate::i18n::Lang;

/// A name in every supported language
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LocalizedName {
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub en: String,
}

impl LocalizedName {
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Fr => &self.fr,
            Lang::En => &self.en,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spe_atk: u16,
    pub spe_def: u16,
    pub vit: u16,
}

/// One entry of the pokedex, as served by the API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pokemon {
    pub id: u32,
    pub generation: u8,
    pub name: LocalizedName,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_shiny: String,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub types: Vec<u32>,
    #[serde(default, rename = "evolvedFrom")]
    pub evolved_from: Option<LocalizedName>,
    #[serde(default, rename = "evolvesTo")]
    pub evolves_to: Option<LocalizedName>,
}

/// Where keyboard input goes when no overlay is open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Focus {
    #[default]
    Grid,
    Search,
}

/// Width of one card in the grid, borders included.
pub const CARD_WIDTH: u16 = 24;
/// Height of one card in the grid, borders included.
pub const CARD_HEIGHT: u16 = 5;
/// Rows taken by the header control bar, the message line and the status bar.
pub const CHROME_HEIGHT: u16 = 7;

pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Pokedex lifecycle: Empty → Loading → Loaded/Failed
    #[debug(skip)]
    pub pokedex: DataResource<Vec<Pokemon>>,

    /// Distinct generations, in order of first appearance
    #[debug(section = "Pokedex", label = "Generations", debug_fmt)]
    pub generations: Vec<u8>,

    /// Indices into the loaded entries: filtered, then sorted
    #[debug(skip)]
    pub visible: Vec<usize>,

    #[debug(section = "Filters", label = "Lang", debug_fmt)]
    pub lang: Lang,

    #[debug(section = "Filters", label = "Search")]
    pub search_query: String,

    #[debug(section = "Filters", label = "Sort", debug_fmt)]
    pub sort: Option<SortOption>,

    #[debug(section = "Filters", label = "Sort table", debug_fmt)]
    pub sort_table: SortTable,

    #[debug(section = "Filters", label = "Generation", debug_fmt)]
    pub generation_filter: Option<u8>,

    /// Position of the highlighted card within `visible`
    #[debug(section = "Grid", label = "Cursor")]
    pub cursor: usize,

    #[debug(section = "Grid", label = "Focus", debug_fmt)]
    pub focus: Focus,

    /// Entry shown in the detail overlay, as an index into the loaded entries
    #[debug(section = "Grid", label = "Opened", debug_fmt)]
    pub opened: Option<usize>,

    #[debug(skip)]
    pub terminal_size: (u16, u16),

    #[debug(skip)]
    pub tick_count: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pokedex: DataResource::Empty,
            generations: Vec::new(),
            visible: Vec::new(),
            lang: Lang::default(),
            search_query: String::new(),
            sort: None,
            sort_table: SortTable::default(),
            generation_filter: None,
            cursor: 0,
            focus: Focus::default(),
            opened: None,
            terminal_size: (80, 24),
            tick_count: 0,
        }
    }
}

impl AppState {
    pub fn new(lang: Lang, sort_table: SortTable) -> Self {
        Self {
            lang,
            sort_table,
            ..Self::default()
        }
    }

    /// All loaded entries, empty until the pokedex is loaded
    pub fn entries(&self) -> &[Pokemon] {
        self.pokedex.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries in display order
    pub fn visible_entries(&self) -> impl Iterator<Item = &Pokemon> + '_ {
        let entries = self.entries();
        self.visible.iter().filter_map(move |&idx| entries.get(idx))
    }

    pub fn entry_at_cursor(&self) -> Option<(usize, &Pokemon)> {
        let idx = *self.visible.get(self.cursor)?;
        self.entries().get(idx).map(|entry| (idx, entry))
    }

    pub fn opened_entry(&self) -> Option<&Pokemon> {
        self.opened.and_then(|idx| self.entries().get(idx))
    }

    pub fn is_loading(&self) -> bool {
        self.pokedex.is_empty() || self.pokedex.is_loading()
    }

    /// Recompute the filtered and sorted view from the current state.
    pub fn rebuild_visible(&mut self) {
        let entries = self.pokedex.data().map(Vec::as_slice).unwrap_or(&[]);
        let filtered = catalog::filter(
            entries,
            self.lang,
            &self.search_query,
            self.generation_filter,
        );
        let mode = self.sort.map(|option| self.sort_table.mode(option));
        self.visible = catalog::sort(entries, &filtered, mode, self.lang);
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    /// Cards per grid row for the current terminal width
    pub fn grid_columns(&self) -> usize {
        usize::from((self.terminal_size.0 / CARD_WIDTH).max(1))
    }

    /// Grid rows that fit on screen for the current terminal height
    pub fn grid_rows(&self) -> usize {
        let body = self.terminal_size.1.saturating_sub(CHROME_HEIGHT);
        usize::from((body / CARD_HEIGHT).max(1))
    }

    /// Move the cursor to `index`, clamped to the visible range.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if self.visible.is_empty() {
            self.cursor = 0;
            return false;
        }
        let bounded = index.min(self.visible.len() - 1);
        if bounded != self.cursor {
            self.cursor = bounded;
            return true;
        }
        false
    }
}
