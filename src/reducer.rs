//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::catalog::{self, SortOption};
use crate::effect::Effect;
use crate::state::{AppState, Focus};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            if !state.pokedex.is_empty() {
                return DispatchResult::unchanged();
            }
            state.pokedex = DataResource::Loading;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::LoadPokedex)
        }

        // ===== Pokedex actions =====
        Action::PokedexDidLoad(entries) => {
            if !state.pokedex.is_loading() {
                tracing::debug!("discarding pokedex result, load already settled");
                return DispatchResult::unchanged();
            }
            state.generations = catalog::generations(&entries);
            state.pokedex = DataResource::Loaded(entries);
            state.cursor = 0;
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::PokedexDidError(error) => {
            if !state.pokedex.is_loading() {
                tracing::debug!(%error, "discarding pokedex error, load already settled");
                return DispatchResult::unchanged();
            }
            tracing::error!(%error, "pokedex load failed");
            state.pokedex = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchFocus => {
            if state.focus == Focus::Search {
                return DispatchResult::unchanged();
            }
            state.focus = Focus::Search;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            if query == state.search_query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            state.cursor = 0;
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            state.focus = Focus::Grid;
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            state.focus = Focus::Grid;
            if !state.search_query.is_empty() {
                state.search_query.clear();
                state.cursor = 0;
                state.rebuild_visible();
            }
            DispatchResult::changed()
        }

        // ===== Filter actions =====
        Action::FilterSortNext => {
            state.sort = SortOption::cycle_next(state.sort);
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::FilterSortPrev => {
            state.sort = SortOption::cycle_prev(state.sort);
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::FilterGenerationNext => {
            state.generation_filter =
                catalog::cycle_generation(&state.generations, state.generation_filter, true);
            state.cursor = 0;
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::FilterGenerationPrev => {
            state.generation_filter =
                catalog::cycle_generation(&state.generations, state.generation_filter, false);
            state.cursor = 0;
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::FilterClear => {
            if state.search_query.is_empty()
                && state.sort.is_none()
                && state.generation_filter.is_none()
            {
                return DispatchResult::unchanged();
            }
            state.search_query.clear();
            state.sort = None;
            state.generation_filter = None;
            state.cursor = 0;
            state.rebuild_visible();
            DispatchResult::changed()
        }

        // ===== Grid actions =====
        Action::GridMove(delta) => {
            let target = offset(state.cursor, i64::from(delta));
            changed_if(state.set_cursor(target))
        }

        Action::GridMoveRows(rows) => {
            let columns = state.grid_columns() as i64;
            let target = offset(state.cursor, i64::from(rows) * columns);
            changed_if(state.set_cursor(target))
        }

        Action::GridHome => changed_if(state.set_cursor(0)),

        Action::GridEnd => changed_if(state.set_cursor(usize::MAX)),

        // ===== Detail actions =====
        Action::DetailOpen(index) => {
            if index >= state.entries().len() || state.opened == Some(index) {
                return DispatchResult::unchanged();
            }
            state.opened = Some(index);
            DispatchResult::changed()
        }

        Action::DetailClose => {
            if state.opened.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI actions =====
        Action::UiToggleLang => {
            state.lang = state.lang.toggle();
            state.rebuild_visible();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn offset(cursor: usize, delta: i64) -> usize {
    let target = cursor as i64 + delta;
    usize::try_from(target.max(0)).unwrap_or(0)
}

fn changed_if(changed: bool) -> DispatchResult<Effect> {
    if changed {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}
