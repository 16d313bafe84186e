//! Pokedex TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{
    detail_overlay, split_areas, Component, PokedexDisplay, PokedexDisplayProps,
};
use pokedex::config::{Args, Config};
use pokedex::effect::Effect;
use pokedex::logging;
use pokedex::reducer::reducer;
use pokedex::state::{AppState, Focus, LOADING_ANIM_TICK_MS};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{DebugRunOutput, DebugSession, DebugSessionError, ReplayItem};

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokedexComponentId {
    Grid,
    Search,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokedexContext {
    Grid,
    Search,
    Detail,
}

impl EventRoutingState<PokedexComponentId, PokedexContext> for AppState {
    fn focused(&self) -> Option<PokedexComponentId> {
        if self.opened.is_some() {
            Some(PokedexComponentId::Detail)
        } else if self.focus == Focus::Search {
            Some(PokedexComponentId::Search)
        } else {
            Some(PokedexComponentId::Grid)
        }
    }

    fn modal(&self) -> Option<PokedexComponentId> {
        if self.opened.is_some() {
            Some(PokedexComponentId::Detail)
        } else if self.focus == Focus::Search {
            Some(PokedexComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokedexComponentId) -> PokedexContext {
        match id {
            PokedexComponentId::Grid => PokedexContext::Grid,
            PokedexComponentId::Search => PokedexContext::Search,
            PokedexComponentId::Detail => PokedexContext::Detail,
        }
    }

    fn default_context(&self) -> PokedexContext {
        PokedexContext::Grid
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let (config, debug_args) = Args::parse().into_parts();
    logging::init(config.log_file.as_deref())?;
    tracing::info!(api_url = %config.api_url, lang = ?config.lang, "starting pokedex");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let mut initial = AppState::new(config.lang, config.sort_table);
    if let Ok(size) = crossterm::terminal::size() {
        initial.terminal_size = size;
    }
    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(initial) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, Arc::new(config), replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("pokedex closed");
    Ok(())
}

struct PokedexUi {
    display: PokedexDisplay,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            display: PokedexDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokedexComponentId>,
    ) {
        let areas = split_areas(area);
        event_ctx.set_component_area(PokedexComponentId::Search, areas.header);
        event_ctx.set_component_area(PokedexComponentId::Grid, areas.body);
        if state.opened.is_some() {
            event_ctx
                .set_component_area(PokedexComponentId::Detail, detail_overlay::modal_area(area));
        } else {
            event_ctx
                .component_areas
                .remove(&PokedexComponentId::Detail);
        }

        let props = PokedexDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }
}

fn respond(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

/// Modal parts of the screen swallow every key, even the ones they do not use.
fn respond_modal(actions: Vec<Action>) -> HandlerResponse<Action> {
    HandlerResponse {
        actions,
        consumed: true,
        needs_render: false,
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    config: Arc<Config>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokedexComponentId, PokedexContext> = EventBus::new();
    let keybindings: Keybindings<PokedexContext> = Keybindings::new();

    let ui_grid = Rc::clone(&ui);
    bus.register(PokedexComponentId::Grid, move |event, state| {
        respond(ui_grid.borrow_mut().display.handle_grid_event(&event.kind, state))
    });

    let ui_search = Rc::clone(&ui);
    bus.register(PokedexComponentId::Search, move |event, state| {
        respond_modal(
            ui_search
                .borrow_mut()
                .display
                .handle_search_event(&event.kind, state),
        )
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(PokedexComponentId::Detail, move |event, state| {
        respond_modal(
            ui_detail
                .borrow_mut()
                .display
                .handle_detail_event(&event.kind, state),
        )
    });

    // Card columns and page size depend on the terminal size
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => HandlerResponse {
            actions: vec![Action::UiTerminalResize(width, height)],
            consumed: false,
            needs_render: true,
        },
        _ => HandlerResponse::ignored(),
    });

    let effect_config = Arc::clone(&config);
    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &effect_config),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, config: &Config) {
    match effect {
        Effect::LoadPokedex => {
            let url = config.api_url.clone();
            ctx.tasks().spawn("pokedex", async move {
                match api::fetch_pokedex(&url).await {
                    Ok(entries) => Action::PokedexDidLoad(entries),
                    Err(e) => Action::PokedexDidError(e.to_string()),
                }
            });
        }
    }
}
