use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps,
    StatusBarSection, StatusBarStyle,
};

use super::control_bar::CONTROL_BAR_HEIGHT;
use super::theme::{ACCENT_GOLD, BG_HEADER, TEXT_DIM, TEXT_MAIN};
use super::{
    CardGrid, CardGridProps, Component, ControlBar, ControlBarProps, DetailOverlay,
    DetailOverlayProps,
};
use crate::action::Action;
use crate::i18n;
use crate::state::{AppState, Focus};

/// Props for PokedexDisplay - read-only view of state
pub struct PokedexDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Screen areas, top to bottom
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn split_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(CONTROL_BAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);
    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

fn close_detail() -> Action {
    Action::DetailClose
}

/// The whole pokedex screen: control bar, card grid, status bar and detail overlay
pub struct PokedexDisplay {
    control_bar: ControlBar,
    grid: CardGrid,
    detail: DetailOverlay,
    status_bar: StatusBar,
}

impl Default for PokedexDisplay {
    fn default() -> Self {
        Self {
            control_bar: ControlBar::new(),
            grid: CardGrid,
            detail: DetailOverlay::new(),
            status_bar: StatusBar::new(),
        }
    }
}

impl PokedexDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_grid_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let props = CardGridProps {
            state,
            is_focused: true,
        };
        self.grid.handle_event(event, props).into_iter().collect()
    }

    pub fn handle_search_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let props = ControlBarProps {
            state,
            is_focused: true,
        };
        self.control_bar
            .handle_event(event, props)
            .into_iter()
            .collect()
    }

    pub fn handle_detail_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let Some(pokemon) = state.opened_entry() else {
            return Vec::new();
        };
        let props = DetailOverlayProps {
            pokemon,
            entries: state.entries(),
            lang: state.lang,
            is_focused: true,
            on_close: close_detail,
        };
        self.detail.handle_event(event, props).into_iter().collect()
    }

    fn render_status(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = i18n::strings(state.lang);
        let hints = if state.opened.is_some() {
            vec![
                StatusBarHint::new("Esc", s.hint_close),
                StatusBarHint::new("l", s.hint_language),
            ]
        } else if state.focus == Focus::Search {
            vec![
                StatusBarHint::new("Enter", s.hint_apply),
                StatusBarHint::new("Esc", s.hint_cancel),
            ]
        } else {
            vec![
                StatusBarHint::new("←↑↓→", s.hint_move),
                StatusBarHint::new("Enter", s.hint_open),
                StatusBarHint::new("/", s.hint_search),
                StatusBarHint::new("s/S", s.hint_sort),
                StatusBarHint::new("g/G", s.hint_generation),
                StatusBarHint::new("l", s.hint_language),
                StatusBarHint::new("c", s.hint_clear),
                StatusBarHint::new("q", s.hint_quit),
            ]
        };

        let count = format!("{}/{}", state.visible.len(), state.entries().len());
        let count_items = [StatusBarItem::span(Span::styled(
            count,
            Style::default().fg(ACCENT_GOLD),
        ))];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(BG_HEADER),
                fg: Some(TEXT_MAIN),
            },
            text: Style::default().fg(TEXT_MAIN),
            hint_key: Style::default()
                .fg(ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_MAIN),
            separator: Style::default().fg(TEXT_DIM),
        };

        <StatusBar as Component<Action>>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::hints(&hints).with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&count_items),
                style,
                is_focused: false,
            },
        );
    }
}

impl Component<Action> for PokedexDisplay {
    type Props<'a> = PokedexDisplayProps<'a>;

    /// Route the event to whichever part of the screen owns the keyboard.
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let state = props.state;
        if state.opened.is_some() {
            self.handle_detail_event(event, state)
        } else if state.focus == Focus::Search {
            self.handle_search_event(event, state)
        } else {
            self.handle_grid_event(event, state)
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: PokedexDisplayProps<'_>) {
        let state = props.state;
        let areas = split_areas(area);
        let overlay_open = state.opened.is_some();

        self.control_bar.render(
            frame,
            areas.header,
            ControlBarProps {
                state,
                is_focused: props.is_focused && !overlay_open && state.focus == Focus::Search,
            },
        );

        self.grid.render(
            frame,
            areas.body,
            CardGridProps {
                state,
                is_focused: props.is_focused && !overlay_open && state.focus == Focus::Grid,
            },
        );

        self.render_status(frame, areas.status, state);

        if let Some(pokemon) = state.opened_entry() {
            self.detail.render(
                frame,
                area,
                DetailOverlayProps {
                    pokemon,
                    entries: state.entries(),
                    lang: state.lang,
                    is_focused: props.is_focused,
                    on_close: close_detail,
                },
            );
        }
    }
}
