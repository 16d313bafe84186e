use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::theme::{ACCENT_GOLD, BG_HEADER, BG_INPUT, TEXT_DIM, TEXT_INPUT, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::i18n;
use crate::state::{AppState, Focus};

/// Rows taken by the control bar, borders included.
pub const CONTROL_BAR_HEIGHT: u16 = 5;

/// Header with the search input, sort selector and generation selector
pub struct ControlBar {
    input: TextInput,
}

pub struct ControlBarProps<'a> {
    pub state: &'a AppState,
    /// Whether the search input owns the keyboard
    pub is_focused: bool,
}

impl Default for ControlBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl ControlBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cleared query restarts the input so its cursor is not left past the end.
    fn sync_input(&mut self, query: &str) {
        if query.is_empty() {
            self.input = TextInput::new();
        }
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(BG_INPUT),
            fg: Some(TEXT_INPUT),
        },
        placeholder_style: Some(Style::default().fg(TEXT_DIM).bg(BG_INPUT)),
        cursor_style: None,
    }
}

fn selector_line(value: &str, highlighted: bool) -> Line<'static> {
    let value_style = if highlighted {
        Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };
    Line::from(vec![
        Span::styled("◀ ", Style::default().fg(TEXT_DIM)),
        Span::styled(value.to_string(), value_style),
        Span::styled(" ▶", Style::default().fg(TEXT_DIM)),
    ])
}

fn label_line(label: &str, keys: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            label.to_string(),
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {keys}"), Style::default().fg(TEXT_DIM)),
    ])
}

impl Component<Action> for ControlBar {
    type Props<'a> = ControlBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchCancel],
            KeyCode::Enter | KeyCode::Down | KeyCode::Tab => return vec![Action::SearchSubmit],
            _ => {}
        }

        self.sync_input(&props.state.search_query);
        let input_props = TextInputProps {
            value: &props.state.search_query,
            placeholder: i18n::strings(props.state.lang).search_placeholder,
            is_focused: true,
            style: input_style(),
            on_change: Action::SearchQueryChange,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let s = i18n::strings(state.lang);

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(BG_HEADER).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_MAIN))
            .title(Line::from(Span::styled(
                " POKÉDEX ",
                Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
            )))
            .title(
                Line::from(format!(" {} [{}] ", s.language_name, state.lang.code().to_uppercase()))
                    .right_aligned(),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .spacing(2)
        .split(inner);
        let rows = |column: Rect| {
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(column)
        };

        // Search
        let search = rows(columns[0]);
        frame.render_widget(Paragraph::new(label_line(s.search, "/")), search[0]);
        self.sync_input(&state.search_query);
        let input_props = TextInputProps {
            value: &state.search_query,
            placeholder: s.search_placeholder,
            is_focused: props.is_focused || state.focus == Focus::Search,
            style: input_style(),
            on_change: Action::SearchQueryChange,
            on_submit: |_| Action::SearchSubmit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, search[1], input_props);

        // Sort
        let sort = rows(columns[1]);
        frame.render_widget(Paragraph::new(label_line(s.sort, "s/S")), sort[0]);
        let sort_label = state
            .sort
            .map(|option| option.label(state.lang))
            .unwrap_or(s.all);
        frame.render_widget(
            Paragraph::new(selector_line(sort_label, state.sort.is_some())),
            sort[1],
        );

        // Generation
        let generation = rows(columns[2]);
        frame.render_widget(
            Paragraph::new(label_line(s.generation, "g/G")),
            generation[0],
        );
        let generation_label = state
            .generation_filter
            .map(|generation| generation.to_string())
            .unwrap_or_else(|| s.all.to_string());
        frame.render_widget(
            Paragraph::new(selector_line(
                &generation_label,
                state.generation_filter.is_some(),
            )),
            generation[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn press(code: KeyCode) -> EventKind {
        EventKind::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_escape_cancels_search() {
        let mut bar = ControlBar::new();
        let state = AppState::default();
        let actions: Vec<_> = bar
            .handle_event(
                &press(KeyCode::Esc),
                ControlBarProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::SearchCancel);
    }

    #[test]
    fn test_enter_returns_to_grid() {
        let mut bar = ControlBar::new();
        let state = AppState::default();
        let actions: Vec<_> = bar
            .handle_event(
                &press(KeyCode::Enter),
                ControlBarProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::SearchSubmit);
    }

    #[test]
    fn test_unfocused_ignores_typing() {
        let mut bar = ControlBar::new();
        let state = AppState::default();
        let actions: Vec<_> = bar
            .handle_event(
                &EventKind::Key(key("a")),
                ControlBarProps {
                    state: &state,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_labels_follow_language() {
        let mut render = RenderHarness::new(100, CONTROL_BAR_HEIGHT);
        let mut bar = ControlBar::new();

        let mut state = AppState::default();
        let french = render.render_to_string_plain(|frame| {
            let props = ControlBarProps {
                state: &state,
                is_focused: false,
            };
            bar.render(frame, frame.area(), props);
        });
        assert!(french.contains("Rechercher"));
        assert!(french.contains("Génération"));
        assert!(french.contains("Tous"));

        state.lang = Lang::En;
        let english = render.render_to_string_plain(|frame| {
            let props = ControlBarProps {
                state: &state,
                is_focused: false,
            };
            bar.render(frame, frame.area(), props);
        });
        assert!(english.contains("Search"));
        assert!(english.contains("Generation"));
        assert!(english.contains("All"));
    }
}
