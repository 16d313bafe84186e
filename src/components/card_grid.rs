use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;

use super::theme::{
    ACCENT_GOLD, ACCENT_RED, BG_BADGE, BG_BASE, BG_CARD, BG_CARD_SELECTED, ERROR, TEXT_DIM,
    TEXT_MAIN,
};
use super::Component;
use crate::action::Action;
use crate::i18n;
use crate::state::{AppState, Pokemon, CARD_HEIGHT, CARD_WIDTH};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
const CARD_GLYPH: &str = "◓";

pub struct CardGridProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Grid of pokemon cards, with the loading or error line above it
#[derive(Default)]
pub struct CardGrid;

/// First visible grid row so that the cursor row is on screen, paging a full screen at a time.
pub fn first_visible_row(cursor: usize, columns: usize, rows: usize) -> usize {
    let cursor_row = cursor / columns.max(1);
    let rows = rows.max(1);
    (cursor_row / rows) * rows
}

fn message_line(state: &AppState) -> Option<Line<'static>> {
    let s = i18n::strings(state.lang);
    if state.is_loading() {
        let frame = SPINNER[state.tick_count as usize % SPINNER.len()];
        return Some(Line::from(vec![
            Span::styled(format!("{frame} "), Style::default().fg(ACCENT_RED)),
            Span::styled(s.loading, Style::default().fg(TEXT_DIM)),
        ]));
    }
    state.pokedex.error().map(|error| {
        Line::from(Span::styled(
            format!("{} : {error}", s.error),
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        ))
    })
}

fn render_card(frame: &mut Frame, area: Rect, entry: &Pokemon, state: &AppState, selected: bool) {
    let bg = if selected { BG_CARD_SELECTED } else { BG_CARD };
    let border = if selected { ACCENT_GOLD } else { TEXT_DIM };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg).fg(TEXT_MAIN));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    let header = Layout::horizontal([Constraint::Min(1), Constraint::Length(4)]).split(rows[0]);
    frame.render_widget(
        Paragraph::new(format!("#{}", entry.id)).style(Style::default().fg(TEXT_DIM)),
        header[0],
    );
    frame.render_widget(
        Paragraph::new(format!(" {} ", entry.generation))
            .alignment(Alignment::Right)
            .style(Style::default().bg(BG_BADGE).fg(TEXT_MAIN)),
        header[1],
    );

    frame.render_widget(
        Paragraph::new(CARD_GLYPH)
            .alignment(Alignment::Center)
            .style(Style::default().fg(ACCENT_RED)),
        rows[1],
    );

    let name_style = if selected {
        Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MAIN)
    };
    frame.render_widget(
        Paragraph::new(entry.name.get(state.lang).to_string())
            .alignment(Alignment::Center)
            .style(name_style),
        rows[2],
    );
}

impl Component<Action> for CardGrid {
    type Props<'a> = CardGridProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let state = props.state;

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Left => Some(Action::GridMove(-1)),
                KeyCode::Right => Some(Action::GridMove(1)),
                KeyCode::Up => Some(Action::GridMoveRows(-1)),
                KeyCode::Down => Some(Action::GridMoveRows(1)),
                KeyCode::PageUp => Some(Action::GridMoveRows(-page_rows(state))),
                KeyCode::PageDown => Some(Action::GridMoveRows(page_rows(state))),
                KeyCode::Home => Some(Action::GridHome),
                KeyCode::End => Some(Action::GridEnd),
                KeyCode::Enter => state
                    .entry_at_cursor()
                    .map(|(idx, _)| Action::DetailOpen(idx)),
                KeyCode::Char('/') => Some(Action::SearchFocus),
                KeyCode::Char('s') => Some(Action::FilterSortNext),
                KeyCode::Char('S') => Some(Action::FilterSortPrev),
                KeyCode::Char('g') => Some(Action::FilterGenerationNext),
                KeyCode::Char('G') => Some(Action::FilterGenerationPrev),
                KeyCode::Char('l') => Some(Action::UiToggleLang),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                KeyCode::Char('c') => Some(Action::FilterClear),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            EventKind::Scroll { delta, .. } if *delta != 0 => {
                Some(Action::GridMoveRows(delta.signum() as i16))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let s = i18n::strings(state.lang);

        frame.render_widget(Block::default().style(Style::default().bg(BG_BASE)), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Loading / error
            Constraint::Min(0),    // Cards
        ])
        .split(area);

        if let Some(line) = message_line(state) {
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), chunks[0]);
        }

        let grid = chunks[1];
        if state.visible.is_empty() {
            if !state.is_loading() {
                frame.render_widget(
                    Paragraph::new(s.no_results)
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(TEXT_DIM)),
                    grid,
                );
            }
            return;
        }

        let columns = usize::from((grid.width / CARD_WIDTH).max(1));
        let rows = usize::from((grid.height / CARD_HEIGHT).max(1));
        let first_row = first_visible_row(state.cursor, columns, rows);

        let used_width = (columns as u16 * CARD_WIDTH).min(grid.width);
        let left = grid.x + (grid.width - used_width) / 2;

        let entries = state.entries();
        let start = first_row * columns;
        let page = state.visible.iter().skip(start).take(columns * rows);
        for (offset, &idx) in page.enumerate() {
            let Some(entry) = entries.get(idx) else {
                continue;
            };
            let row = (offset / columns) as u16;
            let column = (offset % columns) as u16;
            let card = Rect {
                x: left + column * CARD_WIDTH,
                y: grid.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(grid.width),
                height: CARD_HEIGHT,
            };
            if card.bottom() > grid.bottom() {
                break;
            }
            let selected = props.is_focused && start + offset == state.cursor;
            render_card(frame, card, entry, state, selected);
        }
    }
}

fn page_rows(state: &AppState) -> i16 {
    i16::try_from(state.grid_rows()).unwrap_or(i16::MAX)
}
