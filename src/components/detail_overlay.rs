use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    centered_rect, BaseStyle, BorderStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::theme::{ACCENT_GOLD, ACCENT_RED, BG_MODAL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::catalog;
use crate::i18n::{self, Lang, Strings};
use crate::state::{LocalizedName, Pokemon};

const STAT_BAR_MAX: usize = 20;

pub struct DetailOverlayProps<'a> {
    pub pokemon: &'a Pokemon,
    /// Full list, used to resolve evolution names to entries
    pub entries: &'a [Pokemon],
    pub lang: Lang,
    pub is_focused: bool,
    pub on_close: fn() -> Action,
}

/// Modal card with everything known about one pokemon
pub struct DetailOverlay {
    modal: Modal,
}

impl Default for DetailOverlay {
    fn default() -> Self {
        Self {
            modal: Modal::new(),
        }
    }
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn modal_area(area: Rect) -> Rect {
    centered_rect(64, 22, area)
}

fn modal_style() -> ModalStyle {
    ModalStyle {
        dim_factor: 0.6,
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_GOLD)),
            }),
            padding: Padding::xy(2, 1),
            bg: Some(BG_MODAL),
            fg: Some(TEXT_MAIN),
        },
    }
}

fn modal_behavior() -> ModalBehavior {
    ModalBehavior {
        close_on_esc: true,
        close_on_backdrop: false,
    }
}

fn stat_bar(value: u16) -> String {
    let len = (usize::from(value) / 10).clamp(1, STAT_BAR_MAX);
    "█".repeat(len)
}

fn field<'a>(label: &str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label} : "), Style::default().fg(TEXT_DIM)),
        Span::styled(value, Style::default().fg(TEXT_MAIN)),
    ])
}

fn evolution_text(
    name: Option<&LocalizedName>,
    entries: &[Pokemon],
    lang: Lang,
    s: &Strings,
) -> String {
    let Some(name) = name.map(|name| name.get(lang)).filter(|name| !name.is_empty()) else {
        return s.none.to_string();
    };
    match catalog::find_by_name(entries, lang, name) {
        Some(entry) => format!("{name} (#{})", entry.id),
        None => name.to_string(),
    }
}

/// Lines shown inside the modal, in display order.
pub fn detail_lines(pokemon: &Pokemon, entries: &[Pokemon], lang: Lang) -> Vec<Line<'static>> {
    let s = i18n::strings(lang);
    let other = lang.toggle();

    let types = if pokemon.types.is_empty() {
        s.none.to_string()
    } else {
        pokemon
            .types
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("#{} ", pokemon.id), Style::default().fg(TEXT_DIM)),
            Span::styled(
                pokemon.name.get(lang).to_string(),
                Style::default().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", pokemon.name.get(other)),
                Style::default().fg(TEXT_DIM),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} : ", s.generation), Style::default().fg(TEXT_DIM)),
            Span::styled(pokemon.generation.to_string(), Style::default().fg(TEXT_MAIN)),
            Span::styled(format!("   {} : ", s.types), Style::default().fg(TEXT_DIM)),
            Span::styled(types, Style::default().fg(TEXT_MAIN)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} : ", s.height), Style::default().fg(TEXT_DIM)),
            Span::styled(format!("{} m", pokemon.height), Style::default().fg(TEXT_MAIN)),
            Span::styled(format!("   {} : ", s.weight), Style::default().fg(TEXT_DIM)),
            Span::styled(format!("{} kg", pokemon.weight), Style::default().fg(TEXT_MAIN)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            s.stats,
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        )),
    ];

    let stats = pokemon.stats;
    for (label, value) in [
        (s.hp, stats.hp),
        (s.atk, stats.atk),
        (s.def, stats.def),
        (s.spe_atk, stats.spe_atk),
        (s.spe_def, stats.spe_def),
        (s.vit, stats.vit),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(TEXT_DIM)),
            Span::styled(format!("{value:>3} "), Style::default().fg(TEXT_MAIN)),
            Span::styled(stat_bar(value), Style::default().fg(ACCENT_RED)),
        ]));
    }

    lines.push(Line::default());
    lines.push(field(
        s.evolved_from,
        evolution_text(pokemon.evolved_from.as_ref(), entries, lang, s),
    ));
    lines.push(field(
        s.evolves_to,
        evolution_text(pokemon.evolves_to.as_ref(), entries, lang, s),
    ));
    lines.push(Line::default());
    lines.push(field(s.image, pokemon.image.clone()));
    lines.push(field(s.image_shiny, pokemon.image_shiny.clone()));
    lines
}

impl Component<Action> for DetailOverlay {
    type Props<'a> = DetailOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let mut noop_render = |_frame: &mut Frame, _area: Rect| {};
        let modal_props = ModalProps {
            is_open: true,
            is_focused: true,
            area: Rect::default(),
            style: modal_style(),
            behavior: modal_behavior(),
            on_close: props.on_close,
            render_content: &mut noop_render,
        };
        let modal_actions: Vec<_> = self
            .modal
            .handle_event(event, modal_props)
            .into_iter()
            .collect();
        if !modal_actions.is_empty() {
            return modal_actions;
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        match key.code {
            KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => vec![(props.on_close)()],
            KeyCode::Char('l') => vec![Action::UiToggleLang],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = detail_lines(props.pokemon, props.entries, props.lang);
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            frame.render_widget(Paragraph::new(lines.clone()), content_area);
        };

        self.modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area(area),
                style: modal_style(),
                behavior: modal_behavior(),
                on_close: props.on_close,
                render_content: &mut render_content,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Stats;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    fn close() -> Action {
        Action::DetailClose
    }

    fn name(fr: &str, en: &str) -> LocalizedName {
        LocalizedName {
            fr: fr.into(),
            en: en.into(),
        }
    }

    fn entry(id: u32, fr: &str, en: &str) -> Pokemon {
        Pokemon {
            id,
            generation: 1,
            name: name(fr, en),
            image: format!("https://img.test/{id}.png"),
            image_shiny: format!("https://img.test/{id}-shiny.png"),
            height: 0.6,
            weight: 8.5,
            stats: Stats {
                hp: 39,
                atk: 52,
                def: 43,
                spe_atk: 60,
                spe_def: 50,
                vit: 65,
            },
            types: vec![10],
            evolved_from: None,
            evolves_to: None,
        }
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_stat_bar_is_bounded() {
        assert_eq!(stat_bar(0).chars().count(), 1);
        assert_eq!(stat_bar(65).chars().count(), 6);
        assert_eq!(stat_bar(255).chars().count(), STAT_BAR_MAX);
    }

    #[test]
    fn test_detail_lines_resolve_evolutions() {
        let mut charmander = entry(4, "Salamèche", "Charmander");
        charmander.evolves_to = Some(name("Reptincel", "Charmeleon"));
        charmander.evolved_from = Some(name("", ""));
        let entries = vec![charmander.clone(), entry(5, "Reptincel", "Charmeleon")];

        let french = plain(&detail_lines(&charmander, &entries, Lang::Fr));
        assert_eq!(french[0], "#4 Salamèche  Charmander");
        assert!(french.contains(&"Évolue en : Reptincel (#5)".to_string()));
        assert!(french.contains(&"Évolue de : Aucune".to_string()));
        assert!(french.contains(&"Taille : 0.6 m   Poids : 8.5 kg".to_string()));

        let english = plain(&detail_lines(&charmander, &entries, Lang::En));
        assert_eq!(english[0], "#4 Charmander  Salamèche");
        assert!(english.contains(&"Evolves into : Charmeleon (#5)".to_string()));
    }

    #[test]
    fn test_unknown_evolution_keeps_name() {
        let mut bulbasaur = entry(1, "Bulbizarre", "Bulbasaur");
        bulbasaur.evolves_to = Some(name("Herbizarre", "Ivysaur"));
        let lines = plain(&detail_lines(&bulbasaur, &[], Lang::En));
        assert!(lines.contains(&"Evolves into : Ivysaur".to_string()));
    }

    #[test]
    fn test_keys_close_or_toggle_language() {
        let pokemon = entry(1, "Bulbizarre", "Bulbasaur");
        let mut overlay = DetailOverlay::new();
        let mut send = |event: EventKind| -> Vec<Action> {
            overlay
                .handle_event(
                    &event,
                    DetailOverlayProps {
                        pokemon: &pokemon,
                        entries: &[],
                        lang: Lang::Fr,
                        is_focused: true,
                        on_close: close,
                    },
                )
                .into_iter()
                .collect()
        };

        send(EventKind::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
            .assert_first(Action::DetailClose);
        send(EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .assert_first(Action::DetailClose);
        send(EventKind::Key(key("l"))).assert_first(Action::UiToggleLang);
        send(EventKind::Key(key("x"))).assert_empty();
    }

    #[test]
    fn test_render_shows_stats() {
        let pokemon = entry(4, "Salamèche", "Charmander");
        let mut render = RenderHarness::new(80, 24);
        let mut overlay = DetailOverlay::new();
        let output = render.render_to_string_plain(|frame| {
            let props = DetailOverlayProps {
                pokemon: &pokemon,
                entries: &[],
                lang: Lang::En,
                is_focused: true,
                on_close: close,
            };
            overlay.render(frame, frame.area(), props);
        });
        assert!(output.contains("Charmander"));
        assert!(output.contains("Stats"));
        assert!(output.contains(" 65 "));
    }
}
