//! Action and reducer tests using EffectStore and TestHarness

use pokedex::{
    action::Action,
    components::{Component, PokedexDisplay, PokedexDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, LocalizedName, Pokemon, Stats},
};
use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};

fn pikachu() -> Pokemon {
    Pokemon {
        id: 25,
        generation: 1,
        name: LocalizedName {
            fr: "Pikachu".into(),
            en: "Pikachu".into(),
        },
        image: String::new(),
        image_shiny: String::new(),
        height: 0.4,
        weight: 6.0,
        stats: Stats::default(),
        types: vec![13],
        evolved_from: None,
        evolves_to: Some(LocalizedName {
            fr: "Raichu".into(),
            en: "Raichu".into(),
        }),
    }
}

#[test]
fn test_reducer_init_requests_load() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    assert!(store.state().pokedex.is_empty());
    assert!(store.state().is_loading());

    let result = store.dispatch(Action::Init);
    assert!(result.changed, "State should change");
    assert!(store.state().pokedex.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::LoadPokedex));
}

#[test]
fn test_reducer_load_once() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::Init);
    store.dispatch(Action::PokedexDidLoad(vec![pikachu()]));

    assert!(store.state().pokedex.is_loaded());
    assert_eq!(store.state().entries(), &[pikachu()]);

    // A second Init after the load does not refetch
    let result = store.dispatch(Action::Init);
    assert!(!result.changed);
    assert!(result.effects.is_empty());
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = PokedexDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("q s g l /", |state, event| {
        let props = PokedexDisplayProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_component_grid_keys() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = PokedexDisplay::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("S G c q", |state, event| {
        let props = PokedexDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(4);
    actions.assert_first(Action::FilterSortPrev);
    assert_emitted!(actions, Action::FilterGenerationPrev);
    assert_emitted!(actions, Action::FilterClear);
    assert_emitted!(actions, Action::Quit);
}

#[test]
fn test_action_categories() {
    let did_load = Action::PokedexDidLoad(Vec::new());
    let toggle = Action::UiToggleLang;
    let grid = Action::GridMove(1);
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("pokedex_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(grid.category(), Some("grid"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_pokedex_did());
    assert!(toggle.is_ui());
    assert!(grid.is_grid());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::Init);
    harness.emit(Action::SearchQueryChange("pika".into()));
    harness.emit(Action::PokedexDidError("oops".into()));

    let actions = harness.drain_emitted();
    actions.assert_count(3);
    assert_emitted!(actions, Action::PokedexDidError(_));
    assert_not_emitted!(actions, Action::Quit);
}
