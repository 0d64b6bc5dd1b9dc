//! Store flows and key handling through the test harnesses

use pokegrid::{
    action::Action,
    components::{Component, PokedexView, PokedexViewProps, SearchBar, SearchBarProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, PageWindow, Pokemon},
    theme::Theme,
};
use tui_dispatch::testing::*;
use tui_dispatch::{assert_emitted, assert_not_emitted, EffectStore, NumericComponentId};

fn pokemon(id: u32, name: &str, artwork: Option<&str>) -> Pokemon {
    Pokemon {
        id,
        name: name.into(),
        artwork_url: artwork.map(String::from),
        types: vec!["electric".into()],
    }
}

fn page() -> Vec<Pokemon> {
    vec![
        pokemon(25, "pikachu", Some("http://img/25.png")),
        pokemon(26, "raichu", None),
        pokemon(172, "pichu", Some("http://img/172.png")),
        pokemon(100, "voltorb", None),
    ]
}

fn loaded_state() -> AppState {
    AppState {
        pokemon: page(),
        show_artwork: false,
        ..Default::default()
    }
}

#[test]
fn test_startup_fetch_uses_configured_window() {
    let state = AppState::new(
        "http://localhost:8080/api/v2".into(),
        PageWindow {
            offset: 0,
            limit: 151,
        },
        Theme::Light,
        true,
    );
    let mut store = EffectStore::new(state, reducer);

    let result = store.dispatch(Action::PokedexFetch);

    assert!(result.changed);
    assert!(store.state().loading);
    assert_eq!(
        result.effects,
        vec![Effect::LoadPokedex {
            api_base: "http://localhost:8080/api/v2".into(),
            window: PageWindow {
                offset: 0,
                limit: 151
            },
        }]
    );
}

#[test]
fn test_load_flow_requests_artwork() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::PokedexFetch);
    harness.assert_state(|s| s.loading);
    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| matches!(e, Effect::LoadPokedex { .. }));

    harness.complete_action(Action::PokedexDidLoad(page()));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    harness.assert_state(|s| !s.loading && s.pokemon.len() == 4);
    let effects = harness.drain_effects();
    effects.effects_count(2);
    effects.effects_first_matches(|e| {
        matches!(e, Effect::LoadArtwork { name, .. } if name == "pikachu")
    });
}

#[test]
fn test_failed_load_looks_like_empty_page() {
    let mut harness = EffectStoreTestHarness::new(loaded_state(), reducer);

    harness.dispatch_collect(Action::PokedexFetch);
    harness.complete_action(Action::PokedexDidError("fetch failed".into()));
    harness.process_emitted();

    harness.assert_state(|s| !s.loading && s.pokemon.is_empty());
    harness.assert_state(|s| s.visible().is_empty());
}

#[test]
fn test_typing_filters_live_and_enter_keeps_term() {
    let mut harness = EffectStoreTestHarness::new(loaded_state(), reducer);
    let mut search = SearchBar::new();

    harness.dispatch_collect(Action::SearchOpen);
    harness.assert_state(|s| s.search_mode);

    let actions = harness.send_keys::<NumericComponentId, _, _>("p i", |state, event| {
        let props = SearchBarProps {
            query: &state.search_query,
            is_focused: state.search_mode,
            palette: state.theme.palette(),
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        };
        search
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    assert_emitted!(actions, Action::SearchQueryChange(_));

    harness.dispatch_collect(Action::SearchQueryChange("PI".into()));
    harness.assert_state(|s| s.visible().len() == 2);

    harness.dispatch_collect(Action::SearchQuerySubmit("PI".into()));
    harness.assert_state(|s| !s.search_mode && s.search_query == "PI");
    harness.assert_state(|s| s.visible().len() == 2);
}

#[test]
fn test_cancel_restores_full_page() {
    let mut harness = EffectStoreTestHarness::new(loaded_state(), reducer);

    harness.dispatch_collect(Action::SearchOpen);
    harness.dispatch_collect(Action::SearchQueryChange("volt".into()));
    harness.assert_state(|s| s.visible().len() == 1);

    harness.dispatch_collect(Action::SearchCancel);
    harness.assert_state(|s| !s.search_mode && s.search_query.is_empty());
    harness.assert_state(|s| s.visible().len() == 4);
}

#[test]
fn test_grid_keys_drive_selection_and_theme() {
    let mut harness = EffectStoreTestHarness::new(loaded_state(), reducer);
    let mut view = PokedexView::new();

    let actions = harness.send_keys::<NumericComponentId, _, _>("l l t", |state, event| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        view.handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_count(3);
    assert_emitted!(actions, Action::UiToggleTheme);
    assert_not_emitted!(actions, Action::Quit);

    for action in actions {
        harness.dispatch_collect(action);
    }

    harness.assert_state(|s| s.selected == 2);
    harness.assert_state(|s| s.theme == Theme::Dark);
}

#[test]
fn test_row_moves_follow_grid_width() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            // Two columns of cards.
            terminal_size: (60, 40),
            ..loaded_state()
        },
        reducer,
    );

    harness.dispatch_collect(Action::SelectionRow(1));
    harness.assert_state(|s| s.selected == 2);

    harness.dispatch_collect(Action::SelectionRow(1));
    harness.assert_state(|s| s.selected == 3);
}

#[test]
fn test_action_categories() {
    let did_load = Action::PokedexDidLoad(Vec::new());
    let toggle = Action::UiToggleTheme;

    assert_eq!(did_load.category(), Some("pokedex_did"));
    assert_eq!(toggle.category(), Some("ui"));
    assert_eq!(Action::Tick.category(), None);
    assert!(toggle.is_ui());
}
