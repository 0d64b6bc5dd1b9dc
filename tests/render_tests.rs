//! Whole-screen renders of the pokedex view

use pokegrid::{
    action::Action,
    components::{Component, PokedexView, PokedexViewProps},
    reducer::reducer,
    state::{AppState, Pokemon},
};
use tui_dispatch::testing::*;

fn chandelure() -> Pokemon {
    Pokemon {
        id: 100,
        name: "chandelure".into(),
        artwork_url: None,
        types: vec!["ghost".into(), "fire".into()],
    }
}

fn render_view(state: &AppState) -> String {
    let mut render = RenderHarness::new(100, 30);
    let mut view = PokedexView::new();
    render.render_to_string_plain(|frame| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_loading_screen() {
    let state = AppState {
        loading: true,
        tick_count: 3,
        ..Default::default()
    };

    let output = render_view(&state);

    assert!(
        output.contains("Loading Pokédex"),
        "Loading text should be visible:\n{}",
        output
    );
    assert!(!output.contains("Search Pok"));
}

#[test]
fn test_render_card_with_types() {
    let state = AppState {
        pokemon: vec![chandelure()],
        terminal_size: (100, 30),
        ..Default::default()
    };

    let output = render_view(&state);

    assert!(output.contains("Pokédex"));
    assert!(output.contains("Search Pokémon..."));
    assert!(output.contains("Chandelure"));
    assert!(output.contains("Ghost"));
    assert!(output.contains("Fire"));
    assert!(output.contains("1/1"));
}

#[test]
fn test_failed_load_renders_empty_message() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut view = PokedexView::new();

    harness.dispatch_collect(Action::PokedexFetch);
    harness.complete_action(Action::PokedexDidError("fetch failed".into()));
    harness.process_emitted();

    let output = harness.render_plain(100, 30, |frame, area, state| {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        view.render(frame, area, props);
    });

    assert!(
        output.contains("No Pokémon found"),
        "Empty message should be visible:\n{}",
        output
    );
    assert!(!output.contains("fetch failed"));
}

#[test]
fn test_search_without_matches_renders_empty_message() {
    let state = AppState {
        pokemon: vec![chandelure()],
        search_query: "pika".into(),
        ..Default::default()
    };

    let output = render_view(&state);

    assert!(output.contains("No Pokémon found"));
    assert!(output.contains("0/1"));
}

#[test]
fn test_theme_toggle_changes_icon() {
    let mut harness = EffectStoreTestHarness::new(
        AppState {
            pokemon: vec![chandelure()],
            ..Default::default()
        },
        reducer,
    );
    let mut view = PokedexView::new();

    let light = harness.render_plain(100, 30, |frame, area, state| {
        view.render(
            frame,
            area,
            PokedexViewProps {
                state,
                is_focused: true,
            },
        );
    });

    harness.dispatch_collect(Action::UiToggleTheme);

    let dark = harness.render_plain(100, 30, |frame, area, state| {
        view.render(
            frame,
            area,
            PokedexViewProps {
                state,
                is_focused: true,
            },
        );
    });

    assert!(light.contains("☾"));
    assert!(dark.contains("☀"));
}
