//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Pokedex actions =====
        Action::PokedexFetch => {
            state.loading = true;
            state.pokemon.clear();
            state.artwork.clear();
            state.selected = 0;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::LoadPokedex {
                api_base: state.api_base.clone(),
                window: state.window,
            })
        }

        Action::PokedexDidLoad(pokemon) => {
            state.pokemon = pokemon;
            state.loading = false;
            state.selected = 0;
            if !state.show_artwork {
                return DispatchResult::changed();
            }
            let effects: Vec<Effect> = state
                .pokemon
                .iter()
                .filter_map(|entry| {
                    let url = entry.artwork_url.clone()?;
                    Some(Effect::LoadArtwork {
                        name: entry.name.clone(),
                        url,
                    })
                })
                .collect();
            if effects.is_empty() {
                DispatchResult::changed()
            } else {
                DispatchResult::changed_with_many(effects)
            }
        }

        // Failure renders exactly like an empty page.
        Action::PokedexDidError(_) => {
            state.pokemon.clear();
            state.loading = false;
            state.selected = 0;
            DispatchResult::changed()
        }

        // ===== Artwork actions =====
        Action::ArtworkDidLoad { name, artwork } => {
            if !state.pokemon.iter().any(|entry| entry.name == name) {
                return DispatchResult::unchanged();
            }
            state.artwork.insert(name, artwork);
            DispatchResult::changed()
        }

        Action::ArtworkDidError { .. } => DispatchResult::unchanged(),

        // ===== Search actions =====
        Action::SearchOpen => {
            if state.search_mode {
                return DispatchResult::unchanged();
            }
            state.search_mode = true;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            if query == state.search_query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            state.selected = 0;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            if query != state.search_query {
                state.search_query = query;
                state.selected = 0;
            }
            state.search_mode = false;
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            state.search_mode = false;
            state.search_query.clear();
            state.selected = 0;
            DispatchResult::changed()
        }

        Action::SearchClear => {
            if state.search_query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search_query.clear();
            state.selected = 0;
            DispatchResult::changed()
        }

        // ===== Selection actions =====
        Action::SelectionMove(delta) => {
            if state.move_selection(delta as i32) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::SelectionRow(delta) => {
            let columns = state.grid_columns() as i32;
            if state.move_selection(delta as i32 * columns) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI actions =====
        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            state.clamp_selection();
            DispatchResult::changed()
        }

        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.loading {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
