//! Actions: intents from the UI and results from async tasks

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artwork::Thumbnail;
use crate::state::Pokemon;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Pokedex category =====
    /// Intent: load the configured page (dispatched once at startup)
    PokedexFetch,

    /// Result: every detail arrived
    PokedexDidLoad(Vec<Pokemon>),

    /// Result: the list or any detail request failed
    PokedexDidError(String),

    // ===== Artwork category =====
    ArtworkDidLoad { name: String, artwork: Thumbnail },
    ArtworkDidError { name: String, error: String },

    // ===== Search category =====
    /// Focus the search bar
    SearchOpen,

    /// Search text edited (filters live)
    SearchQueryChange(String),

    /// Leave the search bar keeping the term
    SearchQuerySubmit(String),

    /// Leave the search bar and drop the term
    SearchCancel,

    /// Drop the term without entering the search bar
    SearchClear,

    // ===== Selection category =====
    /// Move by cards (left/right)
    SelectionMove(i16),

    /// Move by grid rows (up/down)
    SelectionRow(i16),

    // ===== UI category =====
    UiToggleTheme,
    UiTerminalResize(u16, u16),

    /// Force a re-render (cursor movement etc.)
    Render,

    // ===== Uncategorized (global) =====
    Tick,
    Quit,
}
