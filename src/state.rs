//! Application state - single source of truth

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_BASE;
use crate::artwork::Thumbnail;
use crate::theme::Theme;

/// One card in the grid, built from a detail payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub artwork_url: Option<String>,
    pub types: Vec<String>,
}

impl Pokemon {
    /// `mr-mime` -> `Mr-Mime`. Only letters change case, so the result
    /// still matches the name in [`filter_pokemon`].
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Fixed list window requested at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PageWindow {
    pub offset: u32,
    pub limit: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 20,
            limit: 20,
        }
    }
}

/// Cards that match `term`, in collection order.
///
/// Case-insensitive substring match on the name; an empty term keeps
/// everything.
pub fn filter_pokemon<'a>(pokemon: &'a [Pokemon], term: &str) -> Vec<&'a Pokemon> {
    let term = term.to_lowercase();
    pokemon
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&term))
        .collect()
}

/// Card footprint in cells, border included.
pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 15;
pub const CARD_HEIGHT_COMPACT: u16 = 5;
pub const MAX_GRID_COLUMNS: u16 = 4;

/// Poke Ball spinner timing.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Source ---
    #[debug(section = "Source", label = "API")]
    pub api_base: String,

    #[debug(section = "Source", label = "Window", debug_fmt)]
    pub window: PageWindow,

    // --- Collection ---
    /// Empty until the whole page has loaded, and again after a failure.
    #[debug(section = "Pokedex", label = "Cards", debug_fmt)]
    pub pokemon: Vec<Pokemon>,

    #[debug(section = "Pokedex", label = "Loading")]
    pub loading: bool,

    #[debug(section = "Pokedex", label = "Selected")]
    pub selected: usize,

    // --- Search ---
    #[debug(section = "Search", label = "Query")]
    pub search_query: String,

    #[debug(section = "Search", label = "Active")]
    pub search_mode: bool,

    // --- UI ---
    #[debug(section = "UI", label = "Theme", debug_fmt)]
    pub theme: Theme,

    #[debug(section = "UI", label = "Artwork")]
    pub show_artwork: bool,

    #[debug(section = "UI", label = "Size", debug_fmt)]
    pub terminal_size: (u16, u16),

    #[debug(skip)]
    pub artwork: HashMap<String, Thumbnail>,

    #[debug(skip)]
    pub tick_count: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            window: PageWindow::default(),
            pokemon: Vec::new(),
            loading: false,
            selected: 0,
            search_query: String::new(),
            search_mode: false,
            theme: Theme::default(),
            show_artwork: true,
            terminal_size: (120, 40),
            artwork: HashMap::new(),
            tick_count: 0,
        }
    }
}

impl AppState {
    pub fn new(api_base: String, window: PageWindow, theme: Theme, show_artwork: bool) -> Self {
        Self {
            api_base,
            window,
            theme,
            show_artwork,
            ..Default::default()
        }
    }

    pub fn visible(&self) -> Vec<&Pokemon> {
        filter_pokemon(&self.pokemon, &self.search_query)
    }

    pub fn selected_pokemon(&self) -> Option<&Pokemon> {
        self.visible().get(self.selected).copied()
    }

    pub fn grid_columns(&self) -> u16 {
        grid_columns_for(self.terminal_size.0)
    }

    pub fn card_height(&self) -> u16 {
        if self.show_artwork {
            CARD_HEIGHT
        } else {
            CARD_HEIGHT_COMPACT
        }
    }

    /// Move the selection by `delta` cards, staying inside the visible set.
    /// Returns whether it moved.
    pub fn move_selection(&mut self, delta: i32) -> bool {
        let count = self.visible().len();
        if count == 0 {
            self.selected = 0;
            return false;
        }
        let target = (self.selected as i64 + delta as i64).clamp(0, count as i64 - 1) as usize;
        if target == self.selected {
            return false;
        }
        self.selected = target;
        true
    }

    pub fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}

pub fn grid_columns_for(width: u16) -> u16 {
    (width.saturating_sub(2) / CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS)
}
