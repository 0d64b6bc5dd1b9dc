pub mod card_grid;
pub mod loading;
pub mod pokedex_view;
pub mod pokemon_card;
pub mod search_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use card_grid::{CardGrid, CardGridProps};
pub use loading::{LoadingScreen, LoadingScreenProps};
pub use pokedex_view::{PokedexLayout, PokedexView, PokedexViewProps};
pub use pokemon_card::{PokemonCard, PokemonCardProps};
pub use search_bar::{SearchBar, SearchBarProps, SEARCH_PLACEHOLDER};
