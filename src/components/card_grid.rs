use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{Component, PokemonCard, PokemonCardProps};
use crate::action::Action;
use crate::state::AppState;
use crate::theme::Palette;

pub const EMPTY_TEXT: &str = "No Pokémon found";

pub struct CardGridProps<'a> {
    pub state: &'a AppState,
    pub palette: &'a Palette,
}

/// Filtered cards laid out in rows, scrolled to keep the selection visible
pub struct CardGrid;

impl Component<Action> for CardGrid {
    type Props<'a> = CardGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let visible = state.visible();

        if visible.is_empty() {
            let middle = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .split(area);
            let line = Line::styled(EMPTY_TEXT, Style::default().fg(props.palette.text_dim))
                .centered();
            frame.render_widget(Paragraph::new(line), middle[0]);
            return;
        }

        let columns = state.grid_columns() as usize;
        let card_width = area.width / columns as u16;
        let card_height = state.card_height();
        if card_width == 0 || card_height == 0 {
            return;
        }

        let rows_visible = (area.height / card_height).max(1) as usize;
        let selected_row = state.selected / columns;
        let first_row = selected_row.saturating_sub(rows_visible - 1);

        let mut card = PokemonCard;
        for (index, pokemon) in visible
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take(rows_visible * columns)
        {
            let row = (index / columns - first_row) as u16;
            let col = (index % columns) as u16;
            let y = area.y + row * card_height;
            let height = card_height.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let cell = Rect {
                x: area.x + col * card_width,
                y,
                width: card_width,
                height,
            };
            card.render(
                frame,
                cell,
                PokemonCardProps {
                    pokemon,
                    artwork: state.artwork.get(&pokemon.name),
                    show_artwork: state.show_artwork,
                    is_selected: index == state.selected,
                    palette: props.palette,
                },
            );
        }
    }
}
