use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::artwork::{ArtworkView, Thumbnail};
use crate::state::Pokemon;
use crate::theme::Palette;
use crate::type_colors::color_for;

pub struct PokemonCardProps<'a> {
    pub pokemon: &'a Pokemon,
    pub artwork: Option<&'a Thumbnail>,
    pub show_artwork: bool,
    pub is_selected: bool,
    pub palette: &'a Palette,
}

/// One grid card: artwork, name, type badges
pub struct PokemonCard;

impl Component<Action> for PokemonCard {
    type Props<'a> = PokemonCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let border_style = if props.is_selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(palette.panel).fg(palette.text));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if props.show_artwork {
            let chunks = Layout::vertical([
                Constraint::Length(10), // artwork
                Constraint::Length(1),
                Constraint::Length(1), // name
                Constraint::Length(1), // types
            ])
            .split(inner);
            render_artwork(frame, chunks[0], &props);
            render_name(frame, chunks[2], props.pokemon, palette);
            render_types(frame, chunks[3], props.pokemon);
        } else {
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);
            render_name(frame, chunks[0], props.pokemon, palette);
            render_types(frame, chunks[1], props.pokemon);
            render_number(frame, chunks[2], props.pokemon, palette);
        }
    }
}

fn render_artwork(frame: &mut Frame, area: Rect, props: &PokemonCardProps<'_>) {
    match props.artwork {
        Some(thumbnail) => frame.render_widget(
            ArtworkView {
                thumbnail,
                background: props.palette.panel,
            },
            area,
        ),
        None => {
            let middle = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .split(area);
            render_number(frame, middle[0], props.pokemon, props.palette);
        }
    }
}

fn render_name(frame: &mut Frame, area: Rect, pokemon: &Pokemon, palette: &Palette) {
    let name = Line::from(Span::styled(
        pokemon.display_name(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(name), area);
}

fn render_number(frame: &mut Frame, area: Rect, pokemon: &Pokemon, palette: &Palette) {
    let number = Line::from(Span::styled(
        format!("#{:04}", pokemon.id),
        Style::default().fg(palette.text_dim),
    ))
    .centered();
    frame.render_widget(Paragraph::new(number), area);
}

fn render_types(frame: &mut Frame, area: Rect, pokemon: &Pokemon) {
    frame.render_widget(Paragraph::new(type_badges(&pokemon.types)), area);
}

pub fn type_badges(types: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(types.len() * 2);
    for (index, type_name) in types.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", capitalize(type_name)),
            Style::default().fg(Color::White).bg(color_for(type_name)),
        ));
    }
    Line::from(spans)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
