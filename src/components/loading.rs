use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;
use crate::theme::Palette;

pub const LOADING_TEXT: &str = "Loading Pokédex";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

const BALL_RED: Color = Color::Rgb(239, 68, 68);
const BALL_WHITE: Color = Color::Rgb(243, 244, 246);
const BALL_BAND: Color = Color::Rgb(31, 41, 55);

// Rows tagged by which half of the ball they belong to.
const BALL: [(&str, Half); 7] = [
    ("   ▄▄███▄▄   ", Half::Top),
    (" ▄█████████▄ ", Half::Top),
    ("█████████████", Half::Top),
    ("▀▀▀▀▀(●)▀▀▀▀▀", Half::Band),
    ("█████████████", Half::Bottom),
    (" ▀█████████▀ ", Half::Bottom),
    ("   ▀▀███▀▀   ", Half::Bottom),
];

#[derive(Clone, Copy)]
enum Half {
    Top,
    Band,
    Bottom,
}

pub struct LoadingScreenProps<'a> {
    pub tick_count: u32,
    pub palette: &'a Palette,
}

/// Poke Ball with a spinner, shown until the page resolves
pub struct LoadingScreen;

impl Component<Action> for LoadingScreen {
    type Props<'a> = LoadingScreenProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let ball_height = BALL.len() as u16;
        let chunks = Layout::vertical([
            Constraint::Length(ball_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

        let ball: Vec<Line> = BALL
            .iter()
            .map(|(row, half)| {
                let style = match half {
                    Half::Top => Style::default().fg(BALL_RED),
                    Half::Band => Style::default().fg(BALL_BAND).bg(BALL_WHITE),
                    Half::Bottom => Style::default().fg(BALL_WHITE),
                };
                Line::from(Span::styled(*row, style)).centered()
            })
            .collect();
        frame.render_widget(Paragraph::new(ball), chunks[0]);

        frame.render_widget(
            Paragraph::new(loading_line(props.tick_count, props.palette)),
            chunks[2],
        );
    }
}

fn loading_line(tick_count: u32, palette: &Palette) -> Line<'static> {
    let spinner = SPINNER[(tick_count as usize) % SPINNER.len()];
    let dots = ".".repeat((tick_count as usize / 2) % 3 + 1);
    Line::from(vec![
        Span::styled(
            format!("{spinner} "),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            LOADING_TEXT,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        // Fixed width so the line doesn't jitter.
        Span::styled(format!("{dots:<3}"), Style::default().fg(palette.text_dim)),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_loading_text() {
        let mut render = RenderHarness::new(60, 20);
        let mut screen = LoadingScreen;

        let output = render.render_to_string_plain(|frame| {
            screen.render(
                frame,
                frame.area(),
                LoadingScreenProps {
                    tick_count: 0,
                    palette: Theme::Light.palette(),
                },
            );
        });

        assert!(output.contains("Loading Pokédex"));
        assert!(output.contains("(●)"));
    }

    #[test]
    fn test_spinner_advances_with_ticks() {
        let palette = Theme::Dark.palette();
        let first = loading_line(0, palette);
        let second = loading_line(1, palette);
        assert_ne!(first.spans[0].content, second.spans[0].content);
        assert_eq!(loading_line(4, palette).spans[0].content, first.spans[0].content);
    }
}
