use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps,
    StatusBarSection, StatusBarStyle,
};

use super::{
    CardGrid, CardGridProps, Component, LoadingScreen, LoadingScreenProps, SearchBar,
    SearchBarProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme::Palette;

pub const TITLE: &str = "Pokédex";

/// Screen regions, shared with the event router for hit areas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PokedexLayout {
    pub header: Rect,
    pub search: Rect,
    pub grid: Rect,
    pub status: Rect,
}

impl PokedexLayout {
    pub fn new(area: Rect) -> Self {
        let inner = area.inner(Margin::new(1, 0));
        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(3), // search
            Constraint::Min(1),    // grid
            Constraint::Length(1), // status
        ])
        .split(inner);
        Self {
            header: chunks[0],
            search: chunks[1],
            grid: chunks[2],
            status: chunks[3],
        }
    }
}

pub struct PokedexViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Whole screen: header, search bar, card grid, status bar
pub struct PokedexView {
    pub search: SearchBar,
    status_bar: StatusBar,
}

impl Default for PokedexView {
    fn default() -> Self {
        Self {
            search: SearchBar::new(),
            status_bar: StatusBar::new(),
        }
    }
}

impl PokedexView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for PokedexView {
    type Props<'a> = PokedexViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.state.search_mode {
            return None;
        }

        // Only quit works behind the loading screen.
        if props.state.loading {
            return match event {
                EventKind::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    Some(Action::Quit)
                }
                _ => None,
            };
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('t') => Some(Action::UiToggleTheme),
                KeyCode::Char('c') => Some(Action::SearchClear),
                KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectionMove(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectionMove(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectionRow(-1)),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectionRow(1)),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = state.theme.palette();

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
            area,
        );

        if state.loading {
            let mut loading = LoadingScreen;
            loading.render(
                frame,
                area,
                LoadingScreenProps {
                    tick_count: state.tick_count,
                    palette,
                },
            );
            return;
        }

        let layout = PokedexLayout::new(area);
        render_header(frame, layout.header, state, palette);

        self.search.render(
            frame,
            layout.search,
            SearchBarProps {
                query: &state.search_query,
                is_focused: state.search_mode,
                palette,
                on_query_change: Action::SearchQueryChange,
                on_query_submit: Action::SearchQuerySubmit,
            },
        );

        let mut grid = CardGrid;
        grid.render(frame, layout.grid, CardGridProps { state, palette });

        self.render_status(frame, layout.status, state, palette);
    }
}

impl PokedexView {
    fn render_status(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        palette: &Palette,
    ) {
        let hints = status_hints(state);
        let count = format!("{}/{}", state.visible().len(), state.pokemon.len());
        let count_items = [StatusBarItem::span(Span::styled(
            count.as_str(),
            Style::default().fg(palette.text_dim),
        ))];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(palette.panel),
                fg: None,
            },
            text: Style::default().fg(palette.text),
            hint_key: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(palette.text_dim),
            separator: Style::default().fg(palette.text_dim),
        };

        Component::<Action>::render(
            &mut self.status_bar,
            frame,
            area,
            StatusBarProps {
                left: StatusBarSection::hints(&hints).with_separator("  "),
                center: StatusBarSection::empty(),
                right: StatusBarSection::items(&count_items),
                style,
                is_focused: false,
            },
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toggle = format!("[t] {}", state.theme.toggle_icon());
    let chunks = Layout::horizontal([
        Constraint::Length(toggle.chars().count() as u16 + 1),
        Constraint::Min(1),
        Constraint::Length(toggle.chars().count() as u16 + 1),
    ])
    .split(inner);

    let title = Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title), chunks[1]);

    let toggle = Line::from(Span::styled(toggle, Style::default().fg(palette.text_dim)))
        .right_aligned();
    frame.render_widget(Paragraph::new(toggle), chunks[2]);
}

fn status_hints(state: &AppState) -> Vec<StatusBarHint<'static>> {
    if state.search_mode {
        vec![
            StatusBarHint::new("Enter", "keep"),
            StatusBarHint::new("Esc", "cancel"),
        ]
    } else {
        vec![
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("←↑↓→", "move"),
            StatusBarHint::new("c", "clear"),
            StatusBarHint::new("t", state.theme.toggle_label()),
            StatusBarHint::new("q", "quit"),
        ]
    }
}
