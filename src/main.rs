//! pokegrid - searchable Pokemon card grid

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokegrid::action::Action;
use pokegrid::api::{self, DEFAULT_API_BASE};
use pokegrid::artwork::{decode_thumbnail, ARTWORK_HEIGHT, ARTWORK_WIDTH};
use pokegrid::components::{
    Component, PokedexLayout, PokedexView, PokedexViewProps, SearchBarProps,
};
use pokegrid::effect::Effect;
use pokegrid::loader;
use pokegrid::logging;
use pokegrid::reducer::reducer;
use pokegrid::state::{AppState, PageWindow, LOADING_ANIM_TICK_MS};
use pokegrid::theme::Theme;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Pokedex card grid over PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokegrid")]
#[command(about = "Browse one page of Pokemon as a searchable card grid")]
struct Args {
    /// Index of the first Pokemon in the page
    #[arg(long, default_value = "20")]
    offset: u32,

    /// Number of Pokemon to load (minimum 1)
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// PokeAPI base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Skip artwork downloads and use compact cards
    #[arg(long)]
    no_artwork: bool,

    /// Log file (defaults to pokegrid.log in the temp dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokeComponentId {
    Grid,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokeContext {
    Main,
    Search,
}

impl EventRoutingState<PokeComponentId, PokeContext> for AppState {
    fn focused(&self) -> Option<PokeComponentId> {
        if self.search_mode {
            Some(PokeComponentId::Search)
        } else {
            Some(PokeComponentId::Grid)
        }
    }

    fn modal(&self) -> Option<PokeComponentId> {
        if self.search_mode {
            Some(PokeComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokeComponentId) -> PokeContext {
        match id {
            PokeComponentId::Grid => PokeContext::Main,
            PokeComponentId::Search => PokeContext::Search,
        }
    }

    fn default_context(&self) -> PokeContext {
        PokeContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        offset,
        limit,
        api_base,
        dark,
        no_artwork,
        log_file,
        debug: debug_args,
    } = Args::parse();

    let log_path = log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    tracing::info!(%api_base, offset, limit, "starting pokegrid");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let theme = if dark { Theme::Dark } else { Theme::Light };
            let mut state =
                AppState::new(api_base, PageWindow { offset, limit }, theme, !no_artwork);
            if let Ok(size) = crossterm::terminal::size() {
                state.terminal_size = size;
            }
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PokedexUi {
    view: PokedexView,
}

impl PokedexUi {
    fn new() -> Self {
        Self {
            view: PokedexView::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokeComponentId>,
    ) {
        let layout = PokedexLayout::new(area);
        event_ctx.set_component_area(PokeComponentId::Grid, layout.grid);
        event_ctx.set_component_area(PokeComponentId::Search, layout.search);

        let props = PokedexViewProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.view.render(frame, area, props);
    }

    fn handle_grid_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = PokedexViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = SearchBarProps {
            query: &state.search_query,
            is_focused: state.search_mode,
            palette: state.theme.palette(),
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        };
        let actions: Vec<_> = self
            .view
            .search
            .handle_event(event, props)
            .into_iter()
            .collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokedexUi::new()));
    let mut bus: EventBus<AppState, Action, PokeComponentId, PokeContext> = EventBus::new();
    let keybindings: Keybindings<PokeContext> = Keybindings::new();

    let ui_grid = Rc::clone(&ui);
    bus.register(PokeComponentId::Grid, move |event, state| {
        ui_grid.borrow_mut().handle_grid_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(PokeComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::PokedexFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadPokedex { api_base, window } => {
            ctx.tasks().spawn(TaskKey::new("pokedex"), async move {
                match loader::load_collection(api::shared_transport(), &api_base, window).await {
                    Ok(pokemon) => Action::PokedexDidLoad(pokemon),
                    Err(err) => {
                        tracing::error!(error = %err, "pokedex load failed");
                        Action::PokedexDidError(err.to_string())
                    }
                }
            });
        }
        Effect::LoadArtwork { name, url } => {
            let key = format!("artwork_{name}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                let transport = api::shared_transport();
                let decoded = match transport.get(&url).await {
                    Ok(bytes) => decode_thumbnail(&bytes, ARTWORK_WIDTH, ARTWORK_HEIGHT),
                    Err(err) => Err(err.to_string()),
                };
                match decoded {
                    Ok(artwork) => Action::ArtworkDidLoad { name, artwork },
                    Err(error) => {
                        tracing::warn!(%name, %url, %error, "artwork unavailable");
                        Action::ArtworkDidError { name, error }
                    }
                }
            });
        }
    }
}
