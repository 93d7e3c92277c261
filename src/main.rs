//! Pokedex TUI - browse PokeAPI entries in the terminal

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokedex::action::Action;
use pokedex::api;
use pokedex::components::{Component, Navigator, NavigatorProps};
use pokedex::effect::Effect;
use pokedex::lookup::Locale;
use pokedex::reducer::reducer;
use pokedex::state::{AppConfig, AppState, DEFAULT_API_BASE, LOADING_TICK_MS};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse Pokémon from PokeAPI in the terminal")]
struct Args {
    /// PokeAPI base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Number of entries to list (minimum 1)
    #[arg(long, short, default_value = "20", value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// Label and key translations
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Write logs here; filtered by RUST_LOG (default `pokedex=info`)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DexComponentId {
    Navigator,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DexContext {
    Main,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        Some(DexComponentId::Navigator)
    }

    fn modal(&self) -> Option<DexComponentId> {
        None
    }

    fn binding_context(&self, _id: DexComponentId) -> DexContext {
        DexContext::Main
    }

    fn default_context(&self) -> DexContext {
        DexContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        api_base,
        limit,
        locale,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = log_file {
        init_logging(&path)?;
    }

    let debug = DebugSession::new(debug_args);
    let config = AppConfig {
        api_base,
        page_limit: limit,
        locale,
    };
    tracing::info!(api_base = %config.api_base, limit, ?locale, "starting");

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(config))
        })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

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
    debug.save_actions(recorder.as_ref()).map_err(debug_error)?;
    tracing::info!("exiting");
    Ok(())
}

/// Logs go to a file only; stdout belongs to the terminal UI.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pokedex=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| io::Error::other(format!("logging setup failed: {error}")))
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
    let navigator = Rc::new(RefCell::new(Navigator::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let nav_events = Rc::clone(&navigator);
    bus.register(DexComponentId::Navigator, move |event, state| {
        let actions: Vec<_> = nav_events
            .borrow_mut()
            .handle_event(
                &event.kind,
                NavigatorProps {
                    state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(width, height) => {
            HandlerResponse::action(Action::UiTerminalResize(width, height)).with_render()
        }
        EventKind::Key(key) => match key.code {
            KeyCode::Char('q') => HandlerResponse::action(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                HandlerResponse::action(Action::Quit)
            }
            _ => HandlerResponse::ignored(),
        },
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                event_ctx.set_component_area(DexComponentId::Navigator, area);
                navigator.borrow_mut().render(
                    frame,
                    area,
                    NavigatorProps {
                        state,
                        is_focused: render_ctx.is_focused(),
                    },
                );
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadRoster { url } => {
            ctx.tasks().spawn(TaskKey::new("roster"), async move {
                match api::fetch_roster(&url).await {
                    Ok(entries) => Action::RosterDidLoad(entries),
                    Err(error) => Action::RosterDidError(error.to_string()),
                }
            });
        }
        // Both detail stages share a key so reopening replaces any in-flight stage.
        Effect::LoadDetailRecord { id, url } => {
            ctx.tasks().spawn(TaskKey::new("detail"), async move {
                match api::fetch_pokemon_record(&url).await {
                    Ok(record) => Action::DetailRecordDidLoad { id, record },
                    Err(error) => Action::DetailRecordDidError {
                        id,
                        error: error.to_string(),
                    },
                }
            });
        }
        Effect::LoadSpecies { id, url } => {
            ctx.tasks().spawn(TaskKey::new("detail"), async move {
                match api::fetch_species(&url).await {
                    Ok(species) => Action::DetailSpeciesDidLoad { id, species },
                    Err(error) => Action::DetailSpeciesDidError {
                        id,
                        error: error.to_string(),
                    },
                }
            });
        }
        Effect::LoadArtwork { id, url } => {
            ctx.tasks().spawn(TaskKey::new("artwork"), async move {
                match api::fetch_artwork(&url).await {
                    Ok(artwork) => Action::ArtworkDidLoad { id, artwork },
                    Err(error) => Action::ArtworkDidError {
                        id,
                        error: error.to_string(),
                    },
                }
            });
        }
    }
}
