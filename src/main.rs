pub mod catalog;
pub mod celebration;
pub mod config;
pub mod progression;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod ui;

use crate::{
    catalog::Sport,
    celebration::Celebration,
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, CrosstermEvents, Runner},
    session::{InputMode, Readiness, SessionContext, SessionView, Setting},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    thread,
    time::Duration,
};
use webbrowser::Browser;

const TICK_RATE_MS: u64 = 100;
const REST_TICK: Duration = Duration::from_secs(1);

/// single-session workout tracker with progressive drill targets
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A single-session workout tracker: pick a sport, week and session number, work through the drill list with progressive targets, rest with per-drill countdown timers, and log results and perceived exertion as you go."
)]
pub struct Cli {
    /// sport whose drill list to load
    #[clap(short = 's', long, value_enum)]
    sport: Option<Sport>,

    /// where the session takes place (informational)
    #[clap(long, value_enum)]
    setting: Option<Setting>,

    /// training week, drives the progressive targets
    #[clap(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    week: Option<u32>,

    /// session number within the week
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    session: Option<u32>,

    /// sleep quality check-in, 1-5
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    sleep: u8,

    /// muscle soreness check-in, 1-5 (5 = fresh)
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    soreness: u8,

    /// energy check-in, 1-5
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    energy: u8,

    /// persist sport/setting/week/session as defaults for next time
    #[clap(long)]
    remember: bool,
}

impl Cli {
    /// Merge flags with persisted defaults into the view's context.
    /// Explicit flags win; a hand-edited config week of 0 is floored to 1.
    fn to_context(&self, cfg: &Config) -> SessionContext {
        SessionContext {
            sport: self
                .sport
                .or_else(|| Sport::from_name(&cfg.sport))
                .unwrap_or(Sport::Basketball),
            setting: self
                .setting
                .or_else(|| Setting::from_name(&cfg.setting))
                .unwrap_or(Setting::Indoor),
            week: self.week.unwrap_or(cfg.week).max(1),
            session: self.session.unwrap_or(cfg.session).max(1),
            readiness: Readiness {
                sleep_quality: self.sleep,
                soreness: self.soreness,
                energy: self.energy,
            },
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub view: SessionView,
    pub celebration: Celebration,
}

impl App {
    pub fn new(context: SessionContext) -> Self {
        Self {
            view: SessionView::new(context),
            celebration: Celebration::new(),
        }
    }

    pub fn reset(&mut self) {
        self.view.reset();
        self.celebration = Celebration::new();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let context = cli.to_context(&store.load());
    if cli.remember {
        store.save(&Config::from(&context))?;
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(context);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
    StartTimer,
    Save,
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEvents::new(), Duration::from_millis(TICK_RATE_MS));

    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            AppEvent::Tick => {
                if app.celebration.is_active {
                    app.celebration.update();
                }
            }
            AppEvent::Resize => {}
            AppEvent::Key(key) => match handle_key(app, key) {
                Action::Quit => break,
                Action::StartTimer => match app.view.start_selected_timer() {
                    Ok(_) => {
                        run_rest_countdown(terminal, app)?;
                        runner.drain();
                    }
                    Err(e) => app.view.flash = Some(e.to_string()),
                },
                Action::Save => {
                    app.view.saved = true;
                    app.view.flash = Some(format!(
                        "Session {} saved — nice work!",
                        app.view.context.session
                    ));
                    let size = terminal.size().unwrap_or_default();
                    app.celebration.start(size.width, size.height);
                }
                Action::Continue => {}
            },
        }
    }

    Ok(())
}

/// Dispatch one key press. Mode-aware: while a result text is being edited
/// every printable key belongs to the text, not to the shortcuts.
fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.view.input_mode {
        InputMode::EditingResult => match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.view.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => app.view.pop_result_char(),
            KeyCode::Char(c) => app.view.push_result_char(c),
            _ => {}
        },
        InputMode::Normal => match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Up => app.view.select_prev(),
            KeyCode::Down => app.view.select_next(),
            KeyCode::Enter | KeyCode::Char('t') => return Action::StartTimer,
            KeyCode::Char('e') => {
                if app.view.selected_drill().is_some() {
                    app.view.input_mode = InputMode::EditingResult;
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => app.view.adjust_rpe(1),
            KeyCode::Char('-') => app.view.adjust_rpe(-1),
            KeyCode::Char('d') => open_demo_link(app),
            KeyCode::Char('s') => return Action::Save,
            KeyCode::Char('r') => app.reset(),
            _ => {}
        },
    }

    Action::Continue
}

/// Blocking rest countdown: draw, sleep one wall-clock second, tick, redraw,
/// until the timer finishes. Input is deliberately not polled here; the view
/// is unresponsive for the full rest duration, and whatever was typed
/// meanwhile is drained afterwards. Drift is not corrected.
fn run_rest_countdown<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let idx = app.view.selected;
    terminal.draw(|f| ui(app, f))?;

    while app.view.timers.get(idx).is_some_and(|t| t.is_running()) {
        thread::sleep(REST_TICK);
        if app.view.timers[idx].tick() {
            let name = app.view.drills[idx].name.clone();
            app.view.flash = Some(format!("Go! Rest over — back to {name}."));
        }
        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn open_demo_link(app: &App) {
    if let Some(link) = app.view.selected_drill().and_then(|d| d.demo_link.as_ref()) {
        if Browser::is_available() {
            webbrowser::open(link).unwrap_or_default();
        }
    }
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
