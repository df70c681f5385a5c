use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use quizr::app::{App, AppScreen};
use quizr::config::Config;
use quizr::event::{AppEvent, EventHandler};
use quizr::quiz::difficulty::DifficultyKey;
use quizr::store::json_store::JsonStore;
use quizr::ui;

#[derive(Parser)]
#[command(name = "quizr", version, about = "Terminal trivia quiz with difficulty levels")]
struct Cli {
    #[arg(short, long, value_enum, help = "Skip the menu and start at this difficulty")]
    difficulty: Option<DifficultyKey>,

    #[arg(short, long, help = "Path to a questions JSON file")]
    questions: Option<String>,

    #[arg(short, long, help = "URL to fetch questions JSON from")]
    url: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Interface language (en, pt-BR)")]
    lang: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "invalid config file, using defaults");
            Config::default()
        }
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if let Some(path) = cli.questions {
        config.questions_path = Some(path);
    }
    if let Some(url) = cli.url {
        config.questions_url = Some(url);
    }
    config.validate();
    rust_i18n::set_locale(&config.language);

    let mut app = App::new(config);
    if let Some(difficulty) = cli.difficulty {
        app.start_quiz_with(difficulty);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(error = ?err, "terminal loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Log to a file under the data directory; the terminal belongs to the UI.
fn init_logging() {
    let dir = JsonStore::default_dir();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("quizr.log"))
    else {
        return;
    };
    let filter = EnvFilter::try_from_env("QUIZR_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
    {
        eprintln!("quizr: file logging disabled: {err}");
        return;
    }
    info!(version = env!("CARGO_PKG_VERSION"), "quizr starting");
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|frame| ui::screens::render(frame, app, now))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Home => handle_home_key(app, key),
        AppScreen::DifficultySelect => handle_difficulty_key(app, key),
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::Result => handle_result_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.start_quiz(),
        KeyCode::Char('2') => app.go_to_difficulty_select(),
        KeyCode::Char('r') if app.bank.is_none() => {
            app.reload_questions();
        }
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.start_quiz(),
            1 => app.go_to_difficulty_select(),
            2 => app.should_quit = true,
            _ => {}
        },
        _ => {}
    }
}

fn handle_difficulty_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch as usize - '1' as usize;
            app.choose_difficulty(DifficultyKey::ALL[index]);
        }
        KeyCode::Up | KeyCode::Char('k') => app.difficulty_menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.difficulty_menu.next(),
        KeyCode::Enter => {
            if let Some(&difficulty) = DifficultyKey::ALL.get(app.difficulty_menu.selected) {
                app.choose_difficulty(difficulty);
            }
        }
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Esc => app.go_home(),
        KeyCode::Char(ch @ '1'..='4') => app.answer(ch as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => app.move_highlight(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_highlight(true),
        KeyCode::Enter => app.confirm(now),
        KeyCode::Char('n') | KeyCode::Char(' ') => app.next_question(now),
        _ => {}
    }
}

fn handle_result_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.restart_quiz(),
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}
