pub mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::{info, warn};
use typerace::{
    config::{Config, ConfigStore, FileConfigStore},
    display::Display,
    feedback::WordFeedback,
    logging,
    runtime::{CrosstermEventSource, FixedTicker, RaceEvent, Runner, SessionEvent},
    samples::{random_sample, Difficulty},
    session::State,
    Engine,
};

/// typing speed exercise with live per-word feedback
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type the sample sentence as fast as you can. Words light up as you go; stop the clock to see your words per minute and accuracy."
)]
pub struct Cli {
    /// difficulty of the sample sentences (defaults to the last one used)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// custom sentence to type instead of a sample
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// write debug logs to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// redraw interval in milliseconds
    #[clap(long = "tick-ms")]
    tick_ms: Option<u64>,
}

/// Everything the engine asks the terminal to show, plus the input field itself
#[derive(Debug)]
pub struct TerminalDisplay {
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub retry_enabled: bool,
    pub elapsed: f64,
    pub wpm: f64,
    pub accuracy: f64,
    pub label: String,
    pub feedback: Vec<WordFeedback>,
    pub input: String,
    pub input_focused: bool,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self {
            start_enabled: false,
            stop_enabled: false,
            retry_enabled: false,
            elapsed: 0.0,
            wpm: 0.0,
            accuracy: 0.0,
            label: String::new(),
            feedback: Vec::new(),
            input: String::new(),
            input_focused: true,
        }
    }
}

impl Display for TerminalDisplay {
    fn set_controls_enabled(&mut self, start: bool, stop: bool, retry: bool) {
        self.start_enabled = start;
        self.stop_enabled = stop;
        self.retry_enabled = retry;
    }

    fn display_elapsed_seconds(&mut self, value: f64) {
        self.elapsed = value;
    }

    fn display_wpm(&mut self, value: f64) {
        self.wpm = value;
    }

    fn display_accuracy(&mut self, value: f64) {
        self.accuracy = value;
    }

    fn display_difficulty_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn render_word_feedback(&mut self, feedback: &[WordFeedback]) {
        self.feedback = feedback.to_vec();
    }

    fn clear_input_field(&mut self) {
        self.input.clear();
    }

    fn focus_input_field(&mut self) {
        self.input_focused = true;
    }
}

#[derive(Debug)]
pub struct App {
    pub engine: Engine<TerminalDisplay>,
    pub difficulty: Difficulty,
    pub custom_prompt: Option<String>,
}

impl App {
    pub fn new(difficulty: Difficulty, custom_prompt: Option<String>) -> Result<Self, Box<dyn Error>> {
        let mut app = Self {
            engine: Engine::with_display(TerminalDisplay::default()),
            difficulty,
            custom_prompt,
        };
        app.load_reference()?;
        Ok(app)
    }

    fn load_reference(&mut self) -> Result<(), Box<dyn Error>> {
        let (text, label) = match self.custom_prompt {
            Some(ref prompt) => (prompt.clone(), String::from("Custom")),
            None => (random_sample(self.difficulty)?, self.difficulty.label()),
        };
        self.engine.dispatch(SessionEvent::ReferenceTextAvailable { text, label });
        Ok(())
    }

    pub fn next_difficulty(&mut self) -> Result<(), Box<dyn Error>> {
        if self.custom_prompt.take().is_none() {
            self.difficulty = self.difficulty.next();
        }
        self.load_reference()
    }

    fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        edit(&mut self.engine.display_mut().input);
        let text = self.engine.display().input.clone();
        self.engine.dispatch(SessionEvent::TypedTextChanged(text));
    }

    /// Returns false when the app should quit
    pub fn on_key(&mut self, key: KeyEvent) -> Result<bool, Box<dyn Error>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(false),
            KeyCode::Char('c') if ctrl => return Ok(false),
            KeyCode::Char('r') if ctrl => {
                if self.engine.display().retry_enabled {
                    self.engine.dispatch(SessionEvent::Retry);
                }
            }
            KeyCode::Enter => {
                let display = self.engine.display();
                if self.engine.state() == State::Running && display.stop_enabled {
                    self.engine.dispatch(SessionEvent::Stop);
                } else if display.start_enabled {
                    self.engine.dispatch(SessionEvent::Start);
                }
            }
            KeyCode::Tab => self.next_difficulty()?,
            KeyCode::Backspace => self.edit_input(|input| {
                input.pop();
            }),
            KeyCode::Char(c) if !ctrl => self.edit_input(|input| input.push(c)),
            _ => {}
        }
        Ok(true)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(ref path) = cli.log_file {
        logging::init_tracing(path)?;
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    let difficulty = cli.difficulty.unwrap_or(config.difficulty);
    let tick = Duration::from_millis(cli.tick_ms.unwrap_or(config.tick_rate_ms).max(1));

    let mut app = App::new(difficulty, cli.prompt.clone())?;
    info!(?difficulty, custom = app.custom_prompt.is_some(), "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = start_tui(&mut terminal, &mut app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    config = Config {
        difficulty: app.difficulty,
        ..config
    };
    if let Err(err) = store.save(&config) {
        warn!(%err, "could not save config");
    }
    info!("exiting");

    outcome
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::new(tick));

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            RaceEvent::Tick => {
                // only the running clock changes between keys
                if app.engine.state() != State::Running {
                    continue;
                }
            }
            RaceEvent::Resize => {}
            RaceEvent::Session(event) => app.engine.dispatch(event),
            RaceEvent::Key(key) => {
                if !app.on_key(key)? {
                    break;
                }
            }
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
