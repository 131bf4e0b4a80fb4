use std::io;
use std::process;
use std::time::{Duration, Instant};

use cluedo::build_info;
use cluedo::cli::{self, Command};
use cluedo::config::Config;
use cluedo::constants::FRAME_MS;
use cluedo::errors::Result;
use cluedo::input::map_key;
use cluedo::logging;
use cluedo::mystery::Session;
use cluedo::room_art::ArtCache;
use cluedo::ui;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = match cli::parse_args(&args) {
        Ok(Command::Play { seed }) => seed,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run 'cluedo --help' for usage.");
            process::exit(1);
        }
    };

    let _log_guard = logging::init_logging()?;

    let mut config = Config::load();
    if seed.is_some() {
        config.seed = seed;
    }
    info!(seed = ?config.seed, "starting investigation");

    let mut session = Session::new(config.timings(), config.rng());
    let mut art = ArtCache::new(&config.room_art_dir);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut session, &mut art);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    info!(state = ?session.state, "goodbye");
    result
}

fn run(terminal: &mut Tui, session: &mut Session, art: &mut ArtCache) -> Result<()> {
    let frame_time = Duration::from_millis(FRAME_MS);

    while session.is_running() {
        terminal.draw(|frame| ui::draw(frame, session, art))?;

        if event::poll(frame_time)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    session.process_input(map_key(key), Instant::now());
                }
                _ => {}
            }
        }
        session.tick(Instant::now());
    }

    Ok(())
}
