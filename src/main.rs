mod app;
mod input;
mod ui;

use app::{App, Flow};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use mazerun::build_info;
use mazerun::core::config::USAGE;
use mazerun::core::{parse_args, LaunchCommand, LaunchOptions, TICK_INTERVAL_MS};
use mazerun::maze::{start_maze_game, start_maze_game_seeded};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(LaunchCommand::Run(options)) => options,
        Ok(LaunchCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(LaunchCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if options.dump {
        return dump_maze(&options);
    }

    let mut app = App::new(options.seed);
    if let Some(difficulty) = options.difficulty {
        app.start(difficulty);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports releases too
                if key_event.kind == KeyEventKind::Press && app.handle_key(key_event) == Flow::Quit
                {
                    return Ok(());
                }
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick).as_millis() as u64);
        last_tick = now;
    }
}

/// `--dump`: print one generated maze as JSON instead of playing.
fn dump_maze(options: &LaunchOptions) -> io::Result<()> {
    let difficulty = options.difficulty_or_default();
    let session = match options.seed {
        Some(seed) => start_maze_game_seeded(difficulty, seed),
        None => start_maze_game(difficulty),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let json = serde_json::to_string_pretty(&session.snapshot())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
