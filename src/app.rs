//! Screen state and key dispatch for the terminal front end.

use crate::input::{
    is_abandon_key, is_interrupt, map_game_over_key, map_maze_key, map_menu_key, GameOverInput,
    MenuInput,
};
use crate::ui::difficulty_menu::{render_difficulty_menu, DifficultyMenu};
use crate::ui::maze_scene::render_maze_scene;
use crossterm::event::KeyEvent;
use mazerun::core::EventLog;
use mazerun::maze::{
    process_input, record_event, record_new_maze, start_maze_game, start_maze_game_seeded,
    tick_maze, MazeDifficulty, MazeSession,
};
use ratatui::Frame;

pub enum Screen {
    Menu,
    Game(Box<MazeSession>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

enum Action {
    Start(MazeDifficulty),
    ToMenu,
    Quit,
    None,
}

pub struct App {
    pub screen: Screen,
    pub menu: DifficultyMenu,
    pub log: EventLog,
    /// `--seed` from the command line; consumed by the first run.
    seed_override: Option<u64>,
}

impl App {
    pub fn new(seed_override: Option<u64>) -> Self {
        Self {
            screen: Screen::Menu,
            menu: DifficultyMenu::default(),
            log: EventLog::new(),
            seed_override,
        }
    }

    /// Generate a maze at `difficulty` and switch to it. On failure the
    /// menu stays up with the reason in the log.
    pub fn start(&mut self, difficulty: MazeDifficulty) {
        let result = match self.seed_override.take() {
            Some(seed) => start_maze_game_seeded(difficulty, seed),
            None => start_maze_game(difficulty),
        };

        self.menu.focus(difficulty);
        match result {
            Ok(session) => {
                self.log.clear();
                record_new_maze(&mut self.log, &session);
                self.screen = Screen::Game(Box::new(session));
            }
            Err(e) => {
                self.log
                    .add_log_entry(format!("Could not build maze: {}", e), true);
                self.screen = Screen::Menu;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if is_interrupt(key) {
            return Flow::Quit;
        }

        let action = match &mut self.screen {
            Screen::Menu => match map_menu_key(key) {
                MenuInput::Up => {
                    self.menu.navigate_up();
                    Action::None
                }
                MenuInput::Down => {
                    self.menu.navigate_down();
                    Action::None
                }
                MenuInput::Select => Action::Start(self.menu.selected()),
                MenuInput::Pick(index) => Action::Start(MazeDifficulty::from_index(index)),
                MenuInput::Quit => Action::Quit,
                MenuInput::Other => Action::None,
            },
            Screen::Game(session) if session.is_active() => {
                if is_abandon_key(key) {
                    self.log.add_log_entry("Run abandoned".to_string(), false);
                    Action::ToMenu
                } else {
                    if let Some(event) = process_input(session, map_maze_key(key)) {
                        record_event(&mut self.log, &event);
                    }
                    Action::None
                }
            }
            Screen::Game(session) => match map_game_over_key(key) {
                GameOverInput::Replay => {
                    Action::Start(session.difficulty().unwrap_or(self.menu.selected()))
                }
                GameOverInput::ChangeDifficulty => Action::ToMenu,
                GameOverInput::Quit => Action::Quit,
                GameOverInput::Other => Action::None,
            },
        };

        match action {
            Action::Start(difficulty) => self.start(difficulty),
            Action::ToMenu => self.screen = Screen::Menu,
            Action::Quit => return Flow::Quit,
            Action::None => {}
        }
        Flow::Continue
    }

    /// Feed elapsed wall time to the running session's countdown.
    pub fn tick(&mut self, dt_ms: u64) {
        if let Screen::Game(session) = &mut self.screen {
            for event in tick_maze(session, dt_ms) {
                record_event(&mut self.log, &event);
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        match &self.screen {
            Screen::Menu => render_difficulty_menu(frame, area, &self.menu, self.log.latest()),
            Screen::Game(session) => render_maze_scene(frame, area, session, &self.log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use mazerun::maze::{direction_between, find_path, Direction, SessionState};

    impl App {
        fn session(&self) -> Option<&MazeSession> {
            match &self.screen {
                Screen::Game(session) => Some(session.as_ref()),
                Screen::Menu => None,
            }
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn arrow(direction: Direction) -> KeyEvent {
        key(match direction {
            Direction::Up => KeyCode::Up,
            Direction::Down => KeyCode::Down,
            Direction::Left => KeyCode::Left,
            Direction::Right => KeyCode::Right,
        })
    }

    fn walk_to_exit(app: &mut App) {
        let session = app.session().unwrap();
        let path = find_path(session.grid(), session.entrance(), session.exit()).unwrap();
        for pair in path.windows(2) {
            let direction = direction_between(pair[0], pair[1]).unwrap();
            assert_eq!(app.handle_key(arrow(direction)), Flow::Continue);
        }
    }

    #[test]
    fn test_menu_pick_starts_run() {
        let mut app = App::new(Some(4));
        app.handle_key(key(KeyCode::Char('2')));

        let session = app.session().unwrap();
        assert_eq!(session.difficulty(), Some(MazeDifficulty::Medium));
        assert_eq!(session.seed(), 4);
        assert_eq!(app.menu.selected(), MazeDifficulty::Medium);
        assert_eq!(app.log.latest().unwrap().message, "Medium maze 31x31 (seed 4)");
    }

    #[test]
    fn test_menu_enter_uses_cursor() {
        let mut app = App::new(None);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.session().unwrap().difficulty(),
            Some(MazeDifficulty::Hard)
        );
    }

    #[test]
    fn test_quit_from_menu_and_ctrl_c() {
        let mut app = App::new(None);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[test]
    fn test_q_moves_nothing_during_run() {
        let mut app = App::new(Some(9));
        app.start(MazeDifficulty::Easy);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Flow::Continue);
        assert!(app.session().unwrap().is_active());
    }

    #[test]
    fn test_escape_abandons_run() {
        let mut app = App::new(Some(9));
        app.start(MazeDifficulty::Easy);
        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::Menu));
    }

    #[test]
    fn test_win_then_replay_gets_fresh_maze() {
        let mut app = App::new(Some(21));
        app.start(MazeDifficulty::Easy);
        walk_to_exit(&mut app);
        assert_eq!(app.session().unwrap().state(), SessionState::Won);
        assert!(app.log.iter().any(|e| e.message.starts_with("You Win!")));

        // Keys other than the game-over bindings leave the result up
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.session().unwrap().state(), SessionState::Won);

        app.handle_key(key(KeyCode::Char('r')));
        let session = app.session().unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.difficulty(), Some(MazeDifficulty::Easy));
        assert_eq!(session.player(), session.entrance());
    }

    #[test]
    fn test_timeout_then_menu() {
        let mut app = App::new(Some(3));
        app.start(MazeDifficulty::Easy);
        for _ in 0..100 {
            app.tick(1000);
        }
        assert_eq!(app.session().unwrap().state(), SessionState::TimedOut);
        assert!(app.log.iter().any(|e| e.message.starts_with("Game Over!")));

        app.handle_key(key(KeyCode::Char('m')));
        assert!(matches!(app.screen, Screen::Menu));
        assert_eq!(app.menu.selected(), MazeDifficulty::Easy);
    }

    #[test]
    fn test_tick_on_menu_is_noop() {
        let mut app = App::new(None);
        app.tick(5000);
        assert!(app.log.is_empty());
    }
}
