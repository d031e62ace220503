//! Maze game logic: input processing and the countdown tick.

use super::session::{MazeSession, MoveOutcome};
use super::timer::TimerTick;
use super::types::{Direction, MazeDifficulty, MazeError, Position};
use crate::core::constants::{MAX_TICK_DT_MS, TIMER_STEP_MS};
use crate::core::event_log::EventLog;
use rand::Rng;

/// UI-agnostic input actions for the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeInput {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl MazeInput {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Other => None,
        }
    }
}

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeEvent {
    Moved { to: Position },
    Blocked { direction: Direction },
    ExitReached { moves: u32, remaining_secs: u32 },
    TimerTick { remaining_secs: u32 },
    TimeExpired { moves: u32 },
}

/// Start a run at `difficulty` with a random seed.
pub fn start_maze_game(difficulty: MazeDifficulty) -> Result<MazeSession, MazeError> {
    let seed = rand::thread_rng().gen();
    start_maze_game_seeded(difficulty, seed)
}

/// Start a reproducible run: the same seed always yields the same maze.
pub fn start_maze_game_seeded(
    difficulty: MazeDifficulty,
    seed: u64,
) -> Result<MazeSession, MazeError> {
    MazeSession::from_difficulty(difficulty, seed)
}

/// Process player input. Returns `None` when the input had no effect worth
/// reporting (non-movement keys, or the run is already over).
pub fn process_input(session: &mut MazeSession, input: MazeInput) -> Option<MazeEvent> {
    let direction = input.direction()?;

    match session.attempt_move(direction) {
        MoveOutcome::Moved(to) => Some(MazeEvent::Moved { to }),
        MoveOutcome::Blocked => Some(MazeEvent::Blocked { direction }),
        MoveOutcome::Won(_) => Some(MazeEvent::ExitReached {
            moves: session.moves(),
            remaining_secs: session.remaining_secs(),
        }),
        MoveOutcome::Ignored => None,
    }
}

/// Advance the countdown. Called from the main loop.
///
/// `dt_ms` is milliseconds since the last call. Whole seconds are fed to the
/// timer one at a time; the remainder carries over to the next call.
pub fn tick_maze(session: &mut MazeSession, dt_ms: u64) -> Vec<MazeEvent> {
    let mut events = Vec::new();

    if !session.is_active() {
        session.timer.cancel();
        return events;
    }

    // Clamp dt so a long stall costs at most a couple of seconds
    session.accumulated_time_ms += dt_ms.min(MAX_TICK_DT_MS);

    while session.accumulated_time_ms >= TIMER_STEP_MS {
        session.accumulated_time_ms -= TIMER_STEP_MS;

        match session.timer.tick() {
            TimerTick::Counting(remaining_secs) => {
                events.push(MazeEvent::TimerTick { remaining_secs });
            }
            TimerTick::Expired => {
                if session.on_timer_expired() {
                    events.push(MazeEvent::TimeExpired {
                        moves: session.moves(),
                    });
                }
                break;
            }
            TimerTick::Idle => break,
        }
    }

    events
}

/// Seconds-left marks that earn a warning in the log.
const TIME_WARNINGS: [u32; 3] = [30, 10, 5];

/// Append a log line for events worth remembering. Plain moves and bumps
/// into walls are left out.
pub fn record_event(log: &mut EventLog, event: &MazeEvent) {
    match *event {
        MazeEvent::ExitReached {
            moves,
            remaining_secs,
        } => log.add_log_entry(
            format!("You Win! {} moves, {}s to spare", moves, remaining_secs),
            true,
        ),
        MazeEvent::TimeExpired { moves } => log.add_log_entry(
            format!("Game Over! Time ran out after {} moves", moves),
            true,
        ),
        MazeEvent::TimerTick { remaining_secs } if TIME_WARNINGS.contains(&remaining_secs) => {
            log.add_log_entry(format!("{} seconds left!", remaining_secs), false)
        }
        MazeEvent::TimerTick { .. } | MazeEvent::Moved { .. } | MazeEvent::Blocked { .. } => {}
    }
}

/// Log line announcing a freshly generated maze.
pub fn record_new_maze(log: &mut EventLog, session: &MazeSession) {
    let name = session.difficulty().map(|d| d.name()).unwrap_or("Custom");
    log.add_log_entry(
        format!(
            "{} maze {}x{} (seed {})",
            name,
            session.grid().rows(),
            session.grid().columns(),
            session.seed()
        ),
        true,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::placement::{direction_between, find_path};
    use crate::maze::types::SessionState;
    use crate::maze::timer::TimerStatus;

    fn easy_session() -> MazeSession {
        start_maze_game_seeded(MazeDifficulty::Easy, 12345).unwrap()
    }

    /// Directions along the maze's path from entrance to exit.
    fn solution(session: &MazeSession) -> Vec<MazeInput> {
        let path = find_path(session.grid(), session.entrance(), session.exit()).unwrap();
        path.windows(2)
            .map(|w| match direction_between(w[0], w[1]).unwrap() {
                Direction::Up => MazeInput::Up,
                Direction::Down => MazeInput::Down,
                Direction::Left => MazeInput::Left,
                Direction::Right => MazeInput::Right,
            })
            .collect()
    }

    #[test]
    fn test_start_maze_game_uses_difficulty() {
        for difficulty in MazeDifficulty::ALL {
            let session = start_maze_game(difficulty).unwrap();
            assert_eq!(session.grid().rows(), difficulty.rows());
            assert_eq!(session.remaining_secs(), difficulty.timer_secs());
            assert_eq!(session.state(), SessionState::Active);
        }
    }

    #[test]
    fn test_other_input_ignored() {
        let mut session = easy_session();
        assert_eq!(process_input(&mut session, MazeInput::Other), None);
        assert_eq!(session.player(), session.entrance());
    }

    #[test]
    fn test_blocked_input_reports_direction() {
        let mut session = easy_session();
        // Row 0 is solid border, so up from the entrance is always blocked
        assert_eq!(
            process_input(&mut session, MazeInput::Up),
            Some(MazeEvent::Blocked {
                direction: Direction::Up
            })
        );
        assert_eq!(session.player(), session.entrance());
    }

    #[test]
    fn test_following_solution_wins() {
        let mut session = easy_session();
        let inputs = solution(&session);
        let (last, rest) = inputs.split_last().unwrap();

        for &input in rest {
            assert!(matches!(
                process_input(&mut session, input),
                Some(MazeEvent::Moved { .. })
            ));
        }
        assert_eq!(
            process_input(&mut session, *last),
            Some(MazeEvent::ExitReached {
                moves: inputs.len() as u32,
                remaining_secs: 90,
            })
        );
        assert_eq!(session.state(), SessionState::Won);

        // Further input has no effect
        assert_eq!(process_input(&mut session, *last), None);
    }

    #[test]
    fn test_tick_accumulates_sub_second() {
        let mut session = easy_session();
        assert!(tick_maze(&mut session, 400).is_empty());
        assert!(tick_maze(&mut session, 400).is_empty());
        assert_eq!(
            tick_maze(&mut session, 400),
            vec![MazeEvent::TimerTick { remaining_secs: 89 }]
        );
        assert_eq!(session.accumulated_time_ms, 200);
    }

    #[test]
    fn test_tick_clamps_large_dt() {
        let mut session = easy_session();
        let events = tick_maze(&mut session, 60_000);
        assert_eq!(events.len(), (MAX_TICK_DT_MS / TIMER_STEP_MS) as usize);
        assert_eq!(session.remaining_secs(), 88);
    }

    #[test]
    fn test_timer_expiry_ends_session_once() {
        let mut session = easy_session();
        let mut expiries = 0;
        for _ in 0..200 {
            for event in tick_maze(&mut session, 1000) {
                if matches!(event, MazeEvent::TimeExpired { .. }) {
                    expiries += 1;
                }
            }
        }
        assert_eq!(expiries, 1);
        assert_eq!(session.state(), SessionState::TimedOut);
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn test_win_beats_pending_expiry() {
        let mut session = easy_session();
        let inputs = solution(&session);
        let (last, rest) = inputs.split_last().unwrap();
        for &input in rest {
            process_input(&mut session, input);
        }

        // One second left and the next tick is due
        session.timer.remaining_secs = 1;
        session.accumulated_time_ms = TIMER_STEP_MS - 1;

        process_input(&mut session, *last);
        let events = tick_maze(&mut session, 500);

        assert!(events.is_empty());
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.timer().status, TimerStatus::Cancelled);
    }

    #[test]
    fn test_tick_after_win_does_nothing() {
        let mut session = easy_session();
        for input in solution(&session) {
            process_input(&mut session, input);
        }
        let remaining = session.remaining_secs();
        assert!(tick_maze(&mut session, 5000).is_empty());
        assert_eq!(session.remaining_secs(), remaining);
    }

    #[test]
    fn test_record_event_logs_outcomes() {
        let mut log = EventLog::new();
        record_event(
            &mut log,
            &MazeEvent::ExitReached {
                moves: 40,
                remaining_secs: 12,
            },
        );
        assert_eq!(log.latest().unwrap().message, "You Win! 40 moves, 12s to spare");
        assert!(log.latest().unwrap().is_highlight);

        record_event(&mut log, &MazeEvent::TimeExpired { moves: 3 });
        assert_eq!(
            log.latest().unwrap().message,
            "Game Over! Time ran out after 3 moves"
        );
    }

    #[test]
    fn test_record_event_time_warnings_only() {
        let mut log = EventLog::new();
        record_event(&mut log, &MazeEvent::TimerTick { remaining_secs: 42 });
        record_event(&mut log, &MazeEvent::Moved { to: Position::new(1, 2) });
        record_event(
            &mut log,
            &MazeEvent::Blocked {
                direction: Direction::Up,
            },
        );
        assert!(log.is_empty());

        record_event(&mut log, &MazeEvent::TimerTick { remaining_secs: 10 });
        assert_eq!(log.latest().unwrap().message, "10 seconds left!");
    }

    #[test]
    fn test_record_new_maze() {
        let mut log = EventLog::new();
        let session = easy_session();
        record_new_maze(&mut log, &session);
        assert_eq!(log.latest().unwrap().message, "Easy maze 21x21 (seed 12345)");
    }
}
