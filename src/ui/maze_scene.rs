//! Maze run UI rendering.
//!
//! The grid is drawn with half-block pixels: each maze cell is one terminal
//! column wide and two cells share a terminal row through `▀` (fg = upper
//! cell, bg = lower cell). A 45x45 maze fits in 45 columns by 23 rows.

use super::game_common::{
    create_game_layout, format_clock, render_game_over_banner, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use mazerun::core::EventLog;
use mazerun::maze::{MazeSession, Position, SessionState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

const WALL_COLOR: Color = Color::Rgb(18, 18, 24);
const OPEN_COLOR: Color = Color::Rgb(225, 225, 225);
const EXIT_COLOR: Color = Color::Rgb(40, 200, 70);
const PLAYER_COLOR: Color = Color::Rgb(230, 40, 40);

/// Seconds left at which the clock turns red.
const LOW_TIME_SECS: u32 = 10;

pub const GAME_OVER_CONTROLS: [(&str, &str); 3] =
    [("[R]", "Replay"), ("[M]", "Change Difficulty"), ("[Q]", "Quit")];

/// Render the maze run scene.
pub fn render_maze_scene(frame: &mut Frame, area: Rect, session: &MazeSession, log: &EventLog) {
    let layout = create_game_layout(frame, area, " Maze Run ", Color::Yellow, 12, 28);

    render_play_field(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session, log);

    match session.state() {
        SessionState::Active => {}
        SessionState::Won => render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Win,
            "You Win!",
            &format!("Exit reached in {} moves", session.moves()),
            &GAME_OVER_CONTROLS,
        ),
        SessionState::TimedOut => render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Loss,
            "Game Over!",
            "The clock ran out",
            &GAME_OVER_CONTROLS,
        ),
    }
}

/// Pixel color for one maze cell.
pub fn cell_color(session: &MazeSession, pos: Position) -> Color {
    if pos == session.player() {
        PLAYER_COLOR
    } else if pos == session.exit() {
        EXIT_COLOR
    } else if session.grid().is_open(pos) {
        OPEN_COLOR
    } else {
        WALL_COLOR
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, session: &MazeSession) {
    let grid = session.grid();
    let (rows, cols) = (grid.rows(), grid.columns());
    let term_rows = rows.div_ceil(2);

    if (area.width as usize) < cols || (area.height as usize) < term_rows {
        let hint = format!("Enlarge the terminal to show the {}x{} maze", rows, cols);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let x_off = area.x + (area.width - cols as u16) / 2;
    let y_off = area.y + (area.height - term_rows as u16) / 2;

    for term_row in 0..term_rows {
        let top = term_row * 2;
        let bottom = top + 1;

        // Batch runs of identical (fg, bg) into one span
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style: Option<(Color, Color)> = None;

        for col in 0..cols {
            let fg = cell_color(session, Position::new(top, col));
            // Odd row counts leave the last half-row as plain background
            let bg = if bottom < rows {
                cell_color(session, Position::new(bottom, col))
            } else {
                Color::Reset
            };

            if run_style != Some((fg, bg)) {
                if let Some((run_fg, run_bg)) = run_style {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        Style::default().fg(run_fg).bg(run_bg),
                    ));
                }
                run_style = Some((fg, bg));
            }
            run.push(HALF_TOP);
        }
        if let Some((run_fg, run_bg)) = run_style {
            spans.push(Span::styled(run, Style::default().fg(run_fg).bg(run_bg)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, y_off + term_row as u16, cols as u16, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &MazeSession) {
    match session.state() {
        SessionState::Active => render_status_bar(
            frame,
            area,
            "Find the exit!",
            Color::Yellow,
            &[("[WASD/Arrows]", "Move"), ("[Esc]", "Menu")],
        ),
        SessionState::Won => render_status_bar(frame, area, "Escaped!", Color::Green, &[]),
        SessionState::TimedOut => render_status_bar(frame, area, "Trapped.", Color::Red, &[]),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &MazeSession, log: &EventLog) {
    let inner = render_info_panel_frame(frame, area);

    let remaining = session.remaining_secs();
    let clock_color = if remaining <= LOW_TIME_SECS {
        Color::Red
    } else {
        Color::White
    };
    let difficulty = session.difficulty().map(|d| d.name()).unwrap_or("Custom");

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            label("Difficulty: "),
            Span::styled(difficulty, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            label("Time Left: "),
            Span::styled(
                format_clock(remaining),
                Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Moves: "),
            Span::styled(session.moves().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Grid: "),
            Span::styled(
                format!("{}x{}", session.grid().rows(), session.grid().columns()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("Seed: "),
            Span::styled(session.seed().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(PLAYER_COLOR)),
            label("You"),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(EXIT_COLOR)),
            label("Exit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Log:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for entry in log.iter() {
        let style = if entry.is_highlight {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(entry.message.clone(), style)));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun::maze::{Direction, MazeDifficulty};

    #[test]
    fn test_cell_colors() {
        let mut session = MazeSession::from_difficulty(MazeDifficulty::Easy, 11).unwrap();
        assert_eq!(cell_color(&session, session.entrance()), PLAYER_COLOR);
        assert_eq!(cell_color(&session, session.exit()), EXIT_COLOR);
        assert_eq!(cell_color(&session, Position::new(0, 0)), WALL_COLOR);

        // Once the player leaves, the entrance reads as a plain passage
        let step = Direction::ALL
            .into_iter()
            .find(|&d| {
                session
                    .entrance()
                    .step(d)
                    .is_some_and(|p| session.grid().is_open(p))
            })
            .unwrap();
        session.attempt_move(step);
        if session.player() != session.exit() {
            assert_eq!(cell_color(&session, session.entrance()), OPEN_COLOR);
        }
    }

    #[test]
    fn test_largest_maze_fits_half_block_rows() {
        let rows = MazeDifficulty::Hard.rows();
        assert_eq!(rows.div_ceil(2), 23);
    }
}
