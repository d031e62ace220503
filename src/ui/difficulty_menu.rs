//! Difficulty selection screen.

use super::game_common::controls_line;
use mazerun::core::LogEntry;
use mazerun::maze::MazeDifficulty;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEY_BINDINGS: [&str; 5] = [
    "W - Move Up",
    "A - Move Left",
    "S - Move Down",
    "D - Move Right",
    "Arrow Keys - Move",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyMenu {
    pub selected_index: usize,
}

impl DifficultyMenu {
    pub fn navigate_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn navigate_down(&mut self) {
        if self.selected_index + 1 < MazeDifficulty::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> MazeDifficulty {
        MazeDifficulty::from_index(self.selected_index)
    }

    /// Point the cursor at `difficulty`, e.g. after a finished run.
    pub fn focus(&mut self, difficulty: MazeDifficulty) {
        self.selected_index = difficulty.index();
    }
}

/// Render the menu. `notice` is the latest log entry, shown under the list
/// (e.g. why a maze could not be built).
pub fn render_difficulty_menu(
    frame: &mut Frame,
    area: Rect,
    menu: &DifficultyMenu,
    notice: Option<&LogEntry>,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Maze Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Maze Game",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        KEY_BINDINGS
            .iter()
            .map(|&b| Line::from(Span::styled(b, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Select Difficulty",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, difficulty) in MazeDifficulty::ALL.iter().enumerate() {
        let selected = i == menu.selected_index;
        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{}{}. {:<7} {}x{}  {}s",
                marker,
                i + 1,
                difficulty.name(),
                difficulty.rows(),
                difficulty.columns(),
                difficulty.timer_secs()
            ),
            style,
        )));
    }

    lines.push(Line::from(""));
    if let Some(entry) = notice {
        let color = if entry.is_highlight {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(Span::styled(
            entry.message.clone(),
            Style::default().fg(color),
        )));
        lines.push(Line::from(""));
    }
    lines.push(controls_line(&[
        ("[Up/Down]", "Choose"),
        ("[Enter/1-3]", "Start"),
        ("[Q]", "Quit"),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
