use crate::game::{GameSession, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(frame: &mut Frame, session: &GameSession, selected_column: usize, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Header text and colour for the session's current state.
fn status_line(session: &GameSession) -> (String, Color) {
    let mode = session.mode().name();
    match session.status() {
        GameStatus::InProgress => {
            let player = session.current_player();
            let who = if session.is_computer_turn() {
                format!("Computer ({})", session.computer_name().unwrap_or("AI"))
            } else {
                player.name().to_string()
            };
            (
                format!("Turn {}: {}  |  {}", session.move_count() + 1, who, mode),
                player_color(player),
            )
        }
        GameStatus::Win(player) => (format!("Game Over  |  {} wins  |  {}", player.name(), mode), player_color(player)),
        GameStatus::Draw => (format!("Game Over  |  Draw  |  {mode}"), Color::White),
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (status, color) = status_line(session);
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &GameSession, selected_column: usize, area: Rect) {
    // Hide the cursor while it is not the human's move.
    let selected = (!session.status().is_terminal() && !session.is_computer_turn()).then_some(selected_column);
    let lines = board_widget::board_lines(session.board(), selected, session.last_move());
    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or 1-7: Select  |  Enter: Drop  |  R: Restart  |  Esc: Menu");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
