use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::MenuItem;

/// Numbered menu entries with the highlighted one marked.
fn menu_lines(selected: usize) -> Vec<Line<'static>> {
    MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!("{}. {}", i + 1, item.label());
            if i == selected {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::Cyan)),
                    Span::styled(text, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                ])
            } else {
                Line::from(vec![Span::raw("  "), Span::raw(text)])
            }
        })
        .collect()
}

pub fn render(frame: &mut Frame, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Title
            Constraint::Length(MenuItem::ALL.len() as u16 + 2), // Entries
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("CONNECT FOUR")
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let menu = Paragraph::new(menu_lines(selected))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Main Menu"));
    frame.render_widget(menu, chunks[1]);

    let controls = Paragraph::new("↑/↓: Move  |  Enter or 1-6: Select  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[3]);
}
