use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::game::GameMode;
use crate::stats::{ModeRecord, Statistics};

const HEADER: [&str; 7] = ["Mode", "Games", "P1 wins", "P2 wins", "CPU wins", "Draws", "Avg plies"];

/// Table cells for one mode. Columns that cannot apply show a dash.
fn row_cells(mode: GameMode, record: &ModeRecord) -> [String; 7] {
    let (p2, cpu) = match mode {
        GameMode::PlayerVsPlayer => (record.player2_wins.to_string(), "-".to_string()),
        GameMode::Computer(_) => ("-".to_string(), record.computer_wins.to_string()),
    };
    [
        mode.name().to_string(),
        record.games.to_string(),
        record.player1_wins.to_string(),
        p2,
        cpu,
        record.draws.to_string(),
        format!("{:.1}", record.average_plies()),
    ]
}

pub fn render(frame: &mut Frame, stats: &Statistics) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Table
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new(format!("Games played this session: {}", stats.total_games()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(header, chunks[0]);

    let rows = stats
        .iter()
        .map(|(mode, record)| Row::new(row_cells(mode, record).map(Cell::from)));
    let widths = [
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(6),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(HEADER)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(table, chunks[1]);

    let controls = Paragraph::new("C: Clear  |  Esc: Menu")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}
