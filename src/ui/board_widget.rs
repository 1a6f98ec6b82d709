use crate::game::{Board, Cell, Move, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const PIECE: &str = " \u{25cf} ";

fn cell_style(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Player1 => (PIECE, Color::Red),
        Cell::Player2 => (PIECE, Color::Yellow),
    }
}

/// Lines for the framed board: column numbers, the six rows, and a marker
/// under `selected`. The piece at `last_move` is drawn bold and reversed.
pub fn board_lines(board: &Board, selected: Option<usize>, last_move: Option<Move>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = cell_style(board.get(row, col));
            let mut style = Style::default().fg(color);
            if last_move == Some(Move::new(row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if Some(col) == selected {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
