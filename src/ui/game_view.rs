use super::app::awaiting_human;
use crate::game::{Board, Cell, Controller, GameOutcome, Phase, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    controller: &Controller,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Tally
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, controller, chunks[0]);
    render_board(
        frame,
        controller.board(),
        controller.last_move(),
        awaiting_human(controller.phase()).then_some(selected_column),
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_tally(frame, controller, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Red,
        Player::Computer => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, controller: &Controller, area: Rect) {
    let (status, color) = match controller.phase() {
        Phase::AwaitingHuman => ("Your turn".to_string(), player_color(Player::Human)),
        Phase::AwaitingComputer => (
            format!("{} is thinking...", controller.computer_name()),
            player_color(Player::Computer),
        ),
        Phase::GameOver(GameOutcome::Winner(player)) => {
            (format!("Game Over  |  {} wins", player.name()), player_color(player))
        }
        Phase::GameOver(_) => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    last_move: Option<(usize, usize)>,
    selected_column: Option<usize>,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if selected_column == Some(col) {
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

    lines.push(Line::from("  ╔═════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Human => (" ● ", player_color(Player::Human)),
                Cell::Computer => (" ● ", player_color(Player::Computer)),
            };
            let mut style = Style::default().fg(color);
            if last_move == Some((row, col)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if selected_column == Some(col) {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_tally(frame: &mut Frame, controller: &Controller, area: Rect) {
    let tally = controller.win_tally();
    let line = Line::from(vec![
        Span::styled(
            format!("Player Wins: {}", tally.human_wins),
            Style::default().fg(player_color(Player::Human)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("CPU Wins: {}", tally.computer_wins),
            Style::default().fg(player_color(Player::Computer)),
        ),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
