use crate::game::{Board, Dice, GameState, Move, Player, NUM_POINTS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    dice: Option<Dice>,
    highlight: Option<Move>,
    selected: usize,
    legal_count: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, dice, chunks[0]);
    render_board(frame, game_state.board(), highlight, chunks[1]);
    render_message(frame, message, selected, legal_count, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    dice: Option<Dice>,
    area: ratatui::layout::Rect,
) {
    let current_player = game_state.current_player();
    let color = match current_player {
        Player::White => Color::White,
        Player::Black => Color::Red,
    };

    let status = if game_state.is_terminal() {
        "Game Over".to_string()
    } else {
        match dice {
            Some(dice) => format!("Current Player: {}  |  Dice: {}", current_player.name(), dice),
            None => format!("Current Player: {}", current_player.name()),
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Backgammon"));

    frame.render_widget(header, area);
}

/// One board point as a colored 4-character cell.
fn point_span(board: &Board, index: usize, highlight: Option<Move>) -> Span<'static> {
    let highlighted = match highlight {
        Some(mv) => {
            mv.from() == index || matches!(mv, Move::Step { to, .. } if to == index)
        }
        None => false,
    };

    let point = board.point(index);
    let (text, mut style) = match point.owner() {
        Some(Player::White) => (
            format!("{:^4}", format!("W{}", point.count())),
            Style::default().fg(Color::White),
        ),
        Some(Player::Black) => (
            format!("{:^4}", format!("B{}", point.count())),
            Style::default().fg(Color::Red),
        ),
        None => (format!("{:^4}", "."), Style::default().fg(Color::DarkGray)),
    };
    if highlighted {
        style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    Span::styled(text, style)
}

/// Two rows of twelve points, wrapping the way a physical board does:
/// points 13-24 across the top, 12-1 back across the bottom.
fn render_board(
    frame: &mut Frame,
    board: &Board,
    highlight: Option<Move>,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    let mut label_top = vec![Span::raw("  ")];
    for number in 13..=24 {
        if number == 19 {
            label_top.push(Span::raw("  "));
        }
        label_top.push(Span::raw(format!("{:^4}", number)));
    }
    lines.push(Line::from(label_top));

    let mut top = vec![Span::raw("  ")];
    for index in 12..NUM_POINTS {
        if index == 18 {
            top.push(Span::raw("| "));
        }
        top.push(point_span(board, index, highlight));
    }
    lines.push(Line::from(top));

    lines.push(Line::from(format!(
        "Bar  W:{} B:{}      Off  W:{} B:{}",
        board.bar(Player::White),
        board.bar(Player::Black),
        board.borne_off(Player::White),
        board.borne_off(Player::Black),
    )));

    let mut bottom = vec![Span::raw("  ")];
    for index in (0..12).rev() {
        if index == 5 {
            bottom.push(Span::raw("| "));
        }
        bottom.push(point_span(board, index, highlight));
    }
    lines.push(Line::from(bottom));

    let mut label_bottom = vec![Span::raw("  ")];
    for number in (1..=12).rev() {
        if number == 6 {
            label_bottom.push(Span::raw("  "));
        }
        label_bottom.push(Span::raw(format!("{:^4}", number)));
    }
    lines.push(Line::from(label_bottom));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(widget, area);
}

fn render_message(
    frame: &mut Frame,
    message: &Option<String>,
    selected: usize,
    legal_count: usize,
    area: ratatui::layout::Rect,
) {
    let text = match message {
        Some(msg) => msg.clone(),
        None if legal_count > 0 => format!("Move {}/{}", selected + 1, legal_count),
        None => String::new(),
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Choose move  |  Enter: Play  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled(
            "White",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw(": you   "),
        Span::styled(
            "Black",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(": engine"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
