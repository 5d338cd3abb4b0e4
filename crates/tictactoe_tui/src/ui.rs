//! Stateless rendering of a match snapshot.

use crate::geometry::{BoardGeometry, CELL_HEIGHT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Coord, Mark, MatchSnapshot, RoundOutcome};

/// Draws one frame and returns where the board landed.
pub fn draw(frame: &mut Frame, snapshot: &MatchSnapshot, cursor: Coord) -> BoardGeometry {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic Tac Toe - round {}", snapshot.round))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let geometry = BoardGeometry::centered(chunks[1], snapshot.size);
    draw_board(frame, chunks[1], &geometry, snapshot, cursor);

    draw_status(frame, chunks[2], snapshot);

    geometry
}

/// Scores of both players, as `P1 : 0 | P2 : 0`.
pub fn score_line(snapshot: &MatchSnapshot) -> String {
    let [one, two] = &snapshot.players;
    format!("{} : {} | {} : {}", one.name, one.score, two.name, two.score)
}

/// Whose turn it is, or how the round ended.
pub fn status_line(snapshot: &MatchSnapshot) -> String {
    match snapshot.outcome {
        RoundOutcome::InProgress => format!("Player {} turn", snapshot.active_player().name),
        RoundOutcome::Won { winner, .. } => {
            format!("Player {} win! (r to retry)", snapshot.player(winner).name)
        }
        RoundOutcome::Draw => "Draw! (r to retry)".to_string(),
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    geometry: &BoardGeometry,
    snapshot: &MatchSnapshot,
    cursor: Coord,
) {
    let bounds = geometry.bounds();
    let grid_style = Style::default().fg(Color::DarkGray);

    // Grid lines first; cells are drawn over the crossings.
    for i in 1..snapshot.size {
        let cell = geometry.cell_rect(Coord::new(i, i));
        let vertical = Rect::new(cell.x - 1, bounds.y, 1, bounds.height);
        let horizontal = Rect::new(bounds.x, cell.y - 1, bounds.width, 1);

        let bar = vec![Line::from("│"); bounds.height as usize];
        render_clipped(frame, area, Paragraph::new(bar).style(grid_style), vertical);
        render_clipped(
            frame,
            area,
            Paragraph::new("─".repeat(bounds.width as usize)).style(grid_style),
            horizontal,
        );
    }

    let winning = snapshot.winning_cells();
    for y in 0..snapshot.size {
        for x in 0..snapshot.size {
            let coord = Coord::new(x, y);
            let highlight = if winning.contains(&coord) {
                Some(Style::default().bg(Color::Green).fg(Color::Black))
            } else if coord == cursor && !snapshot.is_round_over() {
                Some(Style::default().bg(Color::White).fg(Color::Black))
            } else {
                None
            };
            draw_cell(frame, area, geometry.cell_rect(coord), snapshot, coord, highlight);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    rect: Rect,
    snapshot: &MatchSnapshot,
    coord: Coord,
    highlight: Option<Style>,
) {
    let (symbol, style) = match snapshot.cell(coord).map(|cell| cell.mark) {
        None => (" ", Style::default().fg(Color::DarkGray)),
        Some(Mark::Cross) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::Circle) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let style = match highlight {
        Some(h) => style.patch(h),
        None => style,
    };

    let pad = (CELL_HEIGHT as usize).saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); pad];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .style(highlight.unwrap_or_default())
        .alignment(Alignment::Center);
    render_clipped(frame, area, paragraph, rect);
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &MatchSnapshot) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let scores = Paragraph::new(score_line(snapshot)).style(Style::default().fg(Color::White));
    frame.render_widget(scores, halves[0]);

    let status = Paragraph::new(status_line(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Right);
    frame.render_widget(status, halves[1]);
}

/// Renders only the part of `rect` inside `area`, for boards larger than the terminal.
fn render_clipped(frame: &mut Frame, area: Rect, widget: Paragraph<'_>, rect: Rect) {
    let clipped = rect.intersection(area);
    if !clipped.is_empty() {
        frame.render_widget(widget, clipped);
    }
}
