#![allow(
    // Board coordinates are bounded by the grid size and fit comfortably in u16
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::{Position, TetrominoType};
use crate::engine::{EngineState, PieceView, Snapshot};
use crate::scoring::Leaderboard;

// Each cell is 2 characters wide and 1 tall so blocks look roughly square
const CELL_WIDTH: u16 = 2;
const MIN_INFO_WIDTH: u16 = 24;
const LEADERBOARD_ROWS: usize = 5;

#[must_use]
pub fn color_for(kind: TetrominoType) -> Color {
    match kind {
        TetrominoType::I => Color::Cyan,
        TetrominoType::O => Color::Yellow,
        TetrominoType::T => Color::Magenta,
        TetrominoType::S => Color::Green,
        TetrominoType::Z => Color::Red,
        TetrominoType::J => Color::Blue,
        TetrominoType::L => Color::LightYellow,
    }
}

/// Every visible block on the board: locked cells followed by the falling
/// piece's cells that are inside the grid.
#[must_use]
pub fn render_blocks(snapshot: &Snapshot) -> Vec<(Position, TetrominoType)> {
    let grid = &snapshot.grid;
    let mut blocks: Vec<_> = grid
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| {
                cell.map(|kind| {
                    (
                        Position {
                            x: x as i32,
                            y: y as i32,
                        },
                        kind,
                    )
                })
            })
        })
        .collect();

    if let Some(piece) = &snapshot.current {
        blocks.extend(
            piece_cells(piece)
                .filter(|cell| grid.in_bounds(cell.x, cell.y))
                .map(|cell| (cell, piece.kind)),
        );
    }

    blocks
}

fn piece_cells(piece: &PieceView) -> impl Iterator<Item = Position> + '_ {
    piece.shape.iter().enumerate().flat_map(move |(cy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(cx, _)| piece.position.offset(cx as i32, cy as i32))
    })
}

pub fn render(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let grid_width = snapshot.grid.width() as u16;
    let grid_height = snapshot.grid.height() as u16;

    let board_width = grid_width * CELL_WIDTH + 2; // +2 for borders
    let board_height = grid_height + 2;
    let min_total_width = board_width + MIN_INFO_WIDTH;
    let min_total_height = board_height + 2;

    // Check if the terminal is too small to render the game properly
    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("blockfall"));

        let warning_area = centered_rect(60, 40, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(MIN_INFO_WIDTH)])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let title = Paragraph::new("BLOCKFALL")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_board(f, &snapshot, game_layout[1]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Next piece
            Constraint::Length(6), // Stats
            Constraint::Min(3),    // Leaderboard and controls
        ])
        .split(main_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    render_next(f, snapshot.next.as_ref(), info_layout[1]);

    let stats = format!(
        "Score: {}\nHigh:  {}\nLevel: {}\nLines: {}",
        snapshot.score, snapshot.high_score, snapshot.level, snapshot.lines,
    );
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::TOP)),
        info_layout[2],
    );

    let lower = if app.show_leaderboard {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(LEADERBOARD_ROWS as u16 + 1),
                Constraint::Min(3),
            ])
            .split(info_layout[3]);
        render_leaderboard(f, app.engine().leaderboard(), split[0]);
        split[1]
    } else {
        info_layout[3]
    };

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→: Move left/right\n\
        ↓: Soft drop\n\
        ↑/X: Rotate\n\
        Space: Hard drop\n\
        Enter: Start  R: Restart\n\
        Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, lower);
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    for (position, kind) in render_blocks(snapshot) {
        let block_x = inner_area.left() + position.x as u16 * CELL_WIDTH;
        let block_y = inner_area.top() + position.y as u16;
        draw_cell(f, block_x, block_y, color_for(kind), inner_area);
    }

    let overlay = match snapshot.state {
        EngineState::Ready => Some(("Press Enter", Color::Yellow)),
        EngineState::GameOver => Some(("GAME OVER", Color::Red)),
        EngineState::Running => None,
    };

    if let Some((text, color)) = overlay {
        let banner = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        let banner_area = Rect {
            x: inner_area.x,
            y: inner_area.y + inner_area.height / 2,
            width: inner_area.width,
            height: 1,
        };
        f.render_widget(banner, banner_area);

        if snapshot.state == EngineState::GameOver {
            let hint = Paragraph::new("Enter/R: again")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            let hint_area = Rect {
                y: banner_area.y + 1,
                ..banner_area
            };
            f.render_widget(hint, hint_area);
        }
    }
}

fn render_next(f: &mut Frame, next: Option<&PieceView>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Next");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let Some(piece) = next else {
        return;
    };

    let width = piece.shape.first().map_or(0, Vec::len) as u16;
    let offset_x = inner_area.x + inner_area.width.saturating_sub(width * CELL_WIDTH) / 2;

    for (cy, row) in piece.shape.iter().enumerate() {
        for (cx, filled) in row.iter().enumerate() {
            if *filled {
                let x = offset_x + cx as u16 * CELL_WIDTH;
                let y = inner_area.y + cy as u16;
                draw_cell(f, x, y, color_for(piece.kind), inner_area);
            }
        }
    }
}

fn render_leaderboard(f: &mut Frame, leaderboard: &Leaderboard, area: Rect) {
    let lines: Vec<Line> = if leaderboard.is_empty() {
        vec![Line::from("No games yet")]
    } else {
        leaderboard
            .entries()
            .iter()
            .take(LEADERBOARD_ROWS)
            .enumerate()
            .map(|(rank, entry)| {
                Line::from(format!(
                    "{:>2}. {:>7}  L{}",
                    rank + 1,
                    entry.score,
                    entry.level
                ))
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title("Best"));
    f.render_widget(widget, area);
}

fn draw_cell(f: &mut Frame, x: u16, y: u16, color: Color, bounds: Rect) {
    for dx in 0..CELL_WIDTH {
        let cell_x = x + dx;
        if cell_x >= bounds.right() || y >= bounds.bottom() {
            continue;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((cell_x, y)) {
            cell.set_symbol("█");
            cell.set_fg(color);
            cell.set_bg(Color::Black);
        }
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
