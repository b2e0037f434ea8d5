#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board coordinates are small and non-negative once on screen
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::components::{GameOverReason, PieceKind};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, PIECE_SIZE};
use crate::shapes;
use crate::snapshot::SessionSnapshot;

const CELL_WIDTH: u16 = 2; // Each cell is 2 characters wide
const INFO_WIDTH: u16 = 24;
// Longest warning line plus borders and padding, three lines plus borders
const WARNING_WIDTH: u16 = 32;
const WARNING_HEIGHT: u16 = 5;

#[must_use]
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::J => Color::Blue,
        PieceKind::L => Color::LightYellow,
        PieceKind::O => Color::Yellow,
        PieceKind::S => Color::Green,
        PieceKind::T => Color::Magenta,
        PieceKind::Z => Color::Red,
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let board_width = BOARD_WIDTH as u16 * CELL_WIDTH + 2; // +2 for borders
    let board_height = BOARD_HEIGHT as u16 + 2;
    let min_total_width = board_width + INFO_WIDTH;
    let min_total_height = board_height + 2;

    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("glassblocks"))
        .wrap(Wrap { trim: true });
        f.render_widget(warning_text, warning_rect(f.area()));
        return;
    }

    let snapshot = app.snapshot();
    let settings = app.settings();

    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(board_width),
            Constraint::Length(INFO_WIDTH),
            Constraint::Fill(1),
        ])
        .split(f.area());

    let board_column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(board_height), // Board
            Constraint::Fill(1),
        ])
        .split(outer[1]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                      // Spacer to line up with the board
            Constraint::Length(PIECE_SIZE as u16 + 2), // Next piece
            Constraint::Length(7),                      // Score
            Constraint::Length(4),                      // Settings
            Constraint::Min(3),                         // Controls hint
        ])
        .split(outer[2]);

    let title = Paragraph::new("GLASSBLOCKS")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, board_column[0]);

    render_board(f, &snapshot, settings.helper_enabled, board_column[1]);
    render_next(f, snapshot.next, info_layout[1]);

    let stats = format!(
        "Score:  {}\nLevel:  {}\nGoal:   {}\nLines:  {}\nRecord: {}",
        snapshot.score, snapshot.level, snapshot.score_goal, snapshot.lines_cleared, settings.record,
    );
    let stats = Paragraph::new(stats)
        .block(Block::default().borders(Borders::ALL).title("Score"))
        .wrap(Wrap { trim: true });
    f.render_widget(stats, info_layout[2]);

    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    let toggles = format!(
        "Sound (T):  {}\nHelper (H): {}",
        on_off(settings.sound),
        on_off(settings.helper_enabled)
    );
    f.render_widget(
        Paragraph::new(toggles).block(Block::default().borders(Borders::ALL).title("Options")),
        info_layout[3],
    );

    f.render_widget(
        Paragraph::new("F1: Help\nQ: Quit").block(Block::default().borders(Borders::TOP)),
        info_layout[4],
    );

    if snapshot.game_over {
        render_game_over(f, &snapshot, settings.record, board_column[1]);
    }

    if app.show_help {
        render_help(f);
    }
}

fn render_board(f: &mut Frame, snapshot: &SessionSnapshot, helper_enabled: bool, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let active_color = snapshot.active.map(|view| kind_color(view.kind));

    for (y, row) in snapshot.cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let (col, board_row) = (x as i32, y as i32);
            let (symbol, color) = if let Some(kind) = cell {
                ("█", Some(kind_color(*kind)))
            } else if snapshot.active_covers(col, board_row) {
                ("█", active_color)
            } else if helper_enabled && snapshot.ghost_covers(col, board_row) {
                ("░", active_color)
            } else {
                continue;
            };

            let block_x = inner_area.left() + x as u16 * CELL_WIDTH;
            let block_y = inner_area.top() + y as u16;
            if block_x + CELL_WIDTH > inner_area.right() || block_y >= inner_area.bottom() {
                continue;
            }

            // Each cell is 2x1 characters to make it more square-like
            for dx in 0..CELL_WIDTH {
                if let Some(cell) = f.buffer_mut().cell_mut((block_x + dx, block_y)) {
                    cell.set_symbol(symbol);
                    cell.set_fg(color.unwrap_or(Color::White));
                    cell.set_bg(Color::Black);
                }
            }
        }
    }
}

fn render_next(f: &mut Frame, next: Option<PieceKind>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Next");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let Some(kind) = next else {
        return;
    };
    let color = kind_color(kind);
    for (col, row) in shapes::mask(kind, 0).cells() {
        let x = inner_area.left() + 1 + col as u16 * CELL_WIDTH;
        let y = inner_area.top() + row as u16;
        for dx in 0..CELL_WIDTH {
            if x + dx < inner_area.right() && y < inner_area.bottom() {
                if let Some(cell) = f.buffer_mut().cell_mut((x + dx, y)) {
                    cell.set_symbol("█");
                    cell.set_fg(color);
                }
            }
        }
    }
}

fn render_game_over(f: &mut Frame, snapshot: &SessionSnapshot, record: u32, area: Rect) {
    let headline = match snapshot.game_over_reason {
        Some(GameOverReason::MaxScore) => "MAX SCORE!",
        _ => "GAME OVER!",
    };
    let mut lines = vec![
        Line::from(headline).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Line::from(format!("Score: {}", snapshot.score)),
    ];
    if snapshot.score > 0 && snapshot.score == record {
        lines.push(Line::from("New record!").style(Style::default().fg(Color::Yellow)));
    }
    lines.push(Line::from("Space: restart"));

    let popup = Rect {
        x: area.x + 1,
        y: area.y + (area.height / 2).saturating_sub(3),
        width: area.width.saturating_sub(2),
        height: 6,
    };
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}

fn render_help(f: &mut Frame) {
    let help = Paragraph::new(
        "A / ←: Move left\n\
        D / →: Move right\n\
        S / ↓: Soft drop\n\
        W / ↑: Rotate\n\
        Space: Hard drop\n\
        T: Toggle sound\n\
        H: Toggle drop helper\n\
        F1: Close help\n\
        Q / Esc: Quit",
    )
    .block(Block::default().borders(Borders::ALL).title("Help"))
    .wrap(Wrap { trim: true });

    let area = centered_rect(40, 50, f.area());
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Centered box just large enough for the resize warning, shrunk to the
/// terminal when that is smaller.
pub(crate) fn warning_rect(area: Rect) -> Rect {
    let width = area.width.min(WARNING_WIDTH);
    let height = area.height.min(WARNING_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
