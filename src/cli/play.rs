//! Play command implementation - Interactive TUI game.

// TUI rendering uses intentional casts for layout math
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::stdout;
use std::time::Duration;
use twenty48::board::SIZE;
use twenty48::{Board, Coord, Direction, Tile};

/// Width of one rendered cell in terminal columns.
const CELL_WIDTH: usize = 9;
/// Height of one rendered cell in terminal rows.
const CELL_HEIGHT: u16 = 3;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub(crate) fn execute(seed: Option<u64>) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    run_tui(Board::new(seed))
}

fn run_tui(mut board: Board) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut board);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    board: &mut Board,
) -> Result<(), CliError> {
    loop {
        terminal
            .draw(|f| ui(f, board))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Handle input with timeout
        if event::poll(Duration::from_millis(100)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => board.restart(),
                code => {
                    if let Some(direction) = direction_for(code) {
                        if board.is_game_over() {
                            // A direction key after game over starts a new
                            // game, like the original's key handler
                            board.restart();
                        } else {
                            board.apply_move(direction)?;
                        }
                    } else if code == KeyCode::Enter && board.is_game_over() {
                        board.restart();
                    }
                }
            }
        }
    }

    Ok(())
}

/// Map movement keys (arrows, hjkl, wasd) to a direction.
fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 's') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('h' | 'a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'd') => Some(Direction::Right),
        _ => None,
    }
}

fn ui(f: &mut Frame, board: &mut Board) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),                   // Header
            Constraint::Length(CELL_HEIGHT * 4 + 2), // Board
            Constraint::Length(3),                   // Footer
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0], board);
    render_board(f, chunks[1], board);
    render_footer(f, chunks[2]);

    if board.is_game_over() {
        render_game_over(f, chunks[1], board);
    }
}

fn render_header(f: &mut Frame, area: Rect, board: &Board) {
    let title = format!(
        " 2048 | Score: {} | Best: {} | Max tile: {} ",
        board.score(),
        board.best(),
        board.max_tile()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, board: &mut Board) {
    let mut lines: Vec<Line> = Vec::new();

    for row in 0..SIZE {
        let mut pad_top = Vec::new();
        let mut middle = Vec::new();
        let mut pad_bottom = Vec::new();

        for col in 0..SIZE {
            let coord = Coord::new(row as u8, col as u8);
            let Some(tile) = board.grid_mut().get_mut(coord) else {
                continue;
            };
            let spawned = tile.consume_spawn_flag();
            let style = tile_style(*tile, spawned);
            let text = if tile.is_empty() {
                String::new()
            } else {
                tile.value().to_string()
            };

            pad_top.push(Span::styled(" ".repeat(CELL_WIDTH), style));
            middle.push(Span::styled(
                format!("{text:^width$}", width = CELL_WIDTH),
                style,
            ));
            pad_bottom.push(Span::styled(" ".repeat(CELL_WIDTH), style));
        }

        lines.push(Line::from(pad_top));
        lines.push(Line::from(middle));
        lines.push(Line::from(pad_bottom));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

/// Style for one cell, using the classic 2048 palette. Freshly spawned
/// tiles are shown bold for one frame.
fn tile_style(tile: Tile, spawned: bool) -> Style {
    let bg = match tile.value() {
        0 => Color::Rgb(206, 192, 181),
        2 => Color::Rgb(238, 228, 217),
        4 => Color::Rgb(239, 224, 201),
        8 => Color::Rgb(240, 178, 122),
        16 => Color::Rgb(235, 142, 83),
        32 => Color::Rgb(242, 126, 93),
        64 => Color::Rgb(237, 88, 56),
        128 => Color::Rgb(241, 216, 106),
        256 => Color::Rgb(241, 208, 76),
        512 => Color::Rgb(249, 202, 88),
        1024 => Color::Rgb(237, 197, 63),
        _ => Color::Rgb(251, 197, 45),
    };
    let fg = if tile.value() <= 4 {
        Color::Rgb(104, 95, 87)
    } else {
        Color::Rgb(249, 240, 236)
    };

    let style = Style::default().fg(fg).bg(bg);
    if spawned {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn render_game_over(f: &mut Frame, area: Rect, board: &Board) {
    let message = if board.is_win() {
        "You won!"
    } else {
        "Game over!"
    };

    let box_width = 34u16.min(area.width);
    let box_height = 4u16.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(box_width)) / 2,
        y: area.y + (area.height.saturating_sub(box_height)) / 2,
        width: box_width,
        height: box_height,
    };

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Press Enter to play again :)"),
    ];

    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(Clear, overlay);
    f.render_widget(popup, overlay);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let controls = " [q] Quit  [r] Restart  [↑↓←→ / hjkl / wasd] Move ";

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
