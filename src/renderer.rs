use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::input::Direction;
use crate::leaderboard::Standings;
use crate::snake::Position;
use crate::snapshot::{GameStatus, Snapshot};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Terminal columns per grid cell; keeps cells roughly square.
const CELL_COLUMNS: u16 = 2;

const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_FOOD: &str = "●";

/// Everything one frame needs, borrowed from the engine and the front-end.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub snapshot: &'a Snapshot,
    pub grid: GridSize,
    pub direction: Direction,
    pub standings: &'a Standings,
    pub win_threshold: u32,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: FrameView<'_>) {
    let area = frame.area();
    if !fits(area.width, area.height, view.grid) {
        render_too_small(frame, area, view.grid);
        return;
    }

    let play_area = render_hud(
        frame,
        area,
        view.snapshot,
        view.standings,
        view.win_threshold,
    );

    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, view.grid, view.snapshot.food);
    render_snake(frame, inner, view);

    match view.snapshot.status {
        GameStatus::Idle => render_start_menu(frame, play_area, view.standings),
        GameStatus::Ended(reason) => render_game_over_menu(
            frame,
            play_area,
            view.snapshot.score,
            reason,
            view.standings,
        ),
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, grid: GridSize, food: Position) {
    let Some((x, y)) = logical_to_terminal(inner, grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: FrameView<'_>) {
    let buffer = frame.buffer_mut();

    for (index, segment) in view.snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, view.grid, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(view.direction),
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲▲",
        Direction::Down => "▼▼",
        Direction::Left => "◀◀",
        Direction::Right => "▶▶",
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !grid.in_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

/// Terminal size needed to show the whole grid plus border and HUD.
#[must_use]
pub fn required_area(grid: GridSize) -> (u16, u16) {
    (
        grid.width.saturating_mul(CELL_COLUMNS).saturating_add(2),
        grid.height.saturating_add(3),
    )
}

/// True when a `width` x `height` terminal shows every cell of `grid`.
#[must_use]
pub fn fits(width: u16, height: u16, grid: GridSize) -> bool {
    let (needed_width, needed_height) = required_area(grid);
    width >= needed_width && height >= needed_height
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, grid: GridSize) {
    let (needed_width, needed_height) = required_area(grid);
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {needed_width}x{needed_height}")),
        Line::from(format!("have {}x{}", area.width, area.height)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::Yellow)),
        area,
    );
}
