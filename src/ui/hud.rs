use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::leaderboard::Standings;
use crate::snapshot::Snapshot;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    standings: &Standings,
    win_threshold: u32,
) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot, standings.best_score, win_threshold))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        score_area,
    );

    play_area
}

fn info_line(snapshot: &Snapshot, best_score: u32, win_threshold: u32) -> Line<'static> {
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score "),
        Span::styled(format!("{}/{win_threshold}", snapshot.score), value),
        Span::raw("  Length "),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::raw("  Best "),
        Span::styled(best_score.max(snapshot.score).to_string(), value),
    ])
}
