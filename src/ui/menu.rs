use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::leaderboard::Standings;
use crate::snapshot::EndReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, standings: &Standings) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body = vec![Line::from(format!("Best: {}", standings.best_score))];
    body.extend(history_lines(&standings.history));
    body.push(Line::from(""));
    body.push(Line::from("[Enter]/[Space] Start"));
    body.push(Line::from("[Q]/[Esc] Quit"));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );
}

/// Draws the end-of-game screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reason: EndReason,
    standings: &Standings,
) {
    let popup = centered_popup(area, 80, 70);
    frame.render_widget(Clear, popup);

    let (headline, color) = match reason {
        EndReason::Collision => ("GAME OVER", Color::Red),
        EndReason::Won => ("YOU WIN", Color::Green),
    };

    let mut lines = vec![
        Line::from(headline).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("Best: {}", standings.best_score)),
    ];
    lines.extend(history_lines(&standings.history));
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter]/[Space] Play again"));
    lines.push(Line::from("[Q]/[Esc] Quit"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn history_lines(history: &[u32]) -> Vec<Line<'static>> {
    if history.is_empty() {
        return vec![Line::from("No games yet")];
    }

    history
        .iter()
        .enumerate()
        .map(|(rank, score)| Line::from(format!("{}. {score}", rank + 1)))
        .collect()
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
