use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32, theme: &Theme) {
    let lines = vec![
        Line::from("SNAKE").style(Style::new().fg(theme.score).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("High score: {high_score}")).style(Style::new().fg(theme.high_score)),
        Line::from(""),
        Line::from("Press [Enter] to begin!"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " start ", lines, theme);
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from("PAUSED").style(Style::new().fg(theme.paused).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over screen as a centered popup.
///
/// `previous_high_score` is the best score before this game ended.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    previous_high_score: u32,
    death_reason: Option<DeathReason>,
    theme: &Theme,
) {
    let is_new_high = score > previous_high_score;
    let mut lines = vec![
        Line::from("GAME OVER").style(Style::new().fg(theme.game_over).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(match death_reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            Some(DeathReason::BoardFull) => "Cause: board full",
            None => "",
        }),
    ];
    if is_new_high {
        lines.push(
            Line::from("New high score!")
                .style(Style::new().fg(theme.high_score).add_modifier(Modifier::BOLD)),
        );
    }
    lines.push(Line::from(""));
    lines.push(Line::from("[Enter] Play Again"));
    lines.push(Line::from("[Q] Quit"));

    render_popup(frame, area, " game over ", lines, theme);
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    theme: &Theme,
) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_popup(area, 28, height);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().bg(theme.background))
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(theme.border)),
            ),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    popup
}
