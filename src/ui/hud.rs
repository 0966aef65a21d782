use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{tick_interval, GameState};

/// Supplemental values displayed beside the board.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    /// High score before the current game, used to spot a new record.
    pub previous_high_score: u32,
    /// False while the start screen is showing.
    pub started: bool,
    pub theme: &'a Theme,
}

/// Renders the score, controls and rules panels into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let [score_area, controls_area, rules_area] = Layout::vertical([
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Min(0),
    ])
    .areas(area);

    let theme = info.theme;
    let panel = |title: &'static str| {
        Block::bordered()
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(Style::new().fg(theme.border))
    };

    frame.render_widget(
        Paragraph::new(score_lines(state, info))
            .alignment(Alignment::Center)
            .block(panel(" Snake Game ")),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(controls_lines(theme)).block(panel(" Controls ")),
        controls_area,
    );

    frame.render_widget(
        Paragraph::new(rules_lines(theme))
            .wrap(Wrap { trim: true })
            .block(panel(" How to Play ")),
        rules_area,
    );
}

fn score_lines(state: &GameState, info: &HudInfo<'_>) -> Vec<Line<'static>> {
    let theme = info.theme;
    let interval = tick_interval(state.score);

    vec![
        Line::from(Span::styled(
            format!("Score: {}", state.score),
            Style::new().fg(theme.score).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("High Score: {}", info.high_score),
            Style::new().fg(theme.high_score),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Length: {}  Tick: {}ms", state.snake.len(), interval.as_millis()),
            Style::new().fg(theme.muted),
        )),
        Line::from(""),
        status_line(state, info),
    ]
}

fn status_line(state: &GameState, info: &HudInfo<'_>) -> Line<'static> {
    let theme = info.theme;
    if !info.started {
        Line::from(Span::styled("[Enter] Start", Style::new().fg(theme.muted)))
    } else if state.game_over {
        Line::from(Span::styled(
            "GAME OVER",
            Style::new().fg(theme.game_over).add_modifier(Modifier::BOLD),
        ))
    } else if state.paused {
        Line::from(Span::styled(
            "PAUSED",
            Style::new().fg(theme.paused).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled("[Space] Pause", Style::new().fg(theme.muted)))
    }
}

fn controls_lines(theme: &Theme) -> Vec<Line<'static>> {
    [
        ("Move", "Arrows / WASD"),
        ("Pause", "Space"),
        ("Restart", "Enter (game over)"),
        ("Quit", "Q / Esc"),
    ]
    .into_iter()
    .map(|(action, keys)| {
        Line::from(vec![
            Span::styled(format!("{action:<9}"), Style::new().fg(theme.muted)),
            Span::raw(keys),
        ])
    })
    .collect()
}

fn rules_lines(theme: &Theme) -> Vec<Line<'static>> {
    [
        "Eat the food to grow and score points",
        "Avoid hitting walls or yourself",
        "Game speed increases with score",
        "Try to beat your high score!",
    ]
    .into_iter()
    .map(|rule| Line::from(Span::styled(format!("• {rule}"), Style::new().fg(theme.muted))))
    .collect()
}
