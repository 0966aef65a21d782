use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BOARD_SIZE, CELL_WIDTH, GLYPH_CELL, GLYPH_GRID};
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns taken by the bordered board.
pub const BOARD_COLUMNS: u16 = BOARD_SIZE * CELL_WIDTH + 2;

/// Terminal rows taken by the bordered board.
pub const BOARD_ROWS: u16 = BOARD_SIZE + 2;

/// Terminal columns taken by the side panel.
pub const HUD_COLUMNS: u16 = 32;

const PANEL_GAP: u16 = 2;

/// Splits `area` into the board and side-panel rectangles, centred.
#[must_use]
pub fn layout(area: Rect) -> (Rect, Rect) {
    let [row] = Layout::vertical([Constraint::Length(BOARD_ROWS)])
        .flex(Flex::Center)
        .areas(area);
    let [board, _, hud] = Layout::horizontal([
        Constraint::Length(BOARD_COLUMNS),
        Constraint::Length(PANEL_GAP),
        Constraint::Length(HUD_COLUMNS),
    ])
    .flex(Flex::Center)
    .areas(row);

    (board, hud)
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: HudInfo<'_>) {
    let (board_area, hud_area) = layout(frame.area());
    let theme = hud_info.theme;

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border))
        .style(Style::new().bg(theme.background));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, theme);
    render_food(frame, inner, state.food, theme);
    render_snake(frame, inner, state, theme);
    render_hud(frame, hud_area, state, &hud_info);

    if !hud_info.started {
        render_start_menu(frame, board_area, hud_info.high_score, theme);
    } else if state.game_over {
        render_game_over_menu(
            frame,
            board_area,
            state.score,
            hud_info.previous_high_score,
            state.death_reason,
            theme,
        );
    } else if state.paused {
        render_pause_menu(frame, board_area, theme);
    }
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, theme: &Theme) {
    let style = Style::new().fg(theme.grid).bg(theme.background);
    let size = i32::from(BOARD_SIZE);
    let buffer = frame.buffer_mut();

    for y in 0..size {
        for x in 0..size {
            if let Some((column, row)) = cell_to_terminal(inner, Position::new(x, y)) {
                buffer.set_string(column, row, GLYPH_GRID, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Position, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(theme.food).bg(theme.background));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head_style = Style::new()
        .fg(theme.snake_head)
        .bg(theme.background)
        .add_modifier(Modifier::BOLD);
    let body_style = Style::new().fg(theme.snake_body).bg(theme.background);

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments().skip(1) {
        if let Some((x, y)) = cell_to_terminal(inner, *segment) {
            buffer.set_string(x, y, GLYPH_CELL, body_style);
        }
    }

    if let Some((x, y)) = cell_to_terminal(inner, state.snake.head()) {
        buffer.set_string(x, y, GLYPH_CELL, head_style);
    }
}

/// Maps a board cell to the terminal column/row of its left half, if visible.
fn cell_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds() {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{THEME_EMBER, GLYPH_CELL};
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};
    use crate::ui::hud::HudInfo;

    use super::{cell_to_terminal, layout, render, BOARD_COLUMNS, BOARD_ROWS};

    fn draw(state: &GameState, started: bool) -> Buffer {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                render(
                    frame,
                    state,
                    HudInfo {
                        high_score: 120,
                        previous_high_score: 120,
                        started,
                        theme: &THEME_EMBER,
                    },
                )
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn symbol_at(buffer: &Buffer, x: u16, y: u16) -> String {
        buffer
            .cell((x, y))
            .map(|cell| cell.symbol().to_owned())
            .unwrap_or_default()
    }

    #[test]
    fn cells_map_two_columns_wide_inside_the_border() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(cell_to_terminal(inner, Position::new(0, 0)), Some((1, 1)));
        assert_eq!(cell_to_terminal(inner, Position::new(19, 19)), Some((39, 20)));
        assert_eq!(cell_to_terminal(inner, Position::new(20, 0)), None);
        assert_eq!(cell_to_terminal(Rect::new(1, 1, 10, 5), Position::new(10, 0)), None);
    }

    #[test]
    fn layout_fits_board_and_panel_side_by_side() {
        let (board, hud) = layout(Rect::new(0, 0, 100, 30));

        assert_eq!(board.width, BOARD_COLUMNS);
        assert_eq!(board.height, BOARD_ROWS);
        assert!(hud.x > board.right());
    }

    #[test]
    fn running_game_draws_snake_food_and_score() {
        let snake = Snake::initial();
        let state = GameState::from_parts(snake, Position::new(3, 4), Direction::Right);
        let buffer = draw(&state, true);
        let (board, _) = layout(Rect::new(0, 0, 100, 30));
        let inner = Rect::new(board.x + 1, board.y + 1, board.width - 2, board.height - 2);

        let (head_x, head_y) =
            cell_to_terminal(inner, Position::new(10, 10)).expect("head is on the board");
        let (food_x, food_y) =
            cell_to_terminal(inner, Position::new(3, 4)).expect("food is on the board");
        let cell_char = GLYPH_CELL.chars().next().map(String::from).unwrap_or_default();

        assert_eq!(symbol_at(&buffer, head_x, head_y), cell_char);
        assert_eq!(symbol_at(&buffer, food_x, food_y), cell_char);
        assert_eq!(
            buffer.cell((head_x, head_y)).map(|cell| cell.fg),
            Some(THEME_EMBER.snake_head)
        );
        assert_eq!(
            buffer.cell((food_x, food_y)).map(|cell| cell.fg),
            Some(THEME_EMBER.food)
        );

        let screen = text(&buffer);
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("High Score: 120"));
    }

    #[test]
    fn overlays_follow_game_phase() {
        let state = GameState::from_parts(Snake::initial(), Position::new(3, 4), Direction::Right);

        assert!(text(&draw(&state, false)).contains("Press [Enter] to begin!"));
        assert!(text(&draw(&state.toggled_pause(), true)).contains("[Space] Resume"));

        let finished = GameState {
            game_over: true,
            score: 150,
            ..state
        };
        let screen = text(&draw(&finished, true));
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("Score: 150"));
        assert!(screen.contains("New high score!"));
    }
}
