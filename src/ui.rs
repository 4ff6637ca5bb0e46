use crate::consts;
use crate::game::{GameOverReason, GamePhase, Snapshot};
use crate::grid::{in_bounds, Cell};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Widget},
};

/// Minimum width of the whole display, so that the messages under the play
/// area fit on small boards
const MESSAGE_WIDTH: u16 = 36;

static INSTRUCTIONS: &[&str] = &[
    "",
    "Steer with ← ↓ ↑ →",
    "or a s w d / h j k l",
    "",
    "Press a direction",
    "to start, q to quit",
];

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let field_size = Size {
            width: self
                .bounds
                .width()
                .saturating_mul(consts::CELL_COLUMNS)
                .saturating_add(2),
            height: self.bounds.height().saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: field_size.width.max(MESSAGE_WIDTH),
                height: field_size.height.saturating_add(3),
            },
        );
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(field_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score()), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_area = center_rect(block_area, field_size);
        Block::bordered().render(block_area, buf);
        let level_area = block_area.inner(Margin::new(1, 1));

        match self.phase {
            GamePhase::StartScreen => render_instructions(level_area, buf),
            GamePhase::Playing => self.render_field(level_area, buf),
            GamePhase::GameOver(reason) => {
                self.render_field(level_area, buf);
                Span::from(format!(" {}", headline(reason))).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press any "),
                    Span::styled("key", consts::KEY_STYLE),
                    Span::raw(" to exit."),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

impl Snapshot {
    fn render_field(&self, area: Rect, buf: &mut Buffer) {
        let mut level = Canvas { area, buf };
        for &c in &self.trail {
            level.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.food {
            level.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if let GamePhase::GameOver(_) = self.phase {
            // A head that left the board is marked on the last cell it
            // occupied
            let crash_site = if !in_bounds(self.head, self.bounds) {
                self.direction.opposite().advance(self.head)
            } else {
                self.head
            };
            level.draw_cell(
                crash_site,
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(self.head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
        }
    }
}

fn render_instructions(area: Rect, buf: &mut Buffer) {
    let mut text = Text::from(Line::styled("S N A K E", consts::TITLE_STYLE));
    text.extend(INSTRUCTIONS.iter().copied().map(Line::from));
    let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
    let text_area = center_rect(
        area,
        Size {
            width: area.width,
            height,
        },
    );
    text.centered().render(text_area, buf);
}

fn headline(reason: GameOverReason) -> &'static str {
    match reason {
        GameOverReason::SelfCollision => "GAME OVER: You ran into yourself!",
        GameOverReason::OutOfBounds => "GAME OVER: You left the board!",
        GameOverReason::BoardFull => "You filled the whole board!",
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` across the terminal columns making up the cell at `pos`.
    /// Cells outside the canvas are skipped.
    fn draw_cell(&mut self, pos: Cell, symbol: &str, style: Style) {
        let (Ok(col), Ok(row)) = (u16::try_from(pos.col), u16::try_from(pos.row)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_COLUMNS)
            .and_then(|c| self.area.x.checked_add(c))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(row) else {
            return;
        };
        for (dx, ch) in (0..consts::CELL_COLUMNS).zip(symbol.chars()) {
            let Some(x) = x.checked_add(dx) else {
                return;
            };
            if !self.area.contains((x, y).into()) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(style);
            }
        }
    }
}
