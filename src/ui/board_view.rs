//! Board rendering for the Gobang GUI

use crate::rules::WIN_COUNT;
use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Clicks are only reported while `accepting_input` is set and only on
    /// empty cells.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; WIN_COUNT]>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accepting_input {
            return None;
        }

        let board_pos = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
            .filter(|&pos| board.get(pos) == Cell::Empty)?;

        self.draw_hover_preview(&painter, board_pos);
        response.clicked().then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw cell indices 0-14 along the top and left edges
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 14.0);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), AXIS_LABEL);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), AXIS_LABEL);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.stones(crate::Side::Black).iter_ones() {
            self.draw_stone(painter, pos, Cell::Black);
        }
        for pos in board.stones(crate::Side::White).iter_ones() {
            self.draw_stone(painter, pos, Cell::White);
        }
    }

    /// Draw a single stone with shading
    fn draw_stone(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Cell::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_COUNT]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// White stone preview under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_preview());
    }

    /// Convert screen coordinates to the nearest board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        cell_at(self.board_rect.min, self.cell_size, screen_pos)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Cell whose intersection is nearest to `screen_pos`, for a board drawn at
/// `origin` with grid spacing `cell_size`
fn cell_at(origin: Pos2, cell_size: f32, screen_pos: Pos2) -> Option<Pos> {
    let relative = screen_pos - origin;
    let x = (relative.x - BOARD_MARGIN + cell_size * 0.5) / cell_size;
    let y = (relative.y - BOARD_MARGIN + cell_size * 0.5) / cell_size;

    Pos::checked(x.floor() as i32, y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_intersections() {
        let origin = Pos2::new(10.0, 20.0);
        let cell = 30.0;

        let first = Pos2::new(10.0 + BOARD_MARGIN, 20.0 + BOARD_MARGIN);
        assert_eq!(cell_at(origin, cell, first), Some(Pos::new(0, 0)));

        // Slightly off an intersection still snaps to it
        let near = Pos2::new(first.x + 3.0 * cell + 10.0, first.y + 5.0 * cell - 10.0);
        assert_eq!(cell_at(origin, cell, near), Some(Pos::new(3, 5)));

        let last = Pos2::new(first.x + 14.0 * cell, first.y + 14.0 * cell);
        assert_eq!(cell_at(origin, cell, last), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_cell_at_outside_grid() {
        let origin = Pos2::new(0.0, 0.0);
        let cell = 30.0;

        assert_eq!(cell_at(origin, cell, Pos2::new(0.0, 0.0)), None);
        let beyond = BOARD_MARGIN + 15.0 * cell;
        assert_eq!(cell_at(origin, cell, Pos2::new(beyond, BOARD_MARGIN)), None);
    }
}
