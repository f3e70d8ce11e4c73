use std::ops::Range;

use super::{Cell, LifeError};

/// BoardBounds is the fixed `[0, width) x [0, height)` rectangle that every
/// stored cell must lie in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardBounds {
    width: i32,
    height: i32,
}

impl BoardBounds {
    /// Validate and create bounds. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, LifeError> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Number of positions on the board
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// The 3x3 window around `cell` intersected with the board.
    ///
    /// Both ranges are half-open and never exceed `width`/`height`, so edge
    /// cells see fewer neighbor positions instead of wrapping.
    pub fn clamped_window(&self, cell: Cell) -> (Range<i32>, Range<i32>) {
        let xs = cell.x.saturating_sub(1).max(0)..cell.x.saturating_add(2).min(self.width);
        let ys = cell.y.saturating_sub(1).max(0)..cell.y.saturating_add(2).min(self.height);
        (xs, ys)
    }

    /// Every board position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    pub(crate) fn out_of_bounds(&self, cell: Cell) -> LifeError {
        LifeError::OutOfBoundsCell {
            cell,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_len(bounds: &BoardBounds, cell: Cell) -> usize {
        let (xs, ys) = bounds.clamped_window(cell);
        xs.len() * ys.len()
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            BoardBounds::new(0, 5),
            Err(LifeError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(BoardBounds::new(5, -1).is_err());
        assert!(BoardBounds::new(1, 1).is_ok());
    }

    #[test]
    fn test_contains() {
        let bounds = BoardBounds::new(4, 3).unwrap();
        assert!(bounds.contains(Cell::new(0, 0)));
        assert!(bounds.contains(Cell::new(3, 2)));
        assert!(!bounds.contains(Cell::new(4, 0)));
        assert!(!bounds.contains(Cell::new(0, 3)));
        assert!(!bounds.contains(Cell::new(-1, 1)));
    }

    #[test]
    fn test_corner_window_is_two_by_two() {
        let bounds = BoardBounds::new(10, 10).unwrap();
        assert_eq!(bounds.clamped_window(Cell::new(0, 0)), (0..2, 0..2));
        assert_eq!(bounds.clamped_window(Cell::new(9, 9)), (8..10, 8..10));
        assert_eq!(window_len(&bounds, Cell::new(0, 0)), 4);
    }

    #[test]
    fn test_window_never_reaches_width() {
        let bounds = BoardBounds::new(5, 5).unwrap();
        let (xs, ys) = bounds.clamped_window(Cell::new(4, 2));
        assert_eq!(xs, 3..5);
        assert_eq!(ys, 1..4);
        assert_eq!(window_len(&bounds, Cell::new(2, 0)), 6);
        assert_eq!(window_len(&bounds, Cell::new(2, 2)), 9);
    }

    #[test]
    fn test_window_of_single_cell_board() {
        let bounds = BoardBounds::new(1, 1).unwrap();
        assert_eq!(window_len(&bounds, Cell::new(0, 0)), 1);
    }

    #[test]
    fn test_positions_row_major() {
        let bounds = BoardBounds::new(2, 2).unwrap();
        let all: Vec<_> = bounds.positions().collect();
        assert_eq!(
            all,
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)]
        );
        assert_eq!(bounds.area(), 4);
    }
}
