use super::{BoardBounds, Cell, Snapshot};

/// Count live neighbors of `cell` inside the clamped 3x3 window.
///
/// Positions beyond the board edge are never examined, so corner cells have
/// at most 3 candidates and edge cells at most 5.
pub fn count(cell: Cell, snapshot: &Snapshot, bounds: &BoardBounds) -> u8 {
    let (xs, ys) = bounds.clamped_window(cell);

    ys.flat_map(|y| xs.clone().map(move |x| Cell::new(x, y)))
        .filter(|&other| other != cell)
        .filter(|&other| snapshot.contains(other))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellSet;

    fn snapshot_of(bounds: BoardBounds, cells: &[(i32, i32)]) -> Snapshot {
        let mut set = CellSet::new(bounds);
        set.replace_all(cells.iter().map(|&c| Cell::from(c)));
        set.snapshot()
    }

    #[test]
    fn test_full_neighborhood() {
        let bounds = BoardBounds::new(5, 5).unwrap();
        let all: Vec<_> = bounds.positions().map(|c| (c.x, c.y)).collect();
        let snapshot = snapshot_of(bounds, &all);

        assert_eq!(count(Cell::new(2, 2), &snapshot, &bounds), 8);
        assert_eq!(count(Cell::new(2, 0), &snapshot, &bounds), 5);
    }

    #[test]
    fn test_corner_sees_at_most_three() {
        let bounds = BoardBounds::new(4, 4).unwrap();
        let all: Vec<_> = bounds.positions().map(|c| (c.x, c.y)).collect();
        let snapshot = snapshot_of(bounds, &all);

        assert_eq!(count(Cell::new(0, 0), &snapshot, &bounds), 3);
        assert_eq!(count(Cell::new(3, 3), &snapshot, &bounds), 3);
        assert_eq!(count(Cell::new(0, 3), &snapshot, &bounds), 3);
    }

    #[test]
    fn test_no_wraparound() {
        let bounds = BoardBounds::new(5, 5).unwrap();
        // Opposite edges would be neighbors on a torus
        let snapshot = snapshot_of(bounds, &[(4, 0), (0, 4), (4, 4)]);

        assert_eq!(count(Cell::new(0, 0), &snapshot, &bounds), 0);
    }

    #[test]
    fn test_self_is_excluded() {
        let bounds = BoardBounds::new(3, 3).unwrap();
        let snapshot = snapshot_of(bounds, &[(1, 1), (0, 0)]);

        assert_eq!(count(Cell::new(1, 1), &snapshot, &bounds), 1);
        assert_eq!(count(Cell::new(0, 0), &snapshot, &bounds), 1);
    }
}
