/// Conway's Game of Life (B3/S23).
///
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
pub const fn next_liveness(is_live: bool, neighbors: u8) -> bool {
    matches!((is_live, neighbors), (true, 2 | 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_liveness(true, 0));
        assert!(!next_liveness(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_liveness(true, 2));
        assert!(next_liveness(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!next_liveness(true, n));
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(next_liveness(false, 3));
    }

    #[test]
    fn test_dead_stays_dead() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert!(!next_liveness(false, n));
        }
    }
}
