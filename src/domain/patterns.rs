use rand::Rng;

use super::{BoardBounds, Cell, Offset};

/// Represents a figure that can be placed on the board
#[derive(Clone, Debug)]
pub struct Figure {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Cell>, // Relative coordinates of alive cells, may be negative
}

impl Figure {
    /// Create a new figure from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: &[(i32, i32)]) -> Self {
        let cells = cells.iter().map(|&c| Cell::from(c)).collect();
        Self { name, description, cells }
    }

    /// Inclusive min/max corners of the figure, `None` when empty
    pub fn extent(&self) -> Option<(Cell, Cell)> {
        let min_x = self.cells.iter().map(|c| c.x).min()?;
        let min_y = self.cells.iter().map(|c| c.y).min()?;
        let max_x = self.cells.iter().map(|c| c.x).max()?;
        let max_y = self.cells.iter().map(|c| c.y).max()?;
        Some((Cell::new(min_x, min_y), Cell::new(max_x, max_y)))
    }

    /// Offset that puts the figure's bounding box in the middle of `bounds`
    pub fn centered_offset(&self, bounds: &BoardBounds) -> Offset {
        let Some((min, max)) = self.extent() else {
            return Offset::default();
        };
        let (w, h) = (max.x - min.x + 1, max.y - min.y + 1);
        Offset::new(
            (bounds.width() - w) / 2 - min.x,
            (bounds.height() - h) / 2 - min.y,
        )
    }
}

/// Classic Game of Life figures library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves (+1, +1) every 4 generations
    pub fn glider() -> Figure {
        Figure::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[(0, 0), (1, 0), (2, 0), (2, -1), (1, -2)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Figure {
        Figure::new("Blinker", "Oscillator (period 2)", &[(0, 1), (1, 1), (2, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Figure {
        Figure::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Figure {
        Figure::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Figure {
        Figure::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Figure {
        Figure::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),

                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Figure {
        Figure::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Figure {
        Figure::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Figure {
        Figure::new(
            "Block",
            "Still life",
            &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Get all available figures
    pub fn all_figures() -> Vec<Figure> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }

    /// Every board position independently alive with probability `density`
    pub fn random_soup(bounds: &BoardBounds, density: f64, rng: &mut impl Rng) -> Vec<Cell> {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        bounds
            .positions()
            .filter(|_| rng.random_bool(density))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_figures().iter().map(|f| f.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_glider_extent() {
        let (min, max) = presets::glider().extent().unwrap();
        assert_eq!(min, Cell::new(0, -2));
        assert_eq!(max, Cell::new(2, 0));
    }

    #[test]
    fn test_centered_offset_fits_board() {
        let bounds = BoardBounds::new(40, 20).unwrap();
        for figure in presets::all_figures() {
            let offset = figure.centered_offset(&bounds);
            for cell in &figure.cells {
                let placed = cell.translate(offset).unwrap();
                assert!(bounds.contains(placed), "{} at {placed}", figure.name);
            }
        }
    }

    #[test]
    fn test_empty_figure_has_no_extent() {
        let figure = Figure::new("Empty", "", &[]);
        assert!(figure.extent().is_none());
        let bounds = BoardBounds::new(3, 3).unwrap();
        assert_eq!(figure.centered_offset(&bounds), Offset::default());
    }

    #[test]
    fn test_random_soup_respects_bounds_and_density() {
        let bounds = BoardBounds::new(20, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let soup = presets::random_soup(&bounds, 0.3, &mut rng);
        assert!(soup.iter().all(|&c| bounds.contains(c)));
        assert!(!soup.is_empty() && soup.len() < bounds.area());

        assert!(presets::random_soup(&bounds, 0.0, &mut rng).is_empty());
        assert_eq!(presets::random_soup(&bounds, 1.0, &mut rng).len(), bounds.area());
    }
}
