use serde::Deserialize;

use crate::types::{BOARD_SIZE, Coord};

const DEFAULT_SIZE_PX: f64 = 600.0;

/// Size of the drawing surface the board is rendered onto.
///
/// Missing fields fall back to a 600x600 surface.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Maps a pointer position to the cell under it.
    ///
    /// Each axis is split evenly into eight cells. Positions outside the
    /// surface, or on a surface with no area, map to `None`.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord> {
        let col = axis_cell(x, self.width)?;
        let row = axis_cell(y, self.height)?;
        Coord::new(col, row)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_PX, DEFAULT_SIZE_PX)
    }
}

fn axis_cell(pos: f64, extent: f64) -> Option<usize> {
    if extent.is_nan() || extent <= 0.0 || !(0.0..extent).contains(&pos) {
        return None;
    }
    let cell_size = extent / BOARD_SIZE as f64;
    Some(((pos / cell_size).floor() as usize).min(BOARD_SIZE - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_the_surface_evenly() {
        let layout = Layout::default();

        assert_eq!(layout.cell_at(0.0, 0.0), Coord::new(0, 0));
        assert_eq!(layout.cell_at(74.9, 75.0), Coord::new(0, 1));
        assert_eq!(layout.cell_at(599.9, 599.9), Coord::new(7, 7));
        assert_eq!(layout.cell_at(300.0, 120.0), Coord::new(4, 1));
    }

    #[test]
    fn non_square_surfaces_use_each_axis_separately() {
        let layout = Layout::new(800.0, 400.0);

        assert_eq!(layout.cell_at(150.0, 150.0), Coord::new(1, 3));
    }

    #[test]
    fn positions_off_the_surface_map_to_nothing() {
        let layout = Layout::default();

        assert_eq!(layout.cell_at(-1.0, 10.0), None);
        assert_eq!(layout.cell_at(10.0, 600.0), None);
        assert_eq!(layout.cell_at(f64::NAN, 10.0), None);
        assert_eq!(Layout::new(0.0, 600.0).cell_at(0.0, 0.0), None);
    }
}
