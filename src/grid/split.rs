use crate::grid::model::Grid;

/// The four blocks of a split, in top-left, top-right, bottom-left, bottom-right order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quadrants {
    pub top_left: Grid,
    pub top_right: Grid,
    pub bottom_left: Grid,
    pub bottom_right: Grid,
}

impl Quadrants {
    pub fn into_array(self) -> [Grid; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Cut `grid` at `floor(width / 2)`, `floor(height / 2)`.
///
/// Odd dimensions give the extra column to the right quadrants and the extra row to the bottom
/// ones. Grids narrower or shorter than 2 still produce four quadrants; some are zero-area.
pub fn split(grid: &Grid) -> Quadrants {
    let (w, h) = (grid.width(), grid.height());
    let x_split = w / 2;
    let y_split = h / 2;

    let block = |x0: u32, y0: u32, x1: u32, y1: u32| -> Grid {
        let mut pixels = Vec::with_capacity((x1 - x0) as usize * (y1 - y0) as usize);
        for y in y0..y1 {
            if let Some(row) = grid.row(y) {
                pixels.extend_from_slice(&row[x0 as usize..x1 as usize]);
            }
        }
        let (ox, oy) = grid.origin();
        Grid::from_parts((ox + x0, oy + y0), x1 - x0, y1 - y0, pixels)
    };

    Quadrants {
        top_left: block(0, 0, x_split, y_split),
        top_right: block(x_split, 0, w, y_split),
        bottom_left: block(0, y_split, x_split, h),
        bottom_right: block(x_split, y_split, w, h),
    }
}

/// Apply `rounds` splitting passes, starting from `grid`.
///
/// Every pass replaces each block with its quadrants; zero-area quadrants are dropped since they
/// hold no pixels. The result covers the source exactly once.
pub fn split_rounds(grid: Grid, rounds: u32) -> Vec<Grid> {
    let mut blocks = vec![grid];
    for _ in 0..rounds {
        if blocks.iter().all(|g| g.len() <= 1) {
            break;
        }
        blocks = blocks
            .iter()
            .flat_map(|g| split(g).into_array())
            .filter(|g| !g.is_empty())
            .collect();
    }
    blocks
}

#[cfg(test)]
#[path = "../../tests/unit/grid/split.rs"]
mod tests;
