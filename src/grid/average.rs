use crate::foundation::core::Pixel;
use crate::grid::model::Grid;

/// Per-channel mean of all pixels, truncated toward zero. `None` for an empty grid.
pub fn mean_pixel(grid: &Grid) -> Option<Pixel> {
    let count = grid.len() as u64;
    if count == 0 {
        return None;
    }

    let mut sum = [0u64; 4];
    for px in grid.pixels() {
        for (acc, c) in sum.iter_mut().zip(px.to_rgba8()) {
            *acc += u64::from(c);
        }
    }

    // The mean of u8 values never exceeds 255.
    let [r, g, b, a] = sum.map(|s| (s / count).min(255) as u8);
    Some(Pixel::new(r, g, b, a))
}

/// Return a grid of the same shape and origin, filled with the mean color of `grid`.
///
/// Empty grids come back unchanged. Averaging a uniform grid is a fixed point.
pub fn average(grid: &Grid) -> Grid {
    let Some(mean) = mean_pixel(grid) else {
        return grid.clone();
    };
    Grid::from_parts(
        grid.origin(),
        grid.width(),
        grid.height(),
        vec![mean; grid.len()],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/grid/average.rs"]
mod tests;
