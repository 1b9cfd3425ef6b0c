//! Quadrant grids: construction from raster buffers, splitting and averaging.

pub(crate) mod average;
pub(crate) mod model;
pub(crate) mod split;
