//! File-format adapter around the core. Nothing under `grid`, `schedule` or `pipeline` uses it.

pub(crate) mod gif;
