//! Frame-by-frame orchestration of synthesis, scheduling, splitting and averaging.

pub(crate) mod degrade;
pub(crate) mod options;
