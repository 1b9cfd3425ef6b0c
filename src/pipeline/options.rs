use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{QuadfadeError, QuadfadeResult};
use crate::sequence::synth::{DEFAULT_SYNTH_DELAY, DEFAULT_SYNTH_FRAMES};

/// Frame-level parallelism controls.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Threading {
    /// Degrade frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Tunables for [`crate::degrade_with`].
///
/// The default reproduces the fixed behavior of [`crate::degrade`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DegradeOptions {
    /// Total frames a single-frame input is expanded to.
    pub synth_frames: usize,
    /// Delay assigned to every synthesized frame.
    pub synth_delay: u32,
    /// Override for the depth ceiling otherwise derived from the long edge.
    pub split_max: Option<u32>,
    /// Frame-level parallelism.
    pub threading: Threading,
}

impl Default for DegradeOptions {
    fn default() -> Self {
        Self {
            synth_frames: DEFAULT_SYNTH_FRAMES,
            synth_delay: DEFAULT_SYNTH_DELAY,
            split_max: None,
            threading: Threading::default(),
        }
    }
}

impl DegradeOptions {
    /// Parse options from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> QuadfadeResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| QuadfadeError::validation(format!("parse options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> QuadfadeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            QuadfadeError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> QuadfadeResult<()> {
        if self.synth_frames == 0 {
            return Err(QuadfadeError::validation("synth_frames must be >= 1"));
        }
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(QuadfadeError::validation(
                "threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/options.rs"]
mod tests;
