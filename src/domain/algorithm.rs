//! Evolution enum for selecting how a step is computed.
//!
//! Both modes evaluate every board position against the same frozen
//! snapshot and produce identical results; they differ only in speed.

/// Available step strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Evolution {
    /// Row-major scan on the calling thread
    Serial,
    /// Rows fanned out across the rayon pool
    #[default]
    Parallel,
}

impl Evolution {
    /// Get all available strategies
    pub fn all() -> Vec<Evolution> {
        vec![Evolution::Serial, Evolution::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Evolution::Serial => "Serial",
            Evolution::Parallel => "Parallel",
        }
    }
}
