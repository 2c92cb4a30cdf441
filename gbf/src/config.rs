use serde::{Deserialize, Serialize};

/// Configuration for the GBF optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GBFConfig {
    /// Maximum number of rounds (i.e. committed boxes) before the remaining items are reported as unpacked
    pub max_rounds: usize,
    /// Evaluate the catalog boxes of a round in parallel. Does not affect the outcome.
    pub parallel: bool,
    /// Edge length (in mm) of a single grid cell used when importing the catalog
    pub grid_resolution: f32,
    /// Seed for the PRNG used to generate random orders. If undefined, entropy is used
    pub prng_seed: Option<u64>,
    /// Upper bound (inclusive) on the quantity of each product in a randomly generated order
    pub max_random_qty: usize,
}

impl Default for GBFConfig {
    fn default() -> Self {
        Self {
            max_rounds: 100,
            parallel: false,
            grid_resolution: 1.0,
            prng_seed: Some(0),
            max_random_qty: 3,
        }
    }
}
