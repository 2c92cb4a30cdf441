use serde::{Deserialize, Serialize};
use voxpack::entities::{OrderLine, PackingResult};

use crate::config::GBFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct GBFOutput {
    pub order: Vec<OrderLine>,
    pub result: PackingResult,
    /// Number of boxes committed by the optimizer
    pub n_rounds: usize,
    /// Whether the optimizer stopped because it reached `max_rounds`
    pub round_limit_hit: bool,
    pub config: GBFConfig,
}
