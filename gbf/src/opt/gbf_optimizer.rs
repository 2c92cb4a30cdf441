use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use thousands::Separable;
use voxpack::entities::{Catalog, Item, OrderLine, PackedBox, PackingResult};
use voxpack::util::assertions;

use crate::config::GBFConfig;
use crate::opt::search::{Simulation, simulate};

/// Greedy Box Fill (GBF) optimizer.
///
/// Works in rounds: every round, all remaining items are simulated against a fresh container of
/// every catalog box. The simulation which packed the most items (the smallest box on ties) is committed,
/// its items are removed from the remaining ones, and the next round starts.
/// Stops once all items are packed, no box can hold any remaining item, or `max_rounds` is reached.
pub struct GBFOptimizer {
    pub catalog: Catalog,
    pub config: GBFConfig,
    /// Number of boxes committed during the last call to [`GBFOptimizer::pack`]
    pub n_rounds: usize,
    /// Number of positions validated during the last call to [`GBFOptimizer::pack`]
    pub n_evals: usize,
    round_limit_hit: bool,
}

impl GBFOptimizer {
    pub fn new(catalog: Catalog, config: GBFConfig) -> Self {
        Self {
            catalog,
            config,
            n_rounds: 0,
            n_evals: 0,
            round_limit_hit: false,
        }
    }

    pub fn pack(&mut self, order: &[OrderLine]) -> PackingResult {
        let start = Instant::now();
        self.n_rounds = 0;
        self.n_evals = 0;
        self.round_limit_hit = false;

        let mut remaining = self.catalog.expand_order(order);
        let n_items = remaining.len();
        let mut packed_boxes: Vec<PackedBox> = vec![];

        info!(
            "[GBF] packing {} items using {} box types",
            n_items,
            self.catalog.boxes().len()
        );

        while !remaining.is_empty() {
            if self.n_rounds >= self.config.max_rounds {
                self.round_limit_hit = true;
                warn!(
                    "[GBF] round limit of {} reached with {} items remaining",
                    self.config.max_rounds,
                    remaining.len()
                );
                break;
            }

            let simulations = self.simulate_round(&remaining);
            self.n_evals += simulations.iter().map(|s| s.n_evals).sum::<usize>();

            let Some(best) = select_best(simulations) else {
                info!(
                    "[GBF] none of the {} remaining items fits in any box",
                    remaining.len()
                );
                break;
            };

            //remove the committed items, by id
            let packed_ids: HashSet<usize> = best.container.items().iter().map(|i| i.id).collect();
            let n_remaining_before = remaining.len();
            remaining.retain(|item| !packed_ids.contains(&item.id));
            debug_assert_eq!(n_remaining_before - remaining.len(), packed_ids.len());

            let packed_box = best.container.close();
            debug_assert!(assertions::packed_box_is_feasible(&packed_box));

            self.n_rounds += 1;
            info!(
                "[GBF] round {}: committed box {} ({}) with {} items at {:.2}% utilization, {} items remaining",
                self.n_rounds,
                packed_box.box_name,
                packed_box.dimensions,
                packed_box.items.len(),
                packed_box.utilization,
                remaining.len()
            );
            packed_boxes.push(packed_box);
        }

        let result = PackingResult {
            packed_boxes,
            unpacked_items: remaining.iter().map(|item| item.name.to_string()).collect(),
        };

        debug_assert!(assertions::result_conserves_items(&result, n_items));

        info!(
            "[GBF] packing finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.n_evals.separate_with_commas()
        );
        info!(
            "[GBF] {} items packed in {} boxes, {} items unpacked",
            result.n_packed_items(),
            result.packed_boxes.len(),
            result.unpacked_items.len()
        );

        result
    }

    /// True if the last call to [`GBFOptimizer::pack`] was cut short by `max_rounds`
    pub fn round_limit_hit(&self) -> bool {
        self.round_limit_hit
    }

    /// Simulates the remaining items against every catalog box, in ascending volume order.
    fn simulate_round(&self, remaining: &[Item]) -> Vec<Simulation> {
        let boxes = self.catalog.boxes();
        let simulations: Vec<Simulation> = match self.config.parallel {
            true => boxes.par_iter().map(|b| simulate(b, remaining)).collect(),
            false => boxes.iter().map(|b| simulate(b, remaining)).collect(),
        };
        for sim in simulations.iter() {
            debug!(
                "[GBF] box {} fits {}/{} items ({} evaluations)",
                sim.container.def.name,
                sim.n_packed(),
                remaining.len(),
                sim.n_evals.separate_with_commas()
            );
        }
        simulations
    }
}

/// Selects the simulation which packed the most items.
/// On ties, the one which comes first wins (i.e. the smallest box, as simulations follow the catalog order).
/// Returns `None` if no simulation managed to pack a single item.
pub fn select_best(simulations: Vec<Simulation>) -> Option<Simulation> {
    simulations
        .into_iter()
        .enumerate()
        .min_by_key(|(idx, sim)| (Reverse(sim.n_packed()), *idx))
        .map(|(_, sim)| sim)
        .filter(|sim| sim.n_packed() > 0)
}
