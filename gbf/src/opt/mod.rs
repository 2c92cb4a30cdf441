pub mod gbf_optimizer;
pub mod search;
