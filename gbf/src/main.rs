use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gbf::config::GBFConfig;
use gbf::io;
use gbf::io::cli::Cli;
use gbf::io::output::GBFOutput;
use gbf::opt::gbf_optimizer::GBFOptimizer;
use gbf::order_gen::random_order;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use voxpack::io::import::Importer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: GBFConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GBFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed GBFConfig: {config:?}");

    let importer = Importer::new(config.grid_resolution);
    let catalog = importer.import_catalog(&io::read_catalog(&args.catalog_file)?)?;

    let (order, order_stem) = match &args.order_file {
        Some(order_file) => {
            let order = importer.import_order(&io::read_order(order_file)?)?;
            let stem = order_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("order")
                .to_string();
            (order, stem)
        }
        None => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            warn!("[MAIN] No order file provided, generating a random order");
            (
                random_order(&catalog, &mut rng, config.max_random_qty),
                "random".to_string(),
            )
        }
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let mut optimizer = GBFOptimizer::new(catalog, config);
    let result = optimizer.pack(&order);

    let output = GBFOutput {
        order,
        result,
        n_rounds: optimizer.n_rounds,
        round_limit_hit: optimizer.round_limit_hit(),
        config,
    };
    let solution_path = args.solution_folder.join(format!("sol_{order_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
