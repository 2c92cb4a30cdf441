use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Catalog of boxes and products (JSON)
    #[arg(short = 'b', long, value_name = "FILE")]
    pub catalog_file: PathBuf,
    /// Order to pack (JSON). A random order over all products is generated if omitted
    #[arg(short, long, value_name = "FILE")]
    pub order_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
