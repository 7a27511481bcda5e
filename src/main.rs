//! CLI entry point for the dungeon map generator

use clap::Parser;
use dunjon::io::cli::{Cli, MapBatch};

fn main() -> dunjon::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut batch = MapBatch::new(cli);
    batch.process()?;
    Ok(())
}
