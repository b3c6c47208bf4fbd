#![forbid(unsafe_code)]

//! cellgrid demo binary entry point.

use std::process;

use cellgrid_demo::cli;
use cellgrid_demo::scene::Scene;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MAX_PASSES: usize = 8;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let opts = cli::Opts::parse();

    let config = match opts.grid_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "cannot build grid config");
            eprintln!("{e}");
            process::exit(1);
        }
    };
    info!(
        columns = config.column_count,
        rows = config.row_count,
        placement = config.placement.as_str(),
        "laying out demo grid"
    );

    let mut scene = match Scene::example(&config) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    let passes = scene.settle(MAX_PASSES);
    let snapshot = scene.snapshot(passes);

    if opts.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("cannot serialize snapshot: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", snapshot.to_table());
    }
}
