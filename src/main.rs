//! Inventory Manager - interactive product inventory with CSV persistence
//!
//! Runs a menu-driven session against one in-memory inventory. Products can
//! be preloaded from a CSV file and saved back at any point in the session.

use clap::Parser;
use std::io;
use std::path::PathBuf;

use inventory_manager::{load_csv, menu, Inventory};

/// Interactive inventory manager - add, search and persist products as CSV
#[derive(Parser, Debug)]
#[command(name = "inventory_manager")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV inventory to load on startup
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut inventory = Inventory::new();

    if let Some(path) = &args.file {
        match load_csv(path) {
            Ok(report) => {
                log::info!(
                    "Preloaded {} products ({} rows skipped)",
                    report.products.len(),
                    report.skipped_rows
                );
                inventory.replace_all(report.products);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = menu::run(&mut inventory, stdin.lock(), stdout.lock()) {
        log::error!("Session error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
