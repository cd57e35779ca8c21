//! find-open: which restaurants are open at a given date and time?
//!
//! Loads the restaurant file once, logs any schedule lines it could not
//! parse, then either prompts for moments (default) or dumps every parsed
//! schedule (`dump`).
//!
//! ```text
//! find-open --data apps/find-open/data/rest_hours.json
//! RUST_LOG=debug find-open dump
//! ```

mod config;
mod display;
mod moment;
mod prompt;

#[cfg(test)]
mod tests;

use std::io;

use anyhow::{Context, Result};

use oh_catalog::load_catalog_json;

use config::{CliArgs, Command, FinderConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = FinderConfig::resolve(&args)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let path = &config.restaurants_path;
    println!("========== Reading restaurant file \"{}\"...", path.display());
    let loaded = load_catalog_json(path)
        .with_context(|| format!("loading restaurants from {}", path.display()))?;
    println!("\t{} restaurants loaded.", loaded.catalog.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Dump => display::dump_catalog(&loaded.catalog, &mut out)?,
        Command::Interactive => {
            let today = chrono::Local::now().date_naive();
            prompt::run(&loaded.catalog, io::stdin().lock(), &mut out, today)?;
        }
    }

    Ok(())
}
