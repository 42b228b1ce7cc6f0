//! cmc - inspect a cmcrameri data directory
//!
//! Usage:
//!   cmc list [DIR]
//!   cmc json [DIR]
//!   cmc preview [DIR] [OUT.png] [COLUMNS]
//!   cmc show NAME [DIR]
//!
//! `DIR` defaults to `$CMCRAMERI_DATA_DIR`, then `./cmaps`.

mod args;

use anyhow::{Context, Result};
use cmcrameri::catalog::REVERSED_SUFFIX;
use cmcrameri::preview::save_preview;
use cmcrameri::{Catalog, ColormapSummary, Colormaps, LoaderConfig};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::args::Command;

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let (command, config) = args::parse(&argv, LoaderConfig::from_env())?;

    match command {
        Command::List => {
            let maps = load(&config)?;
            for cmap in maps.iter() {
                info!(
                    name = cmap.name(),
                    category = %cmap.category(),
                    samples = cmap.len(),
                    "{}",
                    config.registry_key(cmap.name())
                );
            }
            info!(
                continuous = maps.continuous_file_count(),
                categorical = maps.categorical_count(),
                entries = maps.len(),
                "Data set summary"
            );
        }
        Command::Json => {
            let maps = load(&config)?;
            let summaries: Vec<ColormapSummary> = maps.iter().map(|c| c.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Command::Preview { out, options } => {
            let maps = load(&config)?;
            save_preview(maps, &Catalog::crameri(), &options, &out)?;
        }
        Command::Show { name } => {
            let maps = load(&config)?;
            let cmap = maps.require(&name)?;
            let stem = name
                .strip_suffix(REVERSED_SUFFIX)
                .filter(|_| cmap.is_reversed())
                .unwrap_or(name.as_str());
            if let Some(path) = maps.path_of(stem) {
                info!(path = %path.display(), "Source table");
            }
            println!("{}", serde_json::to_string_pretty(&cmap.summary())?);
        }
    }

    Ok(())
}

fn load(config: &LoaderConfig) -> Result<&'static Colormaps> {
    cmcrameri::init(config)
        .with_context(|| format!("loading colour maps from {}", config.data_dir.display()))
}
