//! Command-line parsing for `cmc`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cmcrameri::{LoaderConfig, PreviewOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Json,
    Preview { out: PathBuf, options: PreviewOptions },
    Show { name: String },
}

/// Parse the arguments after the program name. A `DIR` argument replaces
/// `config.data_dir`.
pub fn parse(args: &[String], mut config: LoaderConfig) -> Result<(Command, LoaderConfig)> {
    let mut args = args.iter();
    let command = args.next().map_or("list", String::as_str);
    let name = match command {
        "show" => Some(args.next().context("usage: cmc show NAME [DIR]")?.clone()),
        _ => None,
    };
    if let Some(dir) = args.next() {
        config.data_dir = PathBuf::from(dir);
    }

    let command = match (command, name) {
        (_, Some(name)) => Command::Show { name },
        ("list", None) => Command::List,
        ("json", None) => Command::Json,
        ("preview", None) => {
            let out = args.next().map_or_else(|| "colormaps.png".into(), PathBuf::from);
            let mut options = PreviewOptions::default();
            if let Some(columns) = args.next() {
                options.columns = columns
                    .parse()
                    .with_context(|| format!("invalid column count: {columns}"))?;
            }
            Command::Preview { out, options }
        }
        (other, None) => {
            bail!("unknown command {other:?} (expected list, json, preview or show)")
        }
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok((command, config))
}
