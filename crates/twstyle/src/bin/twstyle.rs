//! Command line front end: resolve class strings and print the style as JSON.
//!
//! ```text
//! twstyle --config tailwind.json "text-red-500 font-bold -mt-4"
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use twstyle::{Converter, ResolvedConfig, TailwindConfig};

#[derive(Debug, Parser)]
#[command(name = "twstyle", version, about = "Resolve utility classes into a style object")]
struct Cli {
    /// Theme configuration (.json, .yaml or .yml), merged over the defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Class strings to resolve; all of them are merged into one style
    #[arg(required = true, value_name = "CLASSES")]
    classes: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => TailwindConfig::from_path(path)?,
        None => TailwindConfig::default(),
    };
    let converter = Converter::new(Arc::new(ResolvedConfig::new(&config)));

    let style = converter.convert(&cli.classes.join(" "))?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&style)
    } else {
        serde_json::to_string(&style)
    };
    output.context("failed to serialize style")
}
