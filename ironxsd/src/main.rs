//! `ironxsd` command-line generator.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use ironxsd::codegen::{Options, generate_from_file, plugin};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ironxsd",
    version,
    about = "Generate Rust data types from an XML Schema"
)]
struct Cli {
    /// XML Schema file to compile
    #[arg(required_unless_present = "list_plugins")]
    schema: Option<PathBuf>,

    /// Write generated code to file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every change made by plugins
    #[arg(short, long)]
    verbose: bool,

    /// Enable a plugin, e.g. -Xfixed-value
    #[arg(short = 'X', value_name = "PLUGIN", action = ArgAction::Append)]
    plugins: Vec<String>,

    /// Name of the generated module
    #[arg(long)]
    package: Option<String>,

    /// List available plugins and exit
    #[arg(long)]
    list_plugins: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.list_plugins {
        for plugin in plugin::registry() {
            println!("{}", plugin.usage());
        }
        return Ok(());
    }

    let Some(schema) = cli.schema else {
        anyhow::bail!("no schema given");
    };

    let mut options = Options::new().verbose(cli.verbose);
    for name in &cli.plugins {
        options = options.enable(format!("X{name}"));
    }
    if let Some(package) = cli.package {
        options = options.package(package);
    }

    let code = generate_from_file(&schema, &options)
        .with_context(|| format!("failed to generate code from {}", schema.display()))?;

    match cli.output {
        Some(path) => {
            fs::write(&path, code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "generated code written");
        }
        None => print!("{code}"),
    }

    Ok(())
}
