use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;

use commands::Outcome;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Validate region descriptors (notes, markers, polygons) from JSON input")]
struct Cmd {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    /// Write the JSON report here instead of stdout
    #[arg(long, global = true)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Validate one polygon given as a JSON array of [x, y] pairs
    Polygon {
        /// Input path, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// Validate a descriptor collection (array, or object with "descriptors")
    Collection {
        #[arg(long, default_value = "-")]
        input: String,
        /// Report every bad descriptor instead of stopping at the first
        #[arg(long)]
        accumulate: bool,
    },
    /// Type-check one identifier given as a JSON literal (e.g. 42 or "\"abc\"")
    Identifier {
        #[arg(long)]
        value: String,
    },
    /// Print library version and code revision
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    let outcome = match cmd.action {
        Action::Polygon { input } => commands::polygon(&input)?,
        Action::Collection { input, accumulate } => commands::collection(&input, accumulate)?,
        Action::Identifier { value } => commands::identifier(&value)?,
        Action::Report => commands::report(),
    };
    emit(&outcome, cmd.out.as_deref())?;
    if !outcome.accepted {
        bail!("input rejected");
    }
    Ok(())
}

fn emit(outcome: &Outcome, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => provenance::write_report(path, &outcome.report).map(|_| ()),
        None => {
            println!("{}", serde_json::to_string_pretty(&outcome.report)?);
            Ok(())
        }
    }
}
