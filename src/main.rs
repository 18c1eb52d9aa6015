use anyhow::{Context, Result};
use clap::Parser;
use seriesprep::PrepareRequest;
use std::path::PathBuf;

/// Prepare time-series frames for charting.
///
/// Reads a JSON request (`frames`, optional `timeRange`, `timezones` and
/// `theme`) and prints the graphable frames and resolved time zones as JSON.
#[derive(Debug, Parser)]
#[command(name = "seriesprep", version)]
struct Args {
    /// Path to the request JSON
    input: PathBuf,

    /// Theme used when the request does not name one
    #[arg(long, env = "SERIESPREP_THEME", default_value = "dark")]
    theme: String,

    /// Zone substituted for empty or missing time zones
    #[arg(long, default_value = "browser")]
    default_timezone: String,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = PrepareRequest::from_path(&args.input)
        .with_context(|| format!("Failed to load request from {:?}", args.input))?;
    let theme = request.resolve_theme(&args.theme)?;

    let response = request.run(&theme, &args.default_timezone);
    if response.frames.is_none() {
        log::info!("no graphable frames in {:?}", args.input);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("Failed to serialize response")?;

    println!("{}", json);
    Ok(())
}
