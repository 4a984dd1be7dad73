use anyhow::Context;
use clap::Parser;
use decision_sheet::sheet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate an editable decision balance sheet PDF
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Destination PDF filename
    #[arg(short, long, default_value = sheet::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Image placed at the top of the page; skipped if missing
    #[arg(short, long, default_value = sheet::DEFAULT_LOGO)]
    logo: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    sheet::generate(&args.output, &args.logo)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
