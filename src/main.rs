//! Writes the three FarmFog comparison charts into the working directory.
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr so
//! stdout only carries the `Saved '...'` lines.

use anyhow::Context;
use farmfog_report::ReportGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    ReportGenerator::default()
        .generate()
        .context("failed to generate FarmFog report charts")?;
    Ok(())
}
