mod cases;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cases = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading cases");
            cases::load_cases(&path).with_context(|| format!("failed to load cases from {}", path))?
        }
        None => cases::walkthrough().context("built-in walkthrough is malformed")?,
    };

    let failures = cases::run(&cases);
    if failures > 0 {
        bail!("{} of {} cases failed", failures, cases.len());
    }
    info!(count = cases.len(), "all cases passed");
    Ok(())
}
