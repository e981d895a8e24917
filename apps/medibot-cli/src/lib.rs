//! Startup shared by the `medibot` binaries.

use medibot_core::config::{Config, SearchMode};
use medibot_core::dataset::load_dataset;
use medibot_hybrid::Assistant;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stderr. `RUST_LOG` wins over the configured filter.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// `--top-k` when given, otherwise the configured `search.top_k`.
pub fn resolve_top_k(flag: Option<usize>, configured: usize) -> anyhow::Result<usize> {
    let top_k = flag.unwrap_or(configured);
    if top_k == 0 {
        anyhow::bail!("--top-k must be at least 1");
    }
    Ok(top_k)
}

/// Builds an assistant over the configured dataset.
///
/// A dataset that fails to load is reported and leaves the collection empty,
/// so every query goes to the fallback.
pub async fn load_assistant(config: &Config, mode: SearchMode, top_k: usize) -> anyhow::Result<Assistant> {
    let mut assistant = Assistant::new(mode, top_k);
    let path = config.dataset_path()?;
    match load_dataset(&path).await {
        Ok(documents) => assistant.load(documents),
        Err(e) => {
            error!(path = %path.display(), error = %e, "dataset load failed");
            eprintln!("❌ Dataset Load Failed: {}", e);
        }
    }
    Ok(assistant)
}
