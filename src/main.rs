use std::io::{self, Write};

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries the demo output.
    let subscriber = Registry::default()
        .with(fmt::layer().compact().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        );
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let sorted = bubble_sort::demo::run(&mut out).context("failed to write demo output")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!(?sorted, "done");

    Ok(())
}
