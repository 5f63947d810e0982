use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "fixdec=warn";

/// Initialize stderr logging from a configured filter, falling back to
/// `RUST_LOG` and then to `fixdec=warn`.
pub fn init_logging(filter: Option<&str>) -> anyhow::Result<()> {
    let env_filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        )
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
