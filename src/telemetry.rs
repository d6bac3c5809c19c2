use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Instala el subscriber de tracing para la aplicación que embebe el crate.
///
/// `RUST_LOG` is honored; `video_search=<level>` is added on top. Fails
/// instead of panicking when a global subscriber is already set.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("video_search={}", level).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("No se pudo inicializar logging: {}", e))
}
