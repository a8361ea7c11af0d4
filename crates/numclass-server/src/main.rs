//! numclass service binary.

use numclass_server::{Server, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Initializes tracing from the environment.
///
/// `RUST_LOG` controls the filter (default "info");
/// `NUMCLASS_LOG_FORMAT=json` switches to JSON output for production.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("NUMCLASS_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        "Starting numclass on {} (facts from {})",
        config.http_addr(),
        config.fact_base_url()
    );

    let server = Server::new(config)?;
    server.run().await?;
    Ok(())
}
