//! Headless client runner.
//!
//! Starts the engine against the configured server and logs every
//! published stage transition until interrupted. Useful for smoke
//! testing a server without a presentation layer.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mashdash_client::{App, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mashdash_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!("Starting client against {}", config.server_url);

    let app = App::init(config)?;
    let mut views = app.subscribe();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = views.borrow_and_update().clone();
                tracing::info!(stage = %view.stage, "Stage changed");
            }
        }
    }

    tracing::info!("Shutting down");
    app.teardown().await;
    Ok(())
}
