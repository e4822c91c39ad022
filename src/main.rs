//! Log events server binary.
//! Used by: binary entrypoint.

use log_events::{config::Config, console, server, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let state = state::build_state(&config)?;

    console::print_banner();
    console::print_startup(&config.bind_addr, &config.table);
    tracing::info!("starting log-events on {}", config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
