use clap::Parser;
use std::sync::Arc;
use valida_cpf::utils::{logger, validation::Validate};
use valida_cpf::{router, AppConfig, AppState, RegistryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting valida-cpf API");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let registry = RegistryClient::new(&config);
    let state = AppState {
        registry: Arc::new(registry),
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
