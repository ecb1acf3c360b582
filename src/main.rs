use qdpeek::{
    config::load_config_relative, logs::setup_logger, networking::server::run_server_with_config,
};

const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = load_config_relative(&config_path)?;

    setup_logger(&config.logging)?;
    log::info!("starting qdpeek with config {}", config_path);

    run_server_with_config(&config.server).await
}
