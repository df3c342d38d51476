use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(false)
                .with_file(false),
        )
        .init();

    tracing::info!("Starting standalone todo web service...");

    let config = web_service::config::load_server_config();

    if let Err(e) = web_service::server::run(config.data_dir, config.port).await {
        tracing::error!("Failed to run web service: {}", e);
        std::process::exit(1);
    }
}
