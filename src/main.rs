use clap::Parser;
use personax_api::{AppState, RestApi};
use personax_core::load_dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Similarity ranking engine for a person-guessing game
#[derive(Parser, Debug)]
#[command(name = "personax")]
#[command(about = "Person similarity ranking service", long_about = None)]
struct Args {
    /// Path to the dataset JSON file
    #[arg(short, long)]
    data: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting personax v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data);
    info!("HTTP API port: {}", args.port);

    let state = Arc::new(AppState::new());

    // Load the dataset off the serving path; the API answers 503 until
    // the snapshot is installed
    let loader_state = state.clone();
    let data_path = args.data.clone();
    std::thread::spawn(move || match load_dataset(&data_path) {
        Ok(population) => loader_state.install_population(Arc::new(population)),
        Err(e) => error!("Failed to load dataset: {}", e),
    });

    let http_state = state.clone();
    let port = args.port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(http_state, port).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

    info!("personax started successfully");
    info!("HTTP API: http://localhost:{}/", args.port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
