use dotenv::dotenv;
use reptile_backend::app::app::App;
use reptile_backend::util::logger::Logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    // Initialize tracing with console and rolling file output
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("🚀 Starting Rep-Tile Quote Backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = App::new().await;
    app.start().await;
}
