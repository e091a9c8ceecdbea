use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::app_conf::AppConfig;
use crate::config::{PushoverConfig, SupabaseConfig};
use crate::repository::quote_repo::SupabaseQuoteRepository;
use crate::router::quote_router::quote_router;
use crate::service::quote_service::QuoteIntakeServiceImpl;
use crate::util::pushover::{PushoverNotifier, QuoteNotifier};
use crate::util::storage::SupabaseStorageService;

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        config.validate().expect("App config error");

        let supabase_config = SupabaseConfig::from_env().expect("Supabase config error");
        let client = reqwest::Client::new();

        let quote_repo = Arc::new(SupabaseQuoteRepository::new(
            client.clone(),
            supabase_config.clone(),
        ));
        let storage = Arc::new(SupabaseStorageService::new(
            client.clone(),
            supabase_config,
        ));

        let notifier: Option<Arc<dyn QuoteNotifier>> =
            match PushoverConfig::from_env().expect("Pushover config error") {
                Some(pushover_config) => {
                    Some(Arc::new(PushoverNotifier::new(client, pushover_config)))
                }
                None => {
                    warn!("Running without a notifier, submissions will not be announced");
                    None
                }
            };

        let quote_service = Arc::new(QuoteIntakeServiceImpl {
            quote_repo,
            storage,
            notifier,
        });

        let router = Router::new()
            .merge(quote_router(quote_service))
            .route("/health", get(|| async { "OK" }));

        App { config, router }
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
