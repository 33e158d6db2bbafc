use configuration::{Environment, Settings};
use database::{ArticleStore, MemoryRepository};
use std::sync::{Arc, Once};
use tokio::net::TcpListener;
use tracing::subscriber::set_global_default;
use tracing_subscriber::EnvFilter;

pub struct TestApi {
    pub api_address: String,
    pub api_client: reqwest::Client,
}

impl TestApi {
    /// Spawns the application on a random port, backed by a fresh in-memory store.
    pub async fn spawn(store: Arc<MemoryRepository>) -> Self {
        Self::spawn_with_store(store).await
    }

    /// Spawns the application in front of an arbitrary store implementation.
    pub async fn spawn_with_store(store: Arc<dyn ArticleStore>) -> Self {
        Self::spawn_with_settings(store, Self::test_settings()).await
    }

    /// Spawns the application with caller-adjusted settings. The listener always
    /// binds an ephemeral port on localhost.
    pub async fn spawn_with_settings(store: Arc<dyn ArticleStore>, mut settings: Settings) -> Self {
        Self::init_telemetry();
        settings.server.host = "127.0.0.1".to_string();
        settings.server.port = 0;

        let tcp_listener = TcpListener::bind(settings.server.address())
            .await
            .expect("Failed to bind the server TCP listener");
        let address = tcp_listener
            .local_addr()
            .expect("The server TCP listener doesn't have a local socket address");
        let app = web_server::build_router(store, &settings);

        tokio::spawn(async move { web_server::serve(tcp_listener, app).await });

        TestApi {
            api_address: format!("http://{}", address),
            api_client: reqwest::Client::new(),
        }
    }

    pub fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.application.environment = Environment::Test;
        settings
    }

    fn init_telemetry() {
        // Initialize the telemetry setup at most once.
        static INIT_TELEMETRY: Once = Once::new();
        INIT_TELEMETRY.call_once(|| {
            // Only enable the telemetry if the `TEST_LOG` environment variable is set.
            if std::env::var("TEST_LOG").is_ok() {
                let subscriber = tracing_subscriber::fmt::Subscriber::builder()
                    .with_env_filter(
                        EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info")),
                    )
                    .finish();
                set_global_default(subscriber).expect("Failed to set a `tracing` global subscriber")
            }
        });
    }
}

/// Convenient methods for calling the API under test.
impl TestApi {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.api_address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", &self.api_address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn patch_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .patch(format!("{}{}", &self.api_address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// The `{ "error": { "message": ... } }` envelope every failure uses.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": { "message": message } })
}
