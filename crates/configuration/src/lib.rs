use crate::error::ConfigError;
use config::builder::DefaultState;
use config::ConfigBuilder;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Application, Database, Environment, Logging, Server, Settings};

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, an optional `config.toml`
/// in the working directory, then `BLOGFUL__<SECTION>__<KEY>` environment variables.
/// `DATABASE_URL` fills `database.url` when no other source set it.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("BLOGFUL")
                .separator("__")
                .try_parsing(true),
        );

    let mut settings = build_settings(builder)?;

    if settings.database.url.is_none() {
        dotenvy::dotenv().ok();
        settings.database.url = std::env::var("DATABASE_URL").ok();
    }

    Ok(settings)
}

fn build_settings(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.port == 0 && settings.application.environment != Environment::Test {
        return Err(ConfigError::ValidationError(
            "server.port may only be 0 in the test environment".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
