use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};

use crate::error::AppError;
use crate::models::settings::BoardSettings;

/// Base name of the optional settings file (`postboard.toml`, `postboard.json`, ...).
pub const CONFIG_FILE: &str = "postboard";

/// Prefix of the environment variables overriding settings,
/// e.g. `POSTBOARD_PAGE_SIZE=20`.
pub const ENV_PREFIX: &str = "POSTBOARD";

/// Load settings from defaults, the optional settings file and the
/// environment, in increasing order of precedence.
pub fn load_settings() -> Result<BoardSettings, AppError> {
    let builder = Config::builder()
        .add_source(File::with_name(CONFIG_FILE).required(false))
        .add_source(env_source());
    settings_from(builder)
}

/// Environment source with numeric values parsed.
pub fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

/// Resolve settings from an arbitrary set of sources, filling gaps with defaults.
pub fn settings_from(builder: ConfigBuilder<DefaultState>) -> Result<BoardSettings, AppError> {
    let defaults = BoardSettings::default();
    let settings: BoardSettings = builder
        .set_default("posts_url", defaults.posts_url)?
        .set_default("page_size", defaults.page_size as i64)?
        .set_default("placeholder_count", defaults.placeholder_count as i64)?
        .set_default("fallback_timeout_ms", defaults.fallback_timeout_ms as i64)?
        .build()?
        .try_deserialize()?;

    validate(settings)
}

fn validate(settings: BoardSettings) -> Result<BoardSettings, AppError> {
    if settings.posts_url.trim().is_empty() {
        return Err(AppError::Config("posts_url cannot be empty".into()));
    }
    if settings.page_size == 0 {
        return Err(AppError::Config("page_size must be at least 1".into()));
    }
    Ok(settings)
}
