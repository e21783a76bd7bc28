//! # huddle-config
//!
//! Layered configuration loading for Huddle using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HUDDLE_*` prefix, `__` as separator)
//! 2. Project-level `.huddle/config.toml`
//! 3. User-level `~/.config/huddle/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HUDDLE_WORKSPACE__SEED_SAMPLE_DATA` -> `workspace.seed_sample_data`,
//! `HUDDLE_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use huddle_config::HuddleConfig;
//!
//! let config = HuddleConfig::load_with_dotenv().expect("config");
//! if config.workspace.seed_sample_data {
//!     println!("starting from the sample workspace");
//! }
//! ```

mod error;
mod general;
mod workspace;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use workspace::WorkspaceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HuddleConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HuddleConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".huddle/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HUDDLE_").split("__"))
    }

    /// Check values figment cannot express in types.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a zero list limit or a sign-in
    /// email without `@`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if let Some(email) = self.workspace.current_user_email() {
            if !email.contains('@') {
                return Err(ConfigError::InvalidValue {
                    field: "workspace.current_user_email".into(),
                    reason: format!("'{email}' is not an email address"),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("huddle").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HuddleConfig::default();
        assert!(config.workspace.seed_sample_data);
        assert_eq!(config.general.default_limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = HuddleConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }

    #[test]
    fn malformed_sign_in_email_is_rejected() {
        let mut config = HuddleConfig::default();
        config.workspace.current_user_email = "tharuneshvar".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
