//! # vibe-config
//!
//! Layered configuration loading for MatchVibe using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VIBE_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`vibe --config`)
//! 3. Project-level `.vibe/config.toml`
//! 4. User-level `~/.config/vibe/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `VIBE_VALIDATION__EXPECTED_QUESTIONS` -> `validation.expected_questions`,
//! `VIBE_MESSAGES__BOTH_CHOSE_NOTHING` -> `messages.both_chose_nothing`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vibe_config::VibeConfig;
//! use vibe_core::MatchCalculator;
//!
//! let config = VibeConfig::load_with_dotenv(None).expect("config");
//! let calculator = MatchCalculator::with_messages(config.fallback_messages().expect("messages"));
//! ```

mod error;
mod validation;

pub use error::ConfigError;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vibe_core::messages::{FallbackMessages, ITEM_PLACEHOLDER};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VibeConfig {
    #[serde(default)]
    pub messages: FallbackMessages,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl VibeConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`Self::load`], with `explicit` layered above the project file.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment(explicit)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (if present), then
    /// [`Self::load_from`]. Variables already set in the process win over
    /// the file.
    ///
    /// # Errors
    ///
    /// `ConfigError::Dotenv` if `.env` exists but is malformed.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::from_path(Path::new(".env")) {
            if !err.not_found() {
                return Err(ConfigError::Dotenv(err));
            }
        }
        Self::load_from(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vibe/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("VIBE_").split("__"))
    }

    /// Fallback messages after checking that every text is usable.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` if a message is blank or a one-sided
    /// template lacks the `{item}` placeholder.
    pub fn fallback_messages(&self) -> Result<FallbackMessages, ConfigError> {
        let messages = &self.messages;
        let texts = [
            ("host_chose_nothing", &messages.host_chose_nothing),
            ("guest_chose_nothing", &messages.guest_chose_nothing),
            ("both_chose_nothing", &messages.both_chose_nothing),
            ("only_host_chose", &messages.only_host_chose),
            ("only_guest_chose", &messages.only_guest_chose),
            ("different_preferences", &messages.different_preferences),
        ];
        if let Some((field, _)) = texts.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("messages.{field}"),
                reason: "message must not be empty".to_string(),
            });
        }

        if let Some(field) = messages.templates_missing_item().first() {
            return Err(ConfigError::InvalidValue {
                field: format!("messages.{field}"),
                reason: format!("template must contain the {ITEM_PLACEHOLDER} placeholder"),
            });
        }

        Ok(messages.clone())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vibe").join("config.toml"))
    }
}
