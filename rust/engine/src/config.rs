//! Engine configuration.
//!
//! Values resolve in three layers: built-in defaults, then an optional TOML
//! file named by `GAMBIT_CONFIG`, then individual environment overrides.
//! [`load_with_sources`] also reports where each value came from.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;
use crate::game::TurnPolicy;
use crate::pieces::Side;
use crate::player::{Player, PlayerKind};
use crate::rules::RuleSet;

pub const ENV_CONFIG_PATH: &str = "GAMBIT_CONFIG";
pub const ENV_RULES: &str = "GAMBIT_RULES";
pub const ENV_TURN_POLICY: &str = "GAMBIT_TURN_POLICY";
pub const ENV_LIGHT: &str = "GAMBIT_LIGHT";
pub const ENV_DARK: &str = "GAMBIT_DARK";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub rules: RuleSet,
    pub turn_policy: TurnPolicy,
    pub light: PlayerKind,
    pub dark: PlayerKind,
}

impl EngineConfig {
    /// The two seats described by this configuration, light first.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(Side::Light, self.light),
            Player::new(Side::Dark, self.dark),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub rules: ValueSource,
    pub turn_policy: ValueSource,
    pub light: ValueSource,
    pub dark: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rules: ValueSource::Default,
            turn_policy: ValueSource::Default,
            light: ValueSource::Default,
            dark: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: EngineConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    rules: Option<RuleSet>,
    #[serde(default)]
    turn_policy: Option<TurnPolicy>,
    #[serde(default)]
    light: Option<PlayerKind>,
    #[serde(default)]
    dark: Option<PlayerKind>,
}

pub fn load() -> Result<EngineConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Parses a TOML document on top of the defaults.
pub fn from_toml_str(s: &str) -> Result<EngineConfig, ConfigError> {
    let mut cfg = EngineConfig::default();
    let mut sources = ConfigSources::default();
    apply_file(&mut cfg, &mut sources, toml::from_str(s)?);
    Ok(cfg)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let s = fs::read_to_string(path)?;
    from_toml_str(&s)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = EngineConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        if !path.is_empty() {
            let s = fs::read_to_string(&path)?;
            apply_file(&mut cfg, &mut sources, toml::from_str(&s)?);
            tracing::debug!(path = %path, "loaded engine config file");
        }
    }

    if let Some(v) = env_override(ENV_RULES)? {
        cfg.rules = v;
        sources.rules = ValueSource::Env;
    }
    if let Some(v) = env_override(ENV_TURN_POLICY)? {
        cfg.turn_policy = v;
        sources.turn_policy = ValueSource::Env;
    }
    if let Some(v) = env_override(ENV_LIGHT)? {
        cfg.light = v;
        sources.light = ValueSource::Env;
    }
    if let Some(v) = env_override(ENV_DARK)? {
        cfg.dark = v;
        sources.dark = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn apply_file(cfg: &mut EngineConfig, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.rules {
        cfg.rules = v;
        sources.rules = ValueSource::File;
    }
    if let Some(v) = f.turn_policy {
        cfg.turn_policy = v;
        sources.turn_policy = ValueSource::File;
    }
    if let Some(v) = f.light {
        cfg.light = v;
        sources.light = ValueSource::File;
    }
    if let Some(v) = f.dark {
        cfg.dark = v;
        sources.dark = ValueSource::File;
    }
}

/// Reads an enum-valued override such as `GAMBIT_RULES=baseline`, using
/// the same snake_case names as the TOML file.
fn env_override<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let raw = match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => return Ok(None),
    };
    let value = raw.trim().to_ascii_lowercase();
    T::deserialize(serde::de::value::StrDeserializer::<serde::de::value::Error>::new(&value))
        .map(Some)
        .map_err(|_| ConfigError::Invalid(format!("{key}={raw}")))
}
