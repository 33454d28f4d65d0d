//! Engine configuration
//!
//! [`EngineSettings`] decides who plays the automated side, whether an
//! external oracle is consulted, and how tie-breaks are seeded. Settings are
//! stored as JSON; see [`settings_persistence`].

pub mod error;
pub mod settings_persistence;

pub use error::{ConfigError, ConfigResult};
pub use settings_persistence::{load_or_default, load_settings, save_settings, settings_path};

use crate::game::ai::{GameMode, MoveSelector, ProcessOracle};
use crate::game::components::PieceColor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default oracle wait in milliseconds
pub const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 5000;

fn default_timeout_ms() -> u64 {
    DEFAULT_ORACLE_TIMEOUT_MS
}

/// External program consulted for automated moves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleSettings {
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl OracleSettings {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout_ms: DEFAULT_ORACLE_TIMEOUT_MS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn to_oracle(&self) -> ProcessOracle {
        ProcessOracle::new(self.program.clone(), self.args.clone(), self.timeout())
    }
}

/// Persisted engine preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Color played by the automated side; `None` for two humans
    pub ai_color: Option<PieceColor>,
    pub oracle: Option<OracleSettings>,
    /// Fixed seed for tie-breaks, random if absent
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ai_color: GameMode::default().ai_color(),
            oracle: None,
            rng_seed: None,
        }
    }
}

impl EngineSettings {
    pub fn game_mode(&self) -> GameMode {
        GameMode::from(self.ai_color)
    }

    /// Reject values the engine cannot use
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(oracle) = &self.oracle {
            if oracle.timeout_ms == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "oracle.timeout_ms",
                    message: "must be greater than zero".to_string(),
                });
            }
            if oracle.program.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "oracle.program",
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Selector wired with the configured seed and oracle
    pub fn build_selector(&self) -> MoveSelector {
        let mut selector = match self.rng_seed {
            Some(seed) => MoveSelector::seeded(seed),
            None => MoveSelector::new(),
        };
        if let Some(oracle) = &self.oracle {
            selector.set_oracle(Some(Box::new(oracle.to_oracle())));
        }
        selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.ai_color, Some(PieceColor::Black));
        assert_eq!(settings.game_mode(), GameMode::default());
        assert!(settings.oracle.is_none());
        assert!(settings.validate().is_ok());
        assert!(!settings.build_selector().has_oracle());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{ "oracle": { "program": "python3" } }"#).unwrap();
        assert_eq!(settings.ai_color, Some(PieceColor::Black));

        let oracle = settings.oracle.as_ref().unwrap();
        assert!(oracle.args.is_empty());
        assert_eq!(oracle.timeout(), Duration::from_millis(DEFAULT_ORACLE_TIMEOUT_MS));
        assert!(settings.build_selector().has_oracle());
    }

    #[test]
    fn test_explicit_null_means_two_humans() {
        let settings: EngineSettings = serde_json::from_str(r#"{ "ai_color": null }"#).unwrap();
        assert_eq!(settings.game_mode(), GameMode::VsHuman);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let settings = EngineSettings {
            oracle: Some(OracleSettings {
                timeout_ms: 0,
                ..OracleSettings::new("oracle")
            }),
            ..EngineSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { field: "oracle.timeout_ms", .. })
        ));
    }
}
