use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::MIN_PEGS;
use crate::solver::SplitPolicy;

/// Largest board the runner knows a strategy for.
pub const MAX_PEGS: usize = 4;

/// Settings for a tour, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub pegs: usize,
    pub disks: usize,
    pub split: SplitPolicy,
    pub animate: bool,
    pub delay_ms: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            pegs: 4,
            disks: 5,
            split: SplitPolicy::Fixed,
            animate: false,
            delay_ms: 500,
        }
    }
}

impl TourConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: TourConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pegs < MIN_PEGS || self.pegs > MAX_PEGS {
            return Err(ConfigError::Validation(format!(
                "pegs must be in [{MIN_PEGS}, {MAX_PEGS}], got {}",
                self.pegs
            )));
        }
        if self.disks == 0 {
            return Err(ConfigError::Validation("disks must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&TourConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = TourConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TourConfig = toml::from_str("disks = 9\n").unwrap();
        assert_eq!(config.disks, 9);
        assert_eq!(config.pegs, 4);
        assert_eq!(config.split, SplitPolicy::Fixed);
    }

    #[test]
    fn test_split_policy_from_toml() {
        let config: TourConfig = toml::from_str("split = \"frame-stewart\"\n").unwrap();
        assert_eq!(config.split, SplitPolicy::FrameStewart);
        assert!(toml::from_str::<TourConfig>("split = \"best\"\n").is_err());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: TourConfig = toml::from_str("").unwrap();
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_disks() {
        let mut config = TourConfig::default();
        config.disks = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_peg_counts() {
        let mut config = TourConfig::default();
        config.pegs = 2;
        assert!(config.validate().is_err());
        config.pegs = 5;
        assert!(config.validate().is_err());
        config.pegs = 3;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = TourConfig::load_or_default(Path::new("nonexistent_tour.toml")).unwrap();
        assert_eq!(config, TourConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
pegs = 3
disks = 6
animate = true
"#
        )
        .unwrap();

        let config = TourConfig::load(&path).unwrap();
        assert_eq!(config.pegs, 3);
        assert_eq!(config.disks, 6);
        assert!(config.animate);
        assert_eq!(config.delay_ms, 500);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.toml");
        std::fs::write(&path, "pegs = 7\n").unwrap();
        assert!(matches!(
            TourConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(matches!(
            TourConfig::load(Path::new("nonexistent_tour.toml")),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = TourConfig::default_toml();
        let config: TourConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, TourConfig::default());
    }
}
