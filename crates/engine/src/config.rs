//! Benchmark configuration via `pairbench.toml`
//!
//! A missing file is created with the commented defaults on first run.
//! Every field has a default, so an empty file is a valid configuration.

use pairbench_core::{Error, Result};
use pairbench_storage::StrategyKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::driver::DEFAULT_NUM_LOOKUPS;

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pairbench.toml";

/// How many leading catalog entries a run populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PopulationRepr", into = "PopulationRepr")]
pub enum Population {
    /// The first `n` identifiers (clamped to the catalog size)
    Count(usize),
    /// The whole catalog
    Full,
}

impl Population {
    /// Argument for `PairContainer::init`
    pub fn requested(&self) -> Option<usize> {
        match self {
            Population::Count(n) => Some(*n),
            Population::Full => None,
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Population::Count(n) => write!(f, "{}", n),
            Population::Full => f.write_str("full"),
        }
    }
}

/// On-disk form: an integer or the string `"full"`
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PopulationRepr {
    Count(usize),
    Label(String),
}

impl TryFrom<PopulationRepr> for Population {
    type Error = String;

    fn try_from(repr: PopulationRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            PopulationRepr::Count(n) => Ok(Population::Count(n)),
            PopulationRepr::Label(s) if s.eq_ignore_ascii_case("full") => Ok(Population::Full),
            PopulationRepr::Label(s) => Err(format!(
                "invalid population '{}', expected a count or \"full\"",
                s
            )),
        }
    }
}

impl From<Population> for PopulationRepr {
    fn from(p: Population) -> Self {
        match p {
            Population::Count(n) => PopulationRepr::Count(n),
            Population::Full => PopulationRepr::Label("full".to_string()),
        }
    }
}

/// Benchmark configuration loaded from `pairbench.toml`.
///
/// # Example
///
/// ```toml
/// num_lookups = 1000000
/// catalog_size = 2048
/// populations = [256, "full"]
/// strategies = ["composite", "nested", "matrix"]
/// # seed = 42
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Timed lookups per run
    #[serde(default = "default_num_lookups")]
    pub num_lookups: usize,
    /// Size of the generated catalog
    #[serde(default = "default_catalog_size")]
    pub catalog_size: usize,
    /// Population levels, each run once per strategy
    #[serde(default = "default_populations")]
    pub populations: Vec<Population>,
    /// Strategies to compare
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyKind>,
    /// Seed for lookup key generation; entropy-seeded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Untimed lookups performed before each timed run
    #[serde(default)]
    pub warmup_lookups: usize,
}

fn default_num_lookups() -> usize {
    DEFAULT_NUM_LOOKUPS
}

fn default_catalog_size() -> usize {
    2048
}

fn default_populations() -> Vec<Population> {
    vec![Population::Count(256), Population::Full]
}

fn default_strategies() -> Vec<StrategyKind> {
    StrategyKind::ALL.to_vec()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            num_lookups: default_num_lookups(),
            catalog_size: default_catalog_size(),
            populations: default_populations(),
            strategies: default_strategies(),
            seed: None,
            warmup_lookups: 0,
        }
    }
}

impl BenchConfig {
    /// Check that the configuration describes at least one runnable benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty strategy or population
    /// list, or a zero catalog size.
    pub fn validate(&self) -> Result<()> {
        if self.strategies.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one strategy is required".to_string(),
            ));
        }
        if self.populations.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one population is required".to_string(),
            ));
        }
        if self.catalog_size == 0 {
            return Err(Error::InvalidConfig(
                "catalog_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# pairbench configuration

# Timed random lookups per run (default: 1000000)
num_lookups = 1000000

# Number of generated type identifiers in the catalog (default: 2048)
catalog_size = 2048

# Population levels. A number populates that many leading identifiers
# (clamped to the catalog); "full" populates the whole catalog.
# Lookups are always drawn from the whole catalog, so partial populations
# produce misses.
populations = [256, "full"]

# Strategies to compare: "composite", "nested", "matrix"
strategies = ["composite", "nested", "matrix"]

# Fixed seed for reproducible lookup keys (default: random)
# seed = 42

# Untimed lookups before each timed run (default: 0)
warmup_lookups = 0
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BenchConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = BenchConfig::default();
        assert_eq!(config.num_lookups, 1_000_000);
        assert_eq!(config.strategies, StrategyKind::ALL.to_vec());
        config.validate().unwrap();
    }

    #[test]
    fn default_toml_parses_to_defaults() {
        let config: BenchConfig = toml::from_str(BenchConfig::default_toml()).unwrap();
        assert_eq!(config.num_lookups, 1_000_000);
        assert_eq!(config.catalog_size, 2048);
        assert_eq!(
            config.populations,
            vec![Population::Count(256), Population::Full]
        );
        assert!(config.seed.is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: BenchConfig = toml::from_str("").unwrap();
        assert_eq!(config.catalog_size, 2048);
        assert_eq!(config.warmup_lookups, 0);
    }

    #[test]
    fn parse_custom() {
        let config: BenchConfig = toml::from_str(
            r#"
num_lookups = 10
populations = ["FULL", 3]
strategies = ["matrix"]
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.num_lookups, 10);
        assert_eq!(config.populations, vec![Population::Full, Population::Count(3)]);
        assert_eq!(config.strategies, vec![StrategyKind::Matrix]);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn parse_invalid_population_fails() {
        let result: std::result::Result<BenchConfig, _> = toml::from_str("populations = [\"half\"]");
        assert!(result.is_err());
    }

    #[test]
    fn parse_unknown_strategy_fails() {
        let result: std::result::Result<BenchConfig, _> = toml::from_str("strategies = [\"btree\"]");
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_empty_strategies() {
        let config = BenchConfig {
            strategies: vec![],
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_zero_catalog() {
        let config = BenchConfig {
            catalog_size: 0,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn population_requested() {
        assert_eq!(Population::Count(5).requested(), Some(5));
        assert_eq!(Population::Full.requested(), None);
        assert_eq!(Population::Full.to_string(), "full");
    }

    #[test]
    fn write_default_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(!path.exists());

        BenchConfig::write_default_if_missing(&path).unwrap();
        assert!(path.exists());

        let config = BenchConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_size, 2048);
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "catalog_size = 12\n").unwrap();

        BenchConfig::write_default_if_missing(&path).unwrap();

        let config = BenchConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_size, 12);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = BenchConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn from_file_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "strategies = []\n").unwrap();
        assert!(matches!(
            BenchConfig::from_file(&path),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let config = BenchConfig {
            num_lookups: 500,
            catalog_size: 64,
            populations: vec![Population::Count(8), Population::Full],
            strategies: vec![StrategyKind::Nested, StrategyKind::Composite],
            seed: Some(11),
            warmup_lookups: 100,
        };

        config.write_to_file(&path).unwrap();
        let loaded = BenchConfig::from_file(&path).unwrap();
        assert_eq!(loaded.num_lookups, 500);
        assert_eq!(loaded.populations, config.populations);
        assert_eq!(loaded.strategies, config.strategies);
        assert_eq!(loaded.seed, Some(11));
        assert_eq!(loaded.warmup_lookups, 100);
    }
}
