use crate::checker::distance::DistanceKind;
use crate::error::{ConfigError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DOMAIN_THRESHOLD: f64 = 2.0;
pub const SECOND_LEVEL_THRESHOLD: f64 = 2.0;
pub const TOP_LEVEL_THRESHOLD: f64 = 2.0;

pub const DEFAULT_DOMAINS: &[&str] = &[
    "google.com",
    "gmail.com",
    "me.com",
    "aol.com",
    "mac.com",
    "comcast.net",
    "googlemail.com",
    "msn.com",
    "facebook.com",
    "verizon.net",
    "sbcglobal.net",
    "att.net",
    "gmx.com",
    "icloud.com",
];

pub const DEFAULT_SECOND_LEVEL_DOMAINS: &[&str] =
    &["yahoo", "hotmail", "mail", "live", "outlook", "gmx"];

pub const DEFAULT_TOP_LEVEL_DOMAINS: &[&str] = &[
    "co.jp", "co.uk", "com", "net", "org", "info", "edu", "gov", "mil", "ca",
];

const LOCAL_CONFIG: &str = ".mailcheck.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Full domains matched against the whole domain part
    pub domains: Vec<String>,
    /// Provider names matched against the first domain label
    pub second_level_domains: Vec<String>,
    /// Suffixes matched against the remaining labels
    pub top_level_domains: Vec<String>,

    pub distance: DistanceKind,

    pub domain_threshold: f64,
    pub second_level_threshold: f64,
    pub top_level_threshold: f64,
}

/// One configuration file; unset keys leave lower layers untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    pub domains: Option<Vec<String>>,
    pub second_level_domains: Option<Vec<String>>,
    pub top_level_domains: Option<Vec<String>>,
    pub distance: Option<DistanceKind>,
    pub domain_threshold: Option<f64>,
    pub second_level_threshold: Option<f64>,
    pub top_level_threshold: Option<f64>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: to_strings(DEFAULT_DOMAINS),
            second_level_domains: to_strings(DEFAULT_SECOND_LEVEL_DOMAINS),
            top_level_domains: to_strings(DEFAULT_TOP_LEVEL_DOMAINS),
            distance: DistanceKind::default(),
            domain_threshold: DOMAIN_THRESHOLD,
            second_level_threshold: SECOND_LEVEL_THRESHOLD,
            top_level_threshold: TOP_LEVEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration with priority: explicit file > local config > global config > defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging global config");
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = Self::local_config_path();
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging local config");
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "merging explicit config");
            config = config.merge(ConfigLayer::from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with a single config file
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Thresholds must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("domain_threshold", self.domain_threshold),
            ("second_level_threshold", self.second_level_threshold),
            ("top_level_threshold", self.top_level_threshold),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Apply every value the layer sets, whatever it is
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(domains) = layer.domains {
            self.domains = domains;
        }
        if let Some(second_level_domains) = layer.second_level_domains {
            self.second_level_domains = second_level_domains;
        }
        if let Some(top_level_domains) = layer.top_level_domains {
            self.top_level_domains = top_level_domains;
        }
        if let Some(distance) = layer.distance {
            self.distance = distance;
        }
        if let Some(threshold) = layer.domain_threshold {
            self.domain_threshold = threshold;
        }
        if let Some(threshold) = layer.second_level_threshold {
            self.second_level_threshold = threshold;
        }
        if let Some(threshold) = layer.top_level_threshold {
            self.top_level_threshold = threshold;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mailcheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.domains.len(), 14);
        assert_eq!(config.second_level_domains.len(), 6);
        assert_eq!(config.top_level_domains.len(), 10);
        assert_eq!(config.distance, DistanceKind::Sift4);
        assert_eq!(config.domain_threshold, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_configs() {
        let layer = ConfigLayer {
            domains: Some(vec!["example.org".to_string()]),
            distance: Some(DistanceKind::Sift3),
            top_level_threshold: Some(1.0),
            ..Default::default()
        };

        let merged = Config::default().merge(layer);
        assert_eq!(merged.domains, vec!["example.org"]);
        assert_eq!(merged.distance, DistanceKind::Sift3);
        assert_eq!(merged.top_level_threshold, 1.0);
        assert_eq!(merged.second_level_domains.len(), 6);
    }

    #[test]
    fn test_later_layer_can_restore_defaults() {
        let local = ConfigLayer {
            distance: Some(DistanceKind::Sift3),
            domain_threshold: Some(1.0),
            ..Default::default()
        };
        let explicit: ConfigLayer =
            toml::from_str("distance = \"sift4\"\ndomain_threshold = 2.0").unwrap();

        let merged = Config::default().merge(local).merge(explicit);
        assert_eq!(merged.distance, DistanceKind::Sift4);
        assert_eq!(merged.domain_threshold, 2.0);
    }

    #[test]
    fn test_unset_keys_keep_lower_layers() {
        let local = ConfigLayer {
            top_level_threshold: Some(0.5),
            second_level_domains: Some(vec!["proton".to_string()]),
            ..Default::default()
        };
        let explicit: ConfigLayer = toml::from_str("domain_threshold = 1.0").unwrap();

        let merged = Config::default().merge(local).merge(explicit);
        assert_eq!(merged.top_level_threshold, 0.5);
        assert_eq!(merged.second_level_domains, vec!["proton"]);
        assert_eq!(merged.domain_threshold, 1.0);
    }

    #[test]
    fn test_explicit_empty_list_replaces() {
        let layer: ConfigLayer = toml::from_str("top_level_domains = []").unwrap();
        let merged = Config::default().merge(layer);
        assert!(merged.top_level_domains.is_empty());
        assert_eq!(merged.domains.len(), 14);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "second_level_domains = [\"proton\", \"fastmail\"]\ndistance = \"sift3\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.second_level_domains, vec!["proton", "fastmail"]);
        assert_eq!(config.distance, DistanceKind::Sift3);
        assert_eq!(config.domains.len(), 14);
        assert_eq!(config.domain_threshold, 2.0);
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "domain_threshold = 1.5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.domain_threshold, 1.5);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "distance = \"levenshtein\"").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = Config {
            second_level_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold {
                name: "second_level_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("gmail.com"));
        assert_eq!(toml::from_str::<Config>(&text).unwrap(), config);
    }
}
