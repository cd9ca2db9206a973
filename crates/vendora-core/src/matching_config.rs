//! Static lookup configuration for the matching engine.
//!
//! Loaded once from YAML at startup and injected into the engine; nothing in
//! here changes at runtime.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::service::{ServiceTag, DEFAULT_ALIASES};
use crate::ConfigError;

/// Tunable multipliers and paging limits.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Prices in `(max, max * factor]` are tagged slightly-above.
    pub slightly_above_factor: f64,
    /// Prices below `min * factor` are tagged value.
    pub value_factor: f64,
    /// Widened radius for the adjacent-city tier, as a multiple of the request radius.
    pub adjacent_radius_multiplier: f64,
    pub default_radius_km: f64,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            slightly_above_factor: 1.1,
            value_factor: 0.9,
            adjacent_radius_multiplier: 3.0,
            default_radius_km: crate::search::DEFAULT_RADIUS_KM,
            default_page_size: crate::search::DEFAULT_PAGE_SIZE,
            max_page_size: 100,
        }
    }
}

/// Symmetric, case-insensitive city adjacency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: HashMap<String, BTreeSet<String>>,
}

impl AdjacencyList {
    /// Build from `city -> [adjacent cities]` pairs. Each edge is recorded in
    /// both directions.
    pub fn from_pairs<I, S, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let mut neighbors: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (city, adjacent) in pairs {
            let city = fold(city.as_ref());
            for other in adjacent {
                let other = fold(other.as_ref());
                if other == city {
                    continue;
                }
                neighbors
                    .entry(city.clone())
                    .or_default()
                    .insert(other.clone());
                neighbors.entry(other).or_default().insert(city.clone());
            }
        }
        Self { neighbors }
    }

    #[must_use]
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.neighbors
            .get(&fold(a))
            .is_some_and(|set| set.contains(&fold(b)))
    }

    /// Lowercased neighbors of `city`, sorted.
    #[must_use]
    pub fn neighbors_of(&self, city: &str) -> Vec<String> {
        self.neighbors
            .get(&fold(city))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// `(alias, tag)` pairs, defaults first then file entries, lowercased.
    pub aliases: Vec<(String, ServiceTag)>,
    pub adjacency: AdjacencyList,
    pub thresholds: Thresholds,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            aliases: default_aliases(),
            adjacency: AdjacencyList::default(),
            thresholds: Thresholds::default(),
        }
    }
}

fn default_aliases() -> Vec<(String, ServiceTag)> {
    DEFAULT_ALIASES
        .iter()
        .map(|(alias, tag)| ((*alias).to_string(), *tag))
        .collect()
}

#[derive(Debug, Deserialize)]
struct MatchingFile {
    #[serde(default = "default_true")]
    include_default_aliases: bool,
    #[serde(default)]
    aliases: BTreeMap<ServiceTag, Vec<String>>,
    #[serde(default)]
    adjacency: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    thresholds: Thresholds,
}

fn default_true() -> bool {
    true
}

impl MatchingConfig {
    /// Parse and validate a matching config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::YamlParse`] on malformed YAML or unknown tags, and
    /// [`ConfigError::Validation`] when values are out of range.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file: MatchingFile = serde_yaml::from_str(content)?;
        validate_file(&file)?;

        let mut aliases = if file.include_default_aliases {
            default_aliases()
        } else {
            Vec::new()
        };
        for (tag, names) in &file.aliases {
            for name in names {
                aliases.push((fold(name), *tag));
            }
        }

        Ok(Self {
            aliases,
            adjacency: AdjacencyList::from_pairs(file.adjacency),
            thresholds: file.thresholds,
        })
    }
}

/// Load and validate the matching configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_matching_config(path: &Path) -> Result<MatchingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    MatchingConfig::from_yaml_str(&content)
}

fn validate_file(file: &MatchingFile) -> Result<(), ConfigError> {
    for (tag, names) in &file.aliases {
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "alias list for '{tag}' contains an empty alias"
            )));
        }
    }

    for (city, adjacent) in &file.adjacency {
        if city.trim().is_empty() || adjacent.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "adjacency city names must be non-empty".to_string(),
            ));
        }
    }

    validate_thresholds(&file.thresholds)
}

fn validate_thresholds(t: &Thresholds) -> Result<(), ConfigError> {
    if !t.slightly_above_factor.is_finite() || t.slightly_above_factor < 1.0 {
        return Err(ConfigError::Validation(format!(
            "slightly_above_factor must be >= 1, got {}",
            t.slightly_above_factor
        )));
    }
    if !t.value_factor.is_finite() || t.value_factor <= 0.0 || t.value_factor > 1.0 {
        return Err(ConfigError::Validation(format!(
            "value_factor must be in (0, 1], got {}",
            t.value_factor
        )));
    }
    if !t.adjacent_radius_multiplier.is_finite() || t.adjacent_radius_multiplier < 1.0 {
        return Err(ConfigError::Validation(format!(
            "adjacent_radius_multiplier must be >= 1, got {}",
            t.adjacent_radius_multiplier
        )));
    }
    if !t.default_radius_km.is_finite() || t.default_radius_km <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "default_radius_km must be positive, got {}",
            t.default_radius_km
        )));
    }
    if t.default_page_size == 0 || t.max_page_size == 0 {
        return Err(ConfigError::Validation(
            "page sizes must be at least 1".to_string(),
        ));
    }
    if t.default_page_size > t.max_page_size {
        return Err(ConfigError::Validation(format!(
            "default_page_size {} exceeds max_page_size {}",
            t.default_page_size, t.max_page_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = MatchingConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, MatchingConfig::default());
    }

    #[test]
    fn file_aliases_extend_defaults() {
        let yaml = "aliases:\n  photograph: [\"Drone Shoot\"]\n";
        let cfg = MatchingConfig::from_yaml_str(yaml).unwrap();
        assert!(cfg.aliases.len() > DEFAULT_ALIASES.len());
        assert!(cfg
            .aliases
            .contains(&("drone shoot".to_string(), ServiceTag::Photograph)));
    }

    #[test]
    fn defaults_can_be_replaced() {
        let yaml = "include_default_aliases: false\naliases:\n  dj: [\"sound system\"]\n";
        let cfg = MatchingConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            cfg.aliases,
            vec![("sound system".to_string(), ServiceTag::Dj)]
        );
    }

    #[test]
    fn unknown_tag_is_a_parse_error() {
        let yaml = "aliases:\n  plumbing: [\"plumber\"]\n";
        assert!(matches!(
            MatchingConfig::from_yaml_str(yaml),
            Err(ConfigError::YamlParse(_))
        ));
    }

    #[test]
    fn adjacency_is_symmetric_and_case_insensitive() {
        let yaml = "adjacency:\n  Indore: [Dewas, \"Ujjain \"]\n";
        let cfg = MatchingConfig::from_yaml_str(yaml).unwrap();
        assert!(cfg.adjacency.is_adjacent("indore", "DEWAS"));
        assert!(cfg.adjacency.is_adjacent("Ujjain", "Indore"));
        assert!(!cfg.adjacency.is_adjacent("Dewas", "Ujjain"));
        assert_eq!(
            cfg.adjacency.neighbors_of("INDORE"),
            vec!["dewas".to_string(), "ujjain".to_string()]
        );
    }

    #[test]
    fn adjacency_ignores_self_edges() {
        let adj = AdjacencyList::from_pairs([("Indore", vec!["indore"])]);
        assert!(adj.is_empty());
    }

    #[test]
    fn thresholds_partial_override_keeps_other_defaults() {
        let yaml = "thresholds:\n  adjacent_radius_multiplier: 4.0\n";
        let cfg = MatchingConfig::from_yaml_str(yaml).unwrap();
        assert!((cfg.thresholds.adjacent_radius_multiplier - 4.0).abs() < f64::EPSILON);
        assert!((cfg.thresholds.slightly_above_factor - 1.1).abs() < f64::EPSILON);
        assert_eq!(cfg.thresholds.max_page_size, 100);
    }

    #[test]
    fn validate_rejects_value_factor_above_one() {
        let yaml = "thresholds:\n  value_factor: 1.5\n";
        let err = MatchingConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("value_factor"), "got: {err}");
    }

    #[test]
    fn validate_rejects_slightly_above_factor_below_one() {
        let yaml = "thresholds:\n  slightly_above_factor: 0.8\n";
        let err = MatchingConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("slightly_above_factor"), "got: {err}");
    }

    #[test]
    fn validate_rejects_default_page_size_above_max() {
        let yaml = "thresholds:\n  default_page_size: 50\n  max_page_size: 10\n";
        let err = MatchingConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("exceeds max_page_size"), "got: {err}");
    }

    #[test]
    fn validate_rejects_empty_city_name() {
        let yaml = "adjacency:\n  Indore: [\"\"]\n";
        let err = MatchingConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn load_matching_config_reports_missing_file() {
        let err = load_matching_config(Path::new("/nonexistent/matching.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileIo { .. }));
    }
}
