//! Dashboard configuration

use rust_decimal::Decimal;
use serde::Deserialize;

/// Dashboard configuration
///
/// Every field can be set through a `DASHBOARD_`-prefixed environment
/// variable, e.g. `DASHBOARD_SEARCH=smith`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON file with the record list; the sample book when unset
    pub records_path: Option<String>,
    /// Log level
    pub log_level: String,
    /// KPI tile to select, by title or status key
    pub kpi: Option<String>,
    /// Free-text search term
    pub search: Option<String>,
    /// Product dropdown value ("all" for no constraint)
    pub product: Option<String>,
    /// Source dropdown value ("all" for no constraint)
    pub source: Option<String>,
    /// Issued date substring, e.g. "2024-01"
    pub issued_date: Option<String>,
    /// Lower premium slider
    pub premium_min: Option<Decimal>,
    /// Upper premium slider
    pub premium_max: Option<Decimal>,
    /// Record id to show in the detail view
    pub detail: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            records_path: None,
            log_level: "info".to_string(),
            kpi: None,
            search: None,
            product: None,
            source: None,
            issued_date: None,
            premium_min: None,
            premium_max: None,
            detail: None,
        }
    }
}

impl DashboardConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix("DASHBOARD"))
    }

    /// Loads configuration from an environment source
    ///
    /// Any value that does not deserialize into its field is an error.
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Returns true if any initial filter is configured
    pub fn has_initial_filters(&self) -> bool {
        [&self.search, &self.product, &self.source, &self.issued_date]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
            || self.premium_min.is_some()
            || self.premium_max.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config::Environment::with_prefix("DASHBOARD").source(Some(vars))
    }

    #[test]
    fn test_environment_values_are_read() {
        let config = DashboardConfig::from_environment(environment(&[
            ("DASHBOARD_SEARCH", "smith"),
            ("DASHBOARD_DETAIL", "3"),
        ]))
        .unwrap();
        assert_eq!(config.search.as_deref(), Some("smith"));
        assert_eq!(config.detail, Some(3));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let result = DashboardConfig::from_environment(environment(&[
            ("DASHBOARD_SEARCH", "smith"),
            ("DASHBOARD_DETAIL", "abc"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.records_path.is_none());
        assert!(!config.has_initial_filters());
    }

    #[test]
    fn test_blank_values_are_not_filters() {
        let config = DashboardConfig {
            search: Some("  ".to_string()),
            ..DashboardConfig::default()
        };
        assert!(!config.has_initial_filters());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"search": "smith", "premium_min": "900"}"#).unwrap();
        assert_eq!(config.search.as_deref(), Some("smith"));
        assert_eq!(config.premium_min, Some(Decimal::from(900)));
        assert_eq!(config.log_level, "info");
        assert!(config.has_initial_filters());
    }
}
