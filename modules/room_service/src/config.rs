//! Configuration for room service module

use serde::Deserialize;

/// Room service configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Run schema migrations when the module starts
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Publish room events to the audit log target
    #[serde(default = "default_true")]
    pub publish_events: bool,

    /// Prefix prepended to every route (e.g. "/v2")
    #[serde(default)]
    pub route_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run_migrations: true,
            publish_events: true,
            route_prefix: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_document() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"retention": 3}"#);
        assert!(result.is_err());
    }
}
