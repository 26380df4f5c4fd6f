//! Resolved-value listing behind `config list`, and the `ConfigResult` enum
//! that callers use to display the outcome of any config action.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use crate::meta::{Kind, Meta};
use crate::tag;
use crate::types::Settings;

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// The environment variable listing.
    Usage(String),
    /// All resolved values, keyed by environment variable name.
    Listing { entries: Vec<(String, String)> },
    /// Confirmation that the config file was rewritten.
    Saved { path: PathBuf },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Usage(text) => write!(f, "{text}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            ConfigResult::Saved { path } => write!(f, "Config saved to {}", path.display()),
        }
    }
}

/// List the resolved leaves of `value`, keyed by uppercased env var name.
///
/// Walks `meta` like the loader does: disabled fields are skipped and nested
/// structs contribute their leaves under the joined key.
pub fn list_values(meta: &Meta, value: &Value, settings: &Settings) -> ConfigResult {
    let mut entries = Vec::new();
    collect(meta, value, "", settings, &mut entries);
    ConfigResult::Listing { entries }
}

fn collect(
    meta: &Meta,
    node: &Value,
    prefix: &str,
    settings: &Settings,
    out: &mut Vec<(String, String)>,
) {
    for field in meta.fields {
        let key = tag::resolve_key(field, prefix, settings);
        if key.is_empty() {
            continue;
        }
        let slot = node.get(field.name).unwrap_or(&Value::Null);

        match (field.kind, field.nested) {
            (Kind::Struct, Some(inner)) => collect(inner, slot, &key, settings, out),
            _ => out.push((key.to_uppercase(), format_value(slot))),
        }
    }
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "<not set>".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{DbConfig, TestConfig};
    use crate::meta::Schema;

    fn sample() -> Value {
        serde_json::to_value(TestConfig {
            host: "localhost".into(),
            port: 8080,
            name: "svc".into(),
            secret: "hidden".into(),
            database: DbConfig {
                url: "pg://db".into(),
                port: 5432,
            },
        })
        .unwrap()
    }

    #[test]
    fn list_uses_env_names() {
        let ConfigResult::Listing { entries } =
            list_values(&TestConfig::META, &sample(), &Settings::default())
        else {
            panic!("expected listing");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["HOST", "PORT", "NAME", "DB_URL", "DB_PORT"]);
        assert!(entries.contains(&("DB_URL".into(), "pg://db".into())));
    }

    #[test]
    fn list_skips_disabled() {
        let result = list_values(&TestConfig::META, &sample(), &Settings::default());
        assert!(!result.to_string().contains("hidden"));
    }

    #[test]
    fn missing_value_shows_not_set() {
        let result = list_values(
            &TestConfig::META,
            &serde_json::json!({}),
            &Settings::default(),
        );
        assert!(result.to_string().contains("HOST = <not set>"));
    }

    #[test]
    fn listing_display_one_per_line() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("HOST".into(), "h".into()),
                ("PORT".into(), "1".into()),
            ],
        };
        assert_eq!(result.to_string(), "HOST = h\nPORT = 1");
    }

    #[test]
    fn saved_display() {
        let result = ConfigResult::Saved {
            path: "/tmp/config.json".into(),
        };
        assert!(result.to_string().contains("/tmp/config.json"));
    }
}
