//! Value resolution: pick the string a coercion should apply.
//!
//! Precedence, highest first:
//!
//! 1. Environment variable named by the uppercased key, when non-empty.
//! 2. The value already in the slot (put there by the struct itself or by the
//!    config file), when non-empty for its kind.
//! 3. The default tag.
//!
//! An empty result means "leave the slot alone".

use std::collections::HashMap;

use serde_json::Value;

use crate::meta::Field;
use crate::types::Settings;

/// Snapshot of environment variables, keyed by name.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn env_map(vars: impl IntoIterator<Item = (String, String)>) -> HashMap<String, String> {
    vars.into_iter().collect()
}

/// Look up `key` (uppercased) in `env`, treating an empty value as unset.
pub fn lookup<'a>(env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    env.get(&key.to_uppercase())
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Resolve the effective string for one field.
pub fn resolve_value(
    env: &HashMap<String, String>,
    settings: &Settings,
    field: &Field,
    current: &Value,
    key: &str,
) -> String {
    if let Some(v) = lookup(env, key) {
        return v.to_string();
    }

    if let Some(v) = current_as_string(current) {
        return v;
    }

    field.tag(&settings.tag_default).to_string()
}

/// String form of a populated slot, or `None` for a zero value.
///
/// Zero values are `null`, `""`, `0`, `false`, and anything that isn't a
/// scalar.
fn current_as_string(current: &Value) -> Option<String> {
    match current {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if !is_zero(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".into()),
        _ => None,
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_i64() == Some(0) || n.as_u64() == Some(0) || n.as_f64() == Some(0.0)
}
