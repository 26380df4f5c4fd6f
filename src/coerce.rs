//! Type coercion registry: one function per field [`Kind`].
//!
//! The built-in set handles `Int`, `String`, and `Struct`. Anything else must
//! be registered by the caller before loading, either with one of the ready-made
//! functions below ([`coerce_bool`], [`coerce_uint`], [`coerce_float`]) or a
//! custom [`Coerce`]. The caller's entries are merged over the built-ins once,
//! when the registry is built; a registry is never mutated afterward.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Number, Value};

use crate::error::ConfigError;
use crate::meta::{Field, Kind};
use crate::walk::Walker;

/// Convert the resolved value for `field` into `slot`, in place.
///
/// Arguments: the walker (environment, settings, registry), the field
/// descriptor, the field's current value, and the resolved key.
pub type Coerce = fn(&Walker<'_>, &Field, &mut Value, &str) -> Result<(), ConfigError>;

#[derive(Clone)]
pub struct Registry {
    entries: HashMap<Kind, Coerce>,
}

impl Registry {
    /// `Int`, `String`, and `Struct`.
    pub fn builtin() -> Self {
        let mut entries: HashMap<Kind, Coerce> = HashMap::new();
        entries.insert(Kind::Int, coerce_int);
        entries.insert(Kind::String, coerce_string);
        entries.insert(Kind::Struct, coerce_struct);
        Self { entries }
    }

    /// Built-in entries with `overrides` layered on top.
    pub fn with_overrides(overrides: &HashMap<Kind, Coerce>) -> Self {
        let mut registry = Self::builtin();
        registry
            .entries
            .extend(overrides.iter().map(|(kind, f)| (*kind, *f)));
        registry
    }

    pub fn get(&self, kind: Kind) -> Option<Coerce> {
        self.entries.get(&kind).copied()
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.entries.contains_key(&kind)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.entries.keys().map(Kind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("Registry").field("kinds", &kinds).finish()
    }
}

/// Base-10 signed 64-bit integer.
pub fn coerce_int(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let raw = walker.resolve_value(field, slot, key);
    if raw.is_empty() {
        return Ok(());
    }
    let n = raw.parse::<i64>().map_err(|source| ConfigError::ParseInt {
        key: key.into(),
        value: raw.clone(),
        source,
    })?;
    *slot = Value::from(n);
    Ok(())
}

/// Direct assignment.
pub fn coerce_string(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let raw = walker.resolve_value(field, slot, key);
    if !raw.is_empty() {
        *slot = Value::String(raw);
    }
    Ok(())
}

/// Walk into the nested struct, using `key` as the new prefix.
pub fn coerce_struct(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let meta = field.nested.ok_or_else(|| ConfigError::InvalidValue {
        key: key.into(),
        reason: format!("struct field '{}' has no nested metadata", field.name),
    })?;
    walker.walk(meta, slot, key)
}

/// `true`/`false`/`1`/`0`, case-insensitive. Not registered by default.
pub fn coerce_bool(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let raw = walker.resolve_value(field, slot, key);
    if raw.is_empty() {
        return Ok(());
    }
    let b = if raw.eq_ignore_ascii_case("true") || raw == "1" {
        true
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        false
    } else {
        return Err(ConfigError::InvalidValue {
            key: key.into(),
            reason: format!("'{raw}' is not a boolean"),
        });
    };
    *slot = Value::Bool(b);
    Ok(())
}

/// Base-10 unsigned 64-bit integer. Not registered by default.
pub fn coerce_uint(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let raw = walker.resolve_value(field, slot, key);
    if raw.is_empty() {
        return Ok(());
    }
    let n = raw.parse::<u64>().map_err(|source| ConfigError::ParseInt {
        key: key.into(),
        value: raw.clone(),
        source,
    })?;
    *slot = Value::from(n);
    Ok(())
}

/// 64-bit float; NaN and infinities are rejected. Not registered by default.
pub fn coerce_float(
    walker: &Walker<'_>,
    field: &Field,
    slot: &mut Value,
    key: &str,
) -> Result<(), ConfigError> {
    let raw = walker.resolve_value(field, slot, key);
    if raw.is_empty() {
        return Ok(());
    }
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.into(),
        reason,
    };
    let f = raw.parse::<f64>().map_err(|e| invalid(format!("'{raw}': {e}")))?;
    let n = Number::from_f64(f).ok_or_else(|| invalid(format!("'{raw}' is not finite")))?;
    *slot = Value::Number(n);
    Ok(())
}
