//! Struct walker: depth-first traversal of a descriptor table over a value tree.
//!
//! The target struct is serialized to a `serde_json::Value` first, so the
//! walker works on one uniform representation: an object per struct, a slot per
//! field. For each field in the [`Meta`]:
//!
//! 1. Resolve the key ([`tag::resolve_key`]); skip the field if it's disabled.
//! 2. Look up the coercion for the field's [`Kind`](crate::meta::Kind); fail with
//!    [`ConfigError::TypeNotSupported`] if none is registered.
//! 3. Run it against the field's slot. The first error aborts the walk.
//!
//! Nested structs recurse through the `Struct` coercion with the field's key as
//! the new prefix, so `db` → `port` resolves to `db_port` (env `DB_PORT`).

use std::collections::HashMap;

use serde_json::Value;

use crate::coerce::Registry;
use crate::env;
use crate::error::ConfigError;
use crate::meta::{Field, Meta};
use crate::tag;
use crate::types::Settings;

/// Everything a coercion needs besides its own field: settings, the registry,
/// and a snapshot of the environment.
pub struct Walker<'a> {
    settings: &'a Settings,
    registry: &'a Registry,
    env: HashMap<String, String>,
}

impl<'a> Walker<'a> {
    /// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
    pub fn new(
        settings: &'a Settings,
        registry: &'a Registry,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            settings,
            registry,
            env: env::env_map(vars),
        }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Resolve the string to coerce for `field`; see [`env::resolve_value`].
    pub fn resolve_value(&self, field: &Field, current: &Value, key: &str) -> String {
        env::resolve_value(&self.env, self.settings, field, current, key)
    }

    /// Visit every field of `meta` in `node`, with `prefix` from enclosing structs.
    pub fn walk(&self, meta: &Meta, node: &mut Value, prefix: &str) -> Result<(), ConfigError> {
        let obj = match node {
            Value::Null => return Err(ConfigError::NotAPointer),
            Value::Object(obj) => obj,
            _ => return Err(ConfigError::NotAStruct),
        };

        for field in meta.fields {
            let key = tag::resolve_key(field, prefix, self.settings);
            if key.is_empty() {
                continue;
            }

            let Some(coerce) = self.registry.get(field.kind) else {
                tracing::warn!(kind = %field.kind, field = field.name, "type not supported");
                return Err(ConfigError::TypeNotSupported {
                    key,
                    kind: field.kind,
                });
            };

            let slot = obj.entry(field.name).or_insert(Value::Null);
            coerce(self, field, slot, &key)?;

            tracing::debug!(
                name = field.name,
                value = %slot,
                cfg = field.tag(&self.settings.tag),
                cfg_default = field.tag(&self.settings.tag_default),
                kind = %field.kind,
                "visited field"
            );
        }

        Ok(())
    }
}
