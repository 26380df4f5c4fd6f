//! Human-readable listing of every environment variable a config type reads.

use crate::meta::{Kind, Meta};
use crate::tag;
use crate::types::Settings;

/// List every recognized environment variable, its kind, and its default.
///
/// ```text
/// Environment variables:
///   $HOST string
/// 	 (default "localhost")
///   $NAME string
///
/// ```
///
/// Nested structs contribute their leaves; disabled fields are left out. A
/// struct field without nested metadata is listed as a single `struct` entry,
/// since loading it fails rather than reading anything.
pub fn env_usage(meta: &Meta, settings: &Settings) -> String {
    let mut out = String::from("Environment variables:\n");
    collect(meta, "", settings, &mut out);
    out
}

fn collect(meta: &Meta, prefix: &str, settings: &Settings, out: &mut String) {
    for field in meta.fields {
        let key = tag::resolve_key(field, prefix, settings);
        if key.is_empty() {
            continue;
        }

        if let (Kind::Struct, Some(inner)) = (field.kind, field.nested) {
            collect(inner, &key, settings, out);
            continue;
        }

        out.push_str("  ");
        out.push_str(&env_ref(&key.to_uppercase()));
        out.push(' ');
        out.push_str(field.kind.as_str());

        let default = field.tag(&settings.tag_default);
        if default.is_empty() {
            out.push_str("\n\n");
        } else {
            out.push_str(&format!("\n\t (default \"{default}\")\n"));
        }
    }
}

#[cfg(windows)]
fn env_ref(name: &str) -> String {
    format!("%{name}%")
}

#[cfg(not(windows))]
fn env_ref(name: &str) -> String {
    format!("${name}")
}
