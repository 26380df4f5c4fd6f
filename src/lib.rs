//! Struct-driven configuration for Rust applications. Describe your struct's
//! fields once, and load it from a JSON file, environment variables, and
//! per-field defaults.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! Tagconf::builder().load(&mut config)?;
//! ```
//!
//! That single call reads `./config.json` if it exists, overrides each field
//! from its environment variable (`PORT`, `DB_HOST`, ...), fills anything still
//! empty from the field's `cfgDefault` tag, and writes the result into
//! `config`.
//!
//! # Describing a struct
//!
//! A config struct implements [`Schema`] by listing its fields in a `const`
//! descriptor table. Each [`Field`] names the serialized field, its [`Kind`],
//! and its tags:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Default)]
//! struct AppConfig {
//!     host: String,
//!     port: i64,
//!     token: String,
//!     database: Database,
//! }
//!
//! impl Schema for AppConfig {
//!     const META: Meta = Meta {
//!         name: "AppConfig",
//!         fields: &[
//!             Field::new("host", Kind::String).tags(&[("cfgDefault", "localhost")]),
//!             Field::new("port", Kind::Int).tags(&[("cfg", "http_port"), ("cfgDefault", "8080")]),
//!             Field::new("token", Kind::String).tags(&[("cfg", "-")]),
//!             Field::nested("database", &Database::META).tags(&[("cfg", "db")]),
//!         ],
//!     };
//! }
//! ```
//!
//! - **`cfg`** (the primary tag) overrides the lookup key. Without it the
//!   field name is used. The value `-` disables the field: it is never read
//!   from the file, the environment, or a default.
//! - **`cfgDefault`** is the fallback literal.
//! - **Nested structs** join their key onto their fields' keys with `_`, so
//!   `database.port` above is read from `DB_PORT`.
//!
//! Fields left out of the table are invisible to the loader.
//!
//! # Precedence
//!
//! ```text
//! Default tag           cfgDefault
//!        ↑ overridden by
//! Current value         set in the struct, or read from the config file
//!        ↑ overridden by
//! Environment variable  uppercase(prefix + separator + key)
//! ```
//!
//! An empty environment variable counts as unset. A "current value" counts
//! only when it isn't the zero value for its kind (`""`, `0`, `false`).
//!
//! # Kinds and coercion
//!
//! Each [`Kind`] maps to a coercion function in a [`Registry`]. The built-in
//! set covers `Int` (parsed as base-10 `i64`), `String`, and `Struct`. Any other
//! kind fails with [`ConfigError::TypeNotSupported`] unless you register one:
//!
//! ```ignore
//! Tagconf::builder()
//!     .coercion(Kind::Bool, tagconf::coerce::coerce_bool)
//!     .load(&mut config)?;
//! ```
//!
//! [`coerce`] ships ready-made functions for `Bool`, `Uint`, and `Float`, and a
//! custom [`Coerce`] can replace any built-in entry.
//!
//! # Files
//!
//! The config file is `{path}/{file_name}`, `./config.json` by default. A
//! missing file is skipped unless [`file_required`](TagconfBuilder::file_required)
//! is set. [`save`](TagconfBuilder::save) rewrites an existing file as
//! tab-indented JSON; it refuses to create a new one.
//!
//! # Environment listing
//!
//! [`usage`](TagconfBuilder::usage) renders every variable the struct reads,
//! with its kind and default. The `clap` feature adds [`ConfigArgs`], giving
//! your app `config list|env|save` subcommands.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. The first error at any stage
//! aborts the load and the target is left as it was.

pub mod coerce;
pub mod error;
pub mod meta;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod env;
mod file;
mod merge;
mod ops;
mod tag;
mod usage;
mod walk;

#[cfg(test)]
mod fixtures;

pub use builder::{PostLoad, Tagconf, TagconfBuilder};
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use coerce::{Coerce, Registry};
pub use error::ConfigError;
pub use meta::{Field, Kind, Meta, Schema};
pub use ops::ConfigResult;
pub use types::{ConfigAction, Settings};
pub use walk::Walker;
