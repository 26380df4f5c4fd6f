//! Static field metadata: the descriptor table the walker traverses.
//!
//! A configurable struct implements [`Schema`] by listing its fields once, in
//! a `const`. Each [`Field`] carries the serialized name (the JSON key), its
//! [`Kind`], and its tags as `(name, value)` pairs. Tag names are not fixed:
//! the walker asks for whatever names [`Settings`](crate::types::Settings)
//! configures (`cfg` and `cfgDefault` by default).
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Default)]
//! struct Server {
//!     host: String,
//!     port: i64,
//!     db: Database,
//! }
//!
//! impl Schema for Server {
//!     const META: Meta = Meta {
//!         name: "Server",
//!         fields: &[
//!             Field::new("host", Kind::String).tags(&[("cfgDefault", "localhost")]),
//!             Field::new("port", Kind::Int).tags(&[("cfgDefault", "8080")]),
//!             Field::nested("db", &Database::META).tags(&[("cfg", "db")]),
//!         ],
//!     };
//! }
//! ```
//!
//! Private fields that should not be configurable are simply left out of
//! `fields`.

use std::fmt;

/// A struct whose fields the loader can walk.
pub trait Schema {
    const META: Meta;
}

/// Descriptor table for one struct type.
#[derive(Debug, Clone, Copy)]
pub struct Meta {
    pub name: &'static str,
    pub fields: &'static [Field],
}

/// Descriptor for a single field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Serialized name; also the JSON key in the config file.
    pub name: &'static str,
    pub kind: Kind,
    pub tags: &'static [(&'static str, &'static str)],
    /// Set for [`Kind::Struct`] fields.
    pub nested: Option<&'static Meta>,
}

impl Field {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            tags: &[],
            nested: None,
        }
    }

    pub const fn nested(name: &'static str, meta: &'static Meta) -> Self {
        Self {
            name,
            kind: Kind::Struct,
            tags: &[],
            nested: Some(meta),
        }
    }

    pub const fn tags(mut self, tags: &'static [(&'static str, &'static str)]) -> Self {
        self.tags = tags;
        self
    }

    /// Value of the tag called `name`, or `""` when the field doesn't carry it.
    pub fn tag(&self, name: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
            .unwrap_or("")
    }
}

/// Closed set of field kinds the registry dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Struct,
    Seq,
    Map,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Struct => "struct",
            Kind::Seq => "seq",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{DbConfig, TestConfig};

    #[test]
    fn tag_lookup_is_case_preserving() {
        let field = Field::new("name", Kind::String).tags(&[("cfg", "AppName")]);
        assert_eq!(field.tag("cfg"), "AppName");
    }

    #[test]
    fn missing_tag_is_empty() {
        let field = Field::new("name", Kind::String);
        assert_eq!(field.tag("cfg"), "");
        assert_eq!(field.tag("cfgDefault"), "");
    }

    #[test]
    fn nested_field_points_at_inner_meta() {
        let db = TestConfig::META
            .fields
            .iter()
            .find(|f| f.name == "database")
            .unwrap();
        assert_eq!(db.kind, Kind::Struct);
        assert_eq!(db.nested.unwrap().name, DbConfig::META.name);
    }

    #[test]
    fn kind_display() {
        assert_eq!(Kind::Int.to_string(), "int");
        assert_eq!(Kind::String.to_string(), "string");
    }
}
