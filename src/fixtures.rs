#[cfg(test)]
pub mod test {
    use serde::{Deserialize, Serialize};

    use crate::meta::{Field, Kind, Meta, Schema};

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct TestConfig {
        pub host: String,
        pub port: i64,
        pub name: String,
        pub secret: String,
        pub database: DbConfig,
    }

    impl Schema for TestConfig {
        const META: Meta = Meta {
            name: "TestConfig",
            fields: &[
                Field::new("host", Kind::String).tags(&[("cfgDefault", "localhost")]),
                Field::new("port", Kind::Int).tags(&[("cfgDefault", "8080")]),
                Field::new("name", Kind::String),
                Field::new("secret", Kind::String).tags(&[("cfg", "-"), ("cfgDefault", "nope")]),
                Field::nested("database", &DbConfig::META).tags(&[("cfg", "db")]),
            ],
        };
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct DbConfig {
        pub url: String,
        pub port: i64,
    }

    impl Schema for DbConfig {
        const META: Meta = Meta {
            name: "DbConfig",
            fields: &[
                Field::new("url", Kind::String),
                Field::new("port", Kind::Int).tags(&[("cfg", "port"), ("cfgDefault", "5432")]),
            ],
        };
    }

    // -- Fixture for unsupported-kind tests -------------------------------------

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct ListConfig {
        pub before: String,
        pub tags: Vec<String>,
        pub after: String,
    }

    impl Schema for ListConfig {
        const META: Meta = Meta {
            name: "ListConfig",
            fields: &[
                Field::new("before", Kind::String).tags(&[("cfgDefault", "before-default")]),
                Field::new("tags", Kind::Seq),
                Field::new("after", Kind::String).tags(&[("cfgDefault", "after-default")]),
            ],
        };
    }

    // -- Fixtures for disabled and optional nested structs ----------------------

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct HiddenConfig {
        pub name: String,
        pub x: DbConfig,
    }

    impl Schema for HiddenConfig {
        const META: Meta = Meta {
            name: "HiddenConfig",
            fields: &[
                Field::new("name", Kind::String),
                Field::nested("x", &DbConfig::META).tags(&[("cfg", "-")]),
            ],
        };
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    pub struct OptionalConfig {
        pub inner: Option<LabelConfig>,
    }

    impl Schema for OptionalConfig {
        const META: Meta = Meta {
            name: "OptionalConfig",
            fields: &[Field::nested("inner", &LabelConfig::META)],
        };
    }

    #[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
    #[serde(default)]
    pub struct LabelConfig {
        pub port: i64,
        pub label: String,
    }

    impl Schema for LabelConfig {
        const META: Meta = Meta {
            name: "LabelConfig",
            fields: &[
                Field::new("port", Kind::Int),
                Field::new("label", Kind::String).tags(&[("cfg", "-")]),
            ],
        };
    }

    #[test]
    fn test_config_meta_matches_serialized_fields() {
        let value = serde_json::to_value(TestConfig::default()).unwrap();
        let obj = value.as_object().unwrap();
        for field in TestConfig::META.fields {
            assert!(obj.contains_key(field.name), "missing {}", field.name);
        }
    }
}
