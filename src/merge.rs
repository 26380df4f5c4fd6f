use serde_json::{Map, Value};

use crate::meta::Meta;
use crate::types::Settings;

/// Overlay a parsed config file onto the target's serialized fields.
///
/// Guided by `meta`: a nested field whose file value is an object is always
/// overlaid field by field, onto an empty object when the target holds none.
/// Otherwise the file's value wins. Disabled fields and keys the metadata
/// doesn't describe are ignored at every depth, so a nested struct the file
/// introduces must deserialize with its disabled fields absent.
pub fn overlay(
    meta: &Meta,
    base: &mut Map<String, Value>,
    mut file: Map<String, Value>,
    settings: &Settings,
) {
    for field in meta.fields {
        if field.tag(&settings.tag) == settings.tag_disabled {
            continue;
        }
        let Some(incoming) = file.remove(field.name) else {
            continue;
        };

        match (field.nested, incoming) {
            (Some(inner), Value::Object(file_obj)) => match base.get_mut(field.name) {
                Some(Value::Object(base_obj)) => overlay(inner, base_obj, file_obj, settings),
                _ => {
                    let mut fresh = Map::new();
                    overlay(inner, &mut fresh, file_obj, settings);
                    base.insert(field.name.to_string(), Value::Object(fresh));
                }
            },
            (_, incoming) => {
                base.insert(field.name.to_string(), incoming);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{HiddenConfig, OptionalConfig, TestConfig};
    use crate::meta::Schema;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("not an object: {other}"),
        }
    }

    fn base() -> Map<String, Value> {
        object(serde_json::to_value(TestConfig::default()).unwrap())
    }

    #[test]
    fn scalar_overlay_wins() {
        let mut b = base();
        overlay(&TestConfig::META, &mut b, object(json!({ "port": 3000 })), &Settings::default());
        assert_eq!(b["port"], json!(3000));
        assert_eq!(b["host"], json!(""));
    }

    #[test]
    fn nested_objects_recurse() {
        let mut b = base();
        b["database"]["url"] = json!("pg://keep");
        overlay(
            &TestConfig::META,
            &mut b,
            object(json!({ "database": { "port": 6000 } })),
            &Settings::default(),
        );
        assert_eq!(b["database"]["url"], json!("pg://keep"));
        assert_eq!(b["database"]["port"], json!(6000));
    }

    #[test]
    fn disabled_field_ignored() {
        let mut b = base();
        b["secret"] = json!("original");
        overlay(
            &TestConfig::META,
            &mut b,
            object(json!({ "secret": "from-file" })),
            &Settings::default(),
        );
        assert_eq!(b["secret"], json!("original"));
    }

    #[test]
    fn unknown_keys_ignored() {
        let mut b = base();
        overlay(
            &TestConfig::META,
            &mut b,
            object(json!({ "typo": 1, "host": "h" })),
            &Settings::default(),
        );
        assert!(!b.contains_key("typo"));
        assert_eq!(b["host"], json!("h"));
    }

    #[test]
    fn scalar_replaces_nested_object() {
        let mut b = base();
        overlay(
            &TestConfig::META,
            &mut b,
            object(json!({ "database": "flat" })),
            &Settings::default(),
        );
        assert_eq!(b["database"], json!("flat"));
    }

    #[test]
    fn empty_file_changes_nothing() {
        let mut b = base();
        let before = b.clone();
        overlay(&TestConfig::META, &mut b, Map::new(), &Settings::default());
        assert_eq!(b, before);
    }

    #[test]
    fn null_nested_slot_still_filters_disabled_fields() {
        let mut b = object(serde_json::to_value(OptionalConfig::default()).unwrap());
        assert_eq!(b["inner"], Value::Null);
        overlay(
            &OptionalConfig::META,
            &mut b,
            object(json!({ "inner": { "port": 1, "label": "from-file", "typo": true } })),
            &Settings::default(),
        );
        assert_eq!(b["inner"], json!({ "port": 1 }));
    }

    #[test]
    fn disabled_nested_struct_ignored() {
        let mut b = object(serde_json::to_value(HiddenConfig::default()).unwrap());
        let before = b.clone();
        overlay(
            &HiddenConfig::META,
            &mut b,
            object(json!({ "x": { "url": "pg://file", "port": 7 } })),
            &Settings::default(),
        );
        assert_eq!(b, before);
    }
}
