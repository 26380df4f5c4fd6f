use crate::meta::Field;
use crate::types::Settings;

/// Compute the effective lookup key for `field` under `prefix`.
///
/// Returns `""` when the primary tag is the disable marker. An empty tag falls
/// back to the field name. A non-empty prefix is joined with the separator.
/// Case is preserved here; the environment lookup uppercases.
pub fn resolve_key(field: &Field, prefix: &str, settings: &Settings) -> String {
    let tag = field.tag(&settings.tag);
    if tag == settings.tag_disabled {
        return String::new();
    }

    let key = if tag.is_empty() { field.name } else { tag };

    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{}{key}", settings.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::Kind;

    #[test]
    fn untagged_uses_field_name() {
        let field = Field::new("port", Kind::Int);
        assert_eq!(resolve_key(&field, "", &Settings::default()), "port");
    }

    #[test]
    fn tag_overrides_name() {
        let field = Field::new("port", Kind::Int).tags(&[("cfg", "HttpPort")]);
        assert_eq!(resolve_key(&field, "", &Settings::default()), "HttpPort");
    }

    #[test]
    fn disabled_is_empty() {
        let field = Field::new("secret", Kind::String).tags(&[("cfg", "-")]);
        assert_eq!(resolve_key(&field, "outer", &Settings::default()), "");
    }

    #[test]
    fn prefix_joined_with_separator() {
        let field = Field::new("port", Kind::Int);
        assert_eq!(resolve_key(&field, "db", &Settings::default()), "db_port");
    }

    #[test]
    fn custom_separator_and_tag_names() {
        let settings = Settings {
            tag: "env".into(),
            tag_disabled: "skip".into(),
            separator: "__".into(),
            ..Settings::default()
        };
        let field = Field::new("port", Kind::Int).tags(&[("env", "p"), ("cfg", "ignored")]);
        assert_eq!(resolve_key(&field, "db", &settings), "db__p");

        let skipped = Field::new("port", Kind::Int).tags(&[("env", "skip")]);
        assert_eq!(resolve_key(&skipped, "", &settings), "");
    }

    #[test]
    fn dash_is_not_special_under_custom_marker() {
        let settings = Settings {
            tag_disabled: "off".into(),
            ..Settings::default()
        };
        let field = Field::new("port", Kind::Int).tags(&[("cfg", "-")]);
        assert_eq!(resolve_key(&field, "", &settings), "-");
    }
}
