use std::path::PathBuf;

/// Loader settings: where the file lives and how fields are tagged.
///
/// Owned by the builder and handed to every operation. Start from
/// [`Settings::default()`] and change what you need.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory holding the config file.
    pub path: PathBuf,
    /// Config file name, joined onto `path`.
    pub file_name: String,
    /// Fail when the config file is missing.
    pub file_required: bool,
    /// Primary tag: overrides the lookup key, or disables the field.
    pub tag: String,
    /// Tag holding the fallback literal.
    pub tag_default: String,
    /// Primary tag value that skips a field entirely.
    pub tag_disabled: String,
    /// Joins an enclosing struct's key onto a nested field's key.
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./"),
            file_name: "config.json".into(),
            file_required: false,
            tag: "cfg".into(),
            tag_default: "cfgDefault".into(),
            tag_disabled: "-".into(),
            separator: "_".into(),
        }
    }
}

impl Settings {
    /// Full path of the config file.
    pub fn file_path(&self) -> PathBuf {
        self.path.join(&self.file_name)
    }
}

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Resolved values keyed by environment variable name.
    List,
    /// Every recognized environment variable with its default.
    Usage,
    /// Load, then write the resolved values back to the existing file.
    Save,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.path, PathBuf::from("./"));
        assert_eq!(s.file_name, "config.json");
        assert!(!s.file_required);
        assert_eq!(s.tag, "cfg");
        assert_eq!(s.tag_default, "cfgDefault");
        assert_eq!(s.tag_disabled, "-");
        assert_eq!(s.separator, "_");
    }

    #[test]
    fn file_path_joins_dir_and_name() {
        let s = Settings {
            path: "/etc/myapp".into(),
            ..Settings::default()
        };
        assert_eq!(s.file_path(), PathBuf::from("/etc/myapp/config.json"));
    }
}
