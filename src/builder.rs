use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::coerce::{Coerce, Registry};
use crate::error::ConfigError;
use crate::file;
use crate::merge;
use crate::meta::{Kind, Schema};
use crate::ops::{self, ConfigResult};
use crate::types::{ConfigAction, Settings};
use crate::usage;
use crate::walk::Walker;

/// Hook run on the resolved value tree after the walk, before it is written
/// back into the target.
pub type PostLoad = fn(&mut Value) -> Result<(), ConfigError>;

/// Entry point for building a tagconf loader.
pub struct Tagconf;

impl Tagconf {
    pub fn builder() -> TagconfBuilder {
        TagconfBuilder::new()
    }
}

/// Builder holding [`Settings`], coercion overrides, and the post-load hook.
///
/// The same builder can load and save any number of times; it is never
/// mutated by an operation.
pub struct TagconfBuilder {
    settings: Settings,
    coercions: HashMap<Kind, Coerce>,
    post_load: Option<PostLoad>,
}

impl TagconfBuilder {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            coercions: HashMap::new(),
            post_load: None,
        }
    }

    /// Replace all settings at once.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Directory holding the config file (default: `./`).
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = path.into();
        self
    }

    /// Use the platform config directory for `app_name` (XDG on Linux,
    /// `~/Library/Application Support` on macOS).
    ///
    /// Leaves the path unchanged if no home directory can be found.
    pub fn platform_path(mut self, app_name: &str) -> Self {
        match directories::ProjectDirs::from("", "", app_name) {
            Some(proj) => self.settings.path = proj.config_dir().to_path_buf(),
            None => tracing::warn!(app_name, "no platform config directory, keeping path"),
        }
        self
    }

    /// Config file name (default: `config.json`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.settings.file_name = name.to_string();
        self
    }

    /// Fail when the config file is missing (default: `false`).
    pub fn file_required(mut self, required: bool) -> Self {
        self.settings.file_required = required;
        self
    }

    /// Name of the primary tag (default: `cfg`).
    pub fn tag(mut self, name: &str) -> Self {
        self.settings.tag = name.to_string();
        self
    }

    /// Name of the default-value tag (default: `cfgDefault`).
    pub fn tag_default(mut self, name: &str) -> Self {
        self.settings.tag_default = name.to_string();
        self
    }

    /// Primary tag value that disables a field (default: `-`).
    pub fn tag_disabled(mut self, marker: &str) -> Self {
        self.settings.tag_disabled = marker.to_string();
        self
    }

    /// Separator between nested keys (default: `_`).
    pub fn separator(mut self, separator: &str) -> Self {
        self.settings.separator = separator.to_string();
        self
    }

    /// Add or replace the coercion for `kind`. Later calls for the same kind win.
    pub fn coercion(mut self, kind: Kind, coerce: Coerce) -> Self {
        self.coercions.insert(kind, coerce);
        self
    }

    /// Run `hook` on the resolved values before they reach the target.
    pub fn post_load(mut self, hook: PostLoad) -> Self {
        self.post_load = Some(hook);
        self
    }

    pub fn current_settings(&self) -> &Settings {
        &self.settings
    }

    fn registry(&self) -> Registry {
        Registry::with_overrides(&self.coercions)
    }

    /// Populate `target` from the config file, environment, and default tags.
    ///
    /// `target` is only written once every stage has succeeded.
    pub fn load<T>(&self, target: &mut T) -> Result<(), ConfigError>
    where
        T: Schema + Serialize + DeserializeOwned,
    {
        self.load_from(target, std::env::vars())
    }

    /// Like [`load`](Self::load), starting from `T::default()`.
    pub fn load_default<T>(&self) -> Result<T, ConfigError>
    where
        T: Schema + Serialize + DeserializeOwned + Default,
    {
        let mut config = T::default();
        self.load(&mut config)?;
        Ok(config)
    }

    /// Load against explicit environment pairs instead of the process environment.
    pub(crate) fn load_from<T>(
        &self,
        target: &mut T,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), ConfigError>
    where
        T: Schema + Serialize + DeserializeOwned,
    {
        let mut value = serde_json::to_value(&*target).map_err(ConfigError::EncodeError)?;

        let file_path = self.settings.file_path();
        if let Some(file_obj) = file::load_file(&file_path, self.settings.file_required)? {
            let Value::Object(base) = &mut value else {
                return Err(ConfigError::NotAStruct);
            };
            merge::overlay(&T::META, base, file_obj, &self.settings);
        }

        let registry = self.registry();
        Walker::new(&self.settings, &registry, vars).walk(&T::META, &mut value, "")?;

        if let Some(hook) = self.post_load {
            hook(&mut value)?;
        }

        *target = serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            key: T::META.name.into(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Write `target` over the existing config file.
    pub fn save<T: Serialize>(&self, target: &T) -> Result<(), ConfigError> {
        let value = serde_json::to_value(target).map_err(ConfigError::EncodeError)?;
        file::save_file(&self.settings.path, &self.settings.file_path(), &value)
    }

    /// The environment variable listing for `T`.
    pub fn usage<T: Schema>(&self) -> String {
        usage::env_usage(&T::META, &self.settings)
    }

    /// Print [`usage`](Self::usage) to stdout.
    pub fn print_usage<T: Schema>(&self) {
        println!("{}", self.usage::<T>());
    }

    /// Handle a `ConfigAction` and print the result to stdout.
    pub fn handle_and_print<T>(&self, action: &ConfigAction) -> Result<(), ConfigError>
    where
        T: Schema + Serialize + DeserializeOwned + Default,
    {
        let result = self.handle::<T>(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `ConfigAction` (list / usage / save).
    pub fn handle<T>(&self, action: &ConfigAction) -> Result<ConfigResult, ConfigError>
    where
        T: Schema + Serialize + DeserializeOwned + Default,
    {
        match action {
            ConfigAction::Usage => Ok(ConfigResult::Usage(self.usage::<T>())),
            ConfigAction::List => {
                let config: T = self.load_default()?;
                let value = serde_json::to_value(&config).map_err(ConfigError::EncodeError)?;
                Ok(ops::list_values(&T::META, &value, &self.settings))
            }
            ConfigAction::Save => {
                let config: T = self.load_default()?;
                self.save(&config)?;
                Ok(ConfigResult::Saved {
                    path: self.settings.file_path(),
                })
            }
        }
    }
}
