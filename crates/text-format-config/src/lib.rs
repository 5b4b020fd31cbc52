use std::path::{Path, PathBuf};
use text_format_engine::Settings;
use thiserror::Error;

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_VAR: &str = "TEXT_FORMAT_SETTINGS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file at {settings_path}: {source}")]
    SettingsReadError {
        settings_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {settings_path}: {source}")]
    SettingsParseError {
        settings_path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    UnknownSetting(#[from] text_format_engine::UnknownSetting),
}

/// Loads and persists [`Settings`] as a TOML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`SettingsStore::settings_path`]
    pub fn from_env() -> Self {
        Self::new(Self::settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persisted values merged over the defaults
    ///
    /// A missing file yields [`Settings::default`]; keys absent from the file
    /// keep their default values.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|source| ConfigError::SettingsReadError {
                settings_path: self.path.clone(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| ConfigError::SettingsParseError {
            settings_path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }

    /// Change one setting and persist the result immediately
    pub fn update(&self, key: &str, value: bool) -> anyhow::Result<Settings> {
        let mut settings = self.load()?;
        settings.set(key, value).map_err(ConfigError::from)?;
        self.save(&settings)?;
        Ok(settings)
    }

    /// `$TEXT_FORMAT_SETTINGS` when set, else `~/.config/text-format/settings.toml`
    pub fn settings_path() -> PathBuf {
        if let Ok(custom) = std::env::var(SETTINGS_PATH_VAR) {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/text-format");
        PathBuf::from(config_dir.as_ref()).join("settings.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
