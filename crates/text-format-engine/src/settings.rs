use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User preferences read by the transforms
///
/// Missing fields deserialize to their defaults, so a partial settings file
/// merges over [`Settings::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Lowercase the text before capitalize/title case commands
    pub lowercase_first: bool,
    /// Collapse runs of blank lines to a single blank line after merging
    pub merge_remove_extra_newlines: bool,
    /// Collapse runs of spaces to a single space after merging
    pub merge_remove_extra_spaces: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lowercase_first: false,
            merge_remove_extra_newlines: true,
            merge_remove_extra_spaces: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown setting '{0}'")]
pub struct UnknownSetting(pub String);

impl Settings {
    /// Setting keys accepted by [`Settings::set`] and [`Settings::get`]
    pub const KEYS: [&'static str; 3] = [
        "lowercase-first",
        "merge-remove-extra-newlines",
        "merge-remove-extra-spaces",
    ];

    pub fn get(&self, key: &str) -> Result<bool, UnknownSetting> {
        match key {
            "lowercase-first" => Ok(self.lowercase_first),
            "merge-remove-extra-newlines" => Ok(self.merge_remove_extra_newlines),
            "merge-remove-extra-spaces" => Ok(self.merge_remove_extra_spaces),
            other => Err(UnknownSetting(other.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: bool) -> Result<(), UnknownSetting> {
        let slot = match key {
            "lowercase-first" => &mut self.lowercase_first,
            "merge-remove-extra-newlines" => &mut self.merge_remove_extra_newlines,
            "merge-remove-extra-spaces" => &mut self.merge_remove_extra_spaces,
            other => return Err(UnknownSetting(other.to_string())),
        };
        *slot = value;
        log::info!("setting {key} = {value}");
        Ok(())
    }
}
