//! The config file envelope.
//!
//! Files carry a `version` key; files without one are read as the current layout.

use std::{borrow::Cow, path::Path};

use anyhow::{Context, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use super::Settings;

/// The settings layout the converter works with, every version is converted to it
type CurrentSettings = Settings;

/// A config file, either with a `version` key or without one
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SettingsVersionedDefaulted<'a> {
    Versioned(SettingsVersioned<'a>),
    /// No `version` key, read as [`SettingsVersioned::V1`]
    Unversioned(Settings),
}

// A derived untagged enum would fall back to `Unversioned` for an unknown version
impl<'de> Deserialize<'de> for SettingsVersionedDefaulted<'_> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = toml::Value::deserialize(deserializer)?;
        let has_version = value.get("version").is_some();

        if has_version {
            value
                .try_into::<SettingsVersioned<'_>>()
                .map(Self::Versioned)
                .map_err(|err| D::Error::custom(format!("{err:#}")))
        } else {
            value
                .try_into::<Settings>()
                .map(Self::Unversioned)
                .map_err(|err| D::Error::custom(format!("{err:#}")))
        }
    }
}

impl<'a> SettingsVersionedDefaulted<'a> {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("parsing config \"{}\"", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(Figment::new().merge(Toml::string(content)).extract()?)
    }

    /// Write `config` tagged with the newest version
    pub fn save_file<P: AsRef<Path>>(path: P, config: &'a CurrentSettings) -> Result<()> {
        let data = Self::Versioned(SettingsVersioned::V1(Cow::Borrowed(config)));
        std::fs::write(path, toml::to_string(&data)?)?;

        Ok(())
    }

    pub fn into_settings(self) -> CurrentSettings {
        match self {
            Self::Versioned(versioned) => versioned.into_settings(),
            Self::Unversioned(v) => v,
        }
    }
}

/// Every config layout there has been, keyed by `version`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "version")]
pub enum SettingsVersioned<'a> {
    /// Borrowed when saving
    #[serde(rename = "1")]
    V1(Cow<'a, Settings>),
}

impl SettingsVersioned<'_> {
    pub fn into_settings(self) -> CurrentSettings {
        match self {
            SettingsVersioned::V1(v) => v.into_owned(),
        }
    }
}
