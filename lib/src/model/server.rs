use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::config::ServerSettings;

/// Handle of a configured [`Server`], the number the catalog uses to assign media to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ServerId(u32);

impl ServerId {
    #[inline]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How paths on a server are spelled when the generated script runs there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `Z:\Media\Movies\...`
    #[default]
    Windows,
    /// `/mnt/media/Movies/...`, every backslash becomes a forward slash
    Unix,
}

/// A destination host of the library
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    /// Root the media center reads the library from, used for `<thumb>` paths
    pub published_name: String,
    pub drive_letter: Option<char>,
    pub device_path: String,
    pub style: PathStyle,
}

impl Server {
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            id: settings.number,
            name: settings.name.clone(),
            published_name: settings.published_name.clone(),
            drive_letter: settings.drive_letter,
            device_path: settings.device_path.clone(),
            style: settings.style,
        }
    }

    /// Root of the library as seen by the script, before style conversion
    fn device_root(&self) -> String {
        let path = self.device_path.trim_end_matches(['\\', '/']);
        match (self.style, self.drive_letter) {
            (PathStyle::Windows, Some(letter)) => {
                if path.is_empty() || path.starts_with('\\') {
                    format!("{letter}:{path}")
                } else {
                    format!("{letter}:\\{path}")
                }
            }
            _ => path.to_string(),
        }
    }

    /// Full device path of `relative` (a `\` separated library path) on this server
    pub fn device_path_for(&self, relative: &str) -> String {
        let root = self.device_root();
        let relative = relative.trim_start_matches(['\\', '/']);
        let joined = if root.is_empty() {
            relative.to_string()
        } else {
            format!("{root}\\{relative}")
        };

        self.apply_style(&joined)
    }

    /// Convert any path to this server's [`PathStyle`]
    pub fn apply_style(&self, path: &str) -> String {
        match self.style {
            PathStyle::Windows => path.to_string(),
            PathStyle::Unix => path.replace('\\', "/"),
        }
    }

    /// The published location of `relative`, always `/` separated
    pub fn library_url(&self, relative: &str) -> String {
        let root = self.published_name.trim_end_matches(['\\', '/']);
        let relative = relative.trim_start_matches(['\\', '/']).replace('\\', "/");
        if root.is_empty() {
            relative
        } else {
            format!("{root}/{relative}")
        }
    }
}

/// All configured servers, ordered by number
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerList(Vec<Server>);

impl ServerList {
    pub fn new(mut servers: Vec<Server>) -> Self {
        servers.sort_by_key(|v| v.id);
        servers.dedup_by_key(|v| v.id);
        Self(servers)
    }

    pub fn get(&self, id: ServerId) -> Option<&Server> {
        self.0
            .binary_search_by_key(&id, |v| v.id)
            .ok()
            .map(|idx| &self.0[idx])
    }

    pub fn contains(&self, id: ServerId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Server> {
        self.0.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = ServerId> + '_ {
        self.0.iter().map(|v| v.id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
