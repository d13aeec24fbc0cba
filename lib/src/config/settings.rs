use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::{AspectRatio, ImageType, Language, PathStyle, ServerId, VideoDefinition};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct Settings {
    pub export: ExportSettings,
    pub library: LibrarySettings,
    pub servers: Vec<ServerSettings>,
    pub localization: LocalizationSettings,
    pub mappings: MappingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct ExportSettings {
    /// Local directory the NFO documents and scripts are written to
    pub export_dir: PathBuf,
    /// Also copy the generated NFO documents to the servers
    pub publish_nfo: bool,
    /// Extension of the generated per-server scripts
    pub script_extension: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            publish_nfo: true,
            script_extension: "sh".to_string(),
        }
    }
}

/// Get the default export dir, which uses OS-specific paths, or home/collectorz-export
fn default_export_dir() -> PathBuf {
    dirs::document_dir().map_or_else(
        || PathBuf::from(shellexpand::tilde("~/collectorz-export").as_ref()),
        |mut v| {
            v.push("collectorz-export");
            v
        },
    )
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct LibrarySettings {
    /// Category folder for movies
    pub movies_folder: String,
    /// Category folder for series and their episodes
    pub series_folder: String,
    /// Servers used for media that do not name any
    pub default_servers: Vec<ServerId>,
    /// Prefix replacements applied to local source paths before they are written into scripts
    pub source_mappings: Vec<PathMapping>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            movies_folder: "Movies".to_string(),
            series_folder: "TV Shows".to_string(),
            default_servers: Vec::new(),
            source_mappings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathMapping {
    /// Prefix as it appears in the catalog, matched case-insensitively
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct ServerSettings {
    pub number: ServerId,
    pub name: String,
    /// Library root as the media center sees it, like `smb://nas/media`
    pub published_name: String,
    pub drive_letter: Option<char>,
    pub device_path: String,
    pub style: PathStyle,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            number: ServerId::new(1),
            name: "server1".to_string(),
            published_name: String::new(),
            drive_letter: None,
            device_path: String::new(),
            style: PathStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct LocalizationSettings {
    /// Languages that get replaced in a localized copy
    pub replace: Vec<Language>,
    /// One localized copy is created per target language
    pub targets: Vec<Language>,
}

/// Extra display-name mappings, merged over the built-in tables
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct MappingSettings {
    pub image_types: BTreeMap<String, ImageType>,
    pub definitions: BTreeMap<String, VideoDefinition>,
    pub aspect_ratios: BTreeMap<String, AspectRatio>,
}
