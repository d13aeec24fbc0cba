//! Configuration of a conversion run.
//!
//! [`Settings`] is what the config file holds, [`Configuration`] is the read-only lookup
//! built from it once at startup and handed to every component by reference.

pub mod config_extra;
mod mappings;
mod settings;

use std::path::{Path, PathBuf};

use ahash::HashMap;
use anyhow::Result;

pub use settings::{
    ExportSettings, LibrarySettings, LocalizationSettings, MappingSettings, PathMapping,
    ServerSettings, Settings,
};

use crate::localize::LanguageReplacement;
use crate::model::{
    AspectRatio, ImageType, Language, LibraryCategory, Server, ServerId, ServerList,
    VideoDefinition,
};
use crate::utils::get_app_config_path;
use config_extra::SettingsVersionedDefaulted;

/// The filename of the config
pub const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct Configuration {
    settings: Settings,
    servers: ServerList,
    image_types: HashMap<String, ImageType>,
    definitions: HashMap<String, VideoDefinition>,
    aspect_ratios: HashMap<String, AspectRatio>,
}

/// Build a lookup from the built-in table with the user entries merged over it
fn build_table<T: Copy>(
    defaults: &[(&str, T)],
    extra: &std::collections::BTreeMap<String, T>,
) -> HashMap<String, T> {
    let mut table: HashMap<String, T> = defaults
        .iter()
        .map(|(name, value)| ((*name).to_string(), *value))
        .collect();
    table.extend(extra.iter().map(|(name, value)| (name.clone(), *value)));

    table
}

impl Configuration {
    pub fn new(settings: Settings) -> Self {
        let servers = ServerList::new(settings.servers.iter().map(Server::from_settings).collect());
        if servers.len() != settings.servers.len() {
            warn!("Duplicate server numbers in config, only the first of each is used");
        }

        let image_types = build_table(mappings::IMAGE_TYPES, &settings.mappings.image_types);
        let definitions = build_table(mappings::DEFINITIONS, &settings.mappings.definitions);
        let aspect_ratios = build_table(mappings::ASPECT_RATIOS, &settings.mappings.aspect_ratios);

        Self {
            settings,
            servers,
            image_types,
            definitions,
            aspect_ratios,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn servers(&self) -> &ServerList {
        &self.servers
    }

    pub fn server(&self, id: ServerId) -> Option<&Server> {
        self.servers.get(id)
    }

    /// Servers for media that do not name any; all servers if no default is configured
    pub fn default_servers(&self) -> Vec<ServerId> {
        let defaults = &self.settings.library.default_servers;
        if defaults.is_empty() {
            self.servers.ids().collect()
        } else {
            defaults
                .iter()
                .copied()
                .filter(|v| self.servers.contains(*v))
                .collect()
        }
    }

    /// Image type of an image title, [`ImageType::Unknown`] if not mapped
    pub fn image_type(&self, name: &str) -> ImageType {
        self.image_types.get(name).copied().unwrap_or_default()
    }

    pub fn definition(&self, name: &str) -> Option<VideoDefinition> {
        self.definitions.get(name).copied()
    }

    pub fn aspect_ratio(&self, name: &str) -> Option<AspectRatio> {
        self.aspect_ratios.get(name).copied()
    }

    /// Category folder of the library, localized copies get their own folder
    pub fn category_folder(&self, category: LibraryCategory, localized: Option<&Language>) -> String {
        let folder = match category {
            LibraryCategory::Movies => &self.settings.library.movies_folder,
            LibraryCategory::Series => &self.settings.library.series_folder,
        };
        match localized {
            Some(language) => format!("{folder} ({language})"),
            None => folder.clone(),
        }
    }

    /// The export directory with `~` expanded
    pub fn export_dir(&self) -> PathBuf {
        shellexpand::path::tilde(&self.settings.export.export_dir).into_owned()
    }

    pub fn publish_nfo(&self) -> bool {
        self.settings.export.publish_nfo
    }

    /// Path of the script generated for `server`
    pub fn script_path(&self, server: &Server) -> PathBuf {
        let name = crate::utils::sanitize_folder_name(&server.name);
        let name = if name.is_empty() {
            format!("server{}", server.id)
        } else {
            name
        };

        self.export_dir()
            .join(format!("{name}.{}", self.settings.export.script_extension))
    }

    /// Apply the configured [`PathMapping`]s to a local source path, first match wins
    pub fn map_source(&self, source: &str) -> String {
        for mapping in &self.settings.library.source_mappings {
            if mapping.from.is_empty() {
                continue;
            }
            let matches = source
                .get(..mapping.from.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(&mapping.from));
            if matches {
                return format!("{}{}", mapping.to, &source[mapping.from.len()..]);
            }
        }

        source.to_string()
    }

    /// The configured localization, `None` if it would not produce any copy
    pub fn language_replacement(&self) -> Option<LanguageReplacement> {
        let localization = &self.settings.localization;
        let replacement =
            LanguageReplacement::new(localization.replace.clone(), localization.targets.clone());

        (!replacement.is_empty()).then_some(replacement)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_app_config_path()?.join(FILE_NAME))
}

/// Load the settings from `path`, or from the default location if `None`.
///
/// An explicitly given file has to exist, a missing default file results in the default settings.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(v) => v.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                info!(
                    "No config at \"{}\", using default settings",
                    path.display()
                );
                return Ok(Settings::default());
            }
            path
        }
    };

    if !path.exists() {
        anyhow::bail!("config file \"{}\" does not exist", path.display());
    }
    info!("Loading config from \"{}\"", path.display());

    Ok(SettingsVersionedDefaulted::from_file(&path)?.into_settings())
}
