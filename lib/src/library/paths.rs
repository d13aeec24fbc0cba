use std::path::{Path, PathBuf};

use crate::config::Configuration;
use crate::model::{Media, MediaFile, MediaKind, Server};
use crate::utils::sanitize_folder_name;

/// A location inside the library, relative to a server's (or the export's) root.
///
/// Kept as segments so that every consumer can join them its own way: `\` for device paths
/// before style conversion, `/` for published urls, the OS separator for the local export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryPath {
    segments: Vec<String>,
}

impl LibraryPath {
    /// The folder a media is published in.
    ///
    /// `<category>\<media folder>`, episodes go to `<category>\<series folder>\Season <n>`
    /// and directly into the series folder if they have no season.
    pub fn for_media(config: &Configuration, media: &Media) -> Self {
        let category = config.category_folder(media.category(), media.localized.as_ref());
        let mut path = Self::default().join(category);
        match &media.kind {
            MediaKind::Episode(episode) => {
                path = path.join(sanitize_folder_name(&episode.series_title));
                if let Some(season) = episode.season.folder_name() {
                    path = path.join(season);
                }
            }
            MediaKind::Movie(_) | MediaKind::Series(_) => path = path.join(media.folder_name()),
        }

        path
    }

    /// Where `file` of `media` is published, season art gets its own season folder
    pub fn for_file(config: &Configuration, media: &Media, file: &MediaFile) -> Self {
        let mut path = Self::for_media(config, media);
        if !matches!(media.kind, MediaKind::Episode(_)) {
            if let Some(season) = file.season().folder_name() {
                path = path.join(season);
            }
        }

        path.join(file.file_name())
    }

    #[must_use]
    pub fn join(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `\` separated, the way the catalog spells paths
    pub fn relative(&self) -> String {
        self.segments.join("\\")
    }

    /// Full path on `server`'s device, in the server's style
    pub fn device_path(&self, server: &Server) -> String {
        server.device_path_for(&self.relative())
    }

    /// The url the media center reads this path from
    pub fn library_url(&self, server: &Server) -> String {
        server.library_url(&self.relative())
    }

    /// Path of this location below a local directory
    pub fn local(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(&self.segments);
        path
    }
}
