use std::path::Path;

use super::{ImageType, Language, MediaId, Season, ServerId};
use crate::utils::is_remote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFile {
    pub image_type: ImageType,
    /// Only used when [`ImageType::is_season_specific`]
    pub season: Season,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleFile {
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaFileKind {
    Image(ImageFile),
    Subtitle(SubtitleFile),
    /// The movie or episode file itself
    Video,
    /// The NFO document generated for the owning media
    Nfo,
}

/// A file that belongs to a [`Media`](super::Media) and gets published to its servers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub description: String,
    /// Local path or remote url of the original, empty for generated files
    pub source: String,
    /// Stem of the published file name
    pub filename: String,
    /// Extension without the dot
    pub extension: String,
    /// Position among files of the same kind, `0` for the first
    pub index: usize,
    pub owner: MediaId,
    pub servers: Vec<ServerId>,
    pub kind: MediaFileKind,
}

impl MediaFile {
    /// Create a new file, the extension is taken from `source` (lowercase)
    pub fn new(owner: MediaId, kind: MediaFileKind, source: impl Into<String>) -> Self {
        let source = source.into();
        let extension = extension_of(&source).unwrap_or_default();
        Self {
            description: String::new(),
            source,
            filename: String::new(),
            extension,
            index: 0,
            owner,
            servers: Vec::new(),
            kind,
        }
    }

    /// The NFO document of a media, written under `stem.nfo`
    pub fn nfo(owner: MediaId, stem: impl Into<String>) -> Self {
        let mut file = Self::new(owner, MediaFileKind::Nfo, String::new());
        file.filename = stem.into();
        file.extension = "nfo".to_string();
        file
    }

    /// Published file name, `filename.extension`.
    ///
    /// Subtitles get their language code in between, `Heat (1995).ger.srt`.
    pub fn file_name(&self) -> String {
        let mut name = self.filename.clone();
        if let MediaFileKind::Subtitle(v) = &self.kind {
            if !v.language.is_undetermined() {
                name.push('.');
                name.push_str(v.language.code());
            }
        }
        if !self.extension.is_empty() {
            name.push('.');
            name.push_str(&self.extension);
        }

        name
    }

    /// Whether the source already is a remote location, which is never copied
    pub fn is_remote(&self) -> bool {
        is_remote(&self.source)
    }

    pub fn image(&self) -> Option<&ImageFile> {
        match &self.kind {
            MediaFileKind::Image(v) => Some(v),
            _ => None,
        }
    }

    /// The season folder this file is nested in, if any
    pub fn season(&self) -> Season {
        match &self.kind {
            MediaFileKind::Image(v) if v.image_type.is_season_specific() => v.season,
            _ => Season::None,
        }
    }

    pub fn language_mut(&mut self) -> Option<&mut Language> {
        match &mut self.kind {
            MediaFileKind::Subtitle(v) => Some(&mut v.language),
            _ => None,
        }
    }
}

/// Extension of a local path or url, ignoring any query string
fn extension_of(source: &str) -> Option<String> {
    let path = source.split(['?', '#']).next().unwrap_or(source);
    // windows separators are not recognized by `Path` on unix
    let name = path.rsplit(['\\', '/']).next().unwrap_or(path);
    Path::new(name)
        .extension()
        .and_then(|v| v.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_take_extension_from_source() {
        let file = MediaFile::new(MediaId::new(1), MediaFileKind::Video, "D:\\Movies\\Heat.MKV");
        assert_eq!(file.extension, "mkv");

        let file = MediaFile::new(
            MediaId::new(1),
            MediaFileKind::Video,
            "http://images.example.org/a/b/backdrop.jpg?size=large",
        );
        assert_eq!(file.extension, "jpg");
        assert!(file.is_remote());

        let file = MediaFile::new(MediaId::new(1), MediaFileKind::Video, "C:\\dir.v2\\noext");
        assert_eq!(file.extension, "");
    }

    #[test]
    fn only_season_art_has_a_season() {
        let mut file = MediaFile::new(
            MediaId::new(1),
            MediaFileKind::Image(ImageFile {
                image_type: ImageType::Backdrop,
                season: Season::Number(2),
            }),
            "C:\\a.jpg",
        );
        assert_eq!(file.season(), Season::None);

        file.kind = MediaFileKind::Image(ImageFile {
            image_type: ImageType::SeasonBackdrop,
            season: Season::Number(2),
        });
        assert_eq!(file.season(), Season::Number(2));
    }

    #[test]
    fn subtitle_file_name_has_language() {
        let mut file = MediaFile::new(
            MediaId::new(1),
            MediaFileKind::Subtitle(SubtitleFile {
                language: Language::German,
            }),
            "D:\\Subs\\heat.de.SRT",
        );
        file.filename = "Heat (1995)".to_string();
        assert_eq!(file.file_name(), "Heat (1995).ger.srt");

        *file.language_mut().unwrap() = Language::Undetermined;
        assert_eq!(file.file_name(), "Heat (1995).srt");
    }

    #[test]
    fn nfo_file_name() {
        let file = MediaFile::nfo(MediaId::new(4), "tvshow");
        assert_eq!(file.file_name(), "tvshow.nfo");
        assert!(!file.is_remote());
    }
}
