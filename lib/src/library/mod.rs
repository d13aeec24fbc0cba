//! Render media into the library: NFO documents and per-server copy commands.
//!
//! Every entity that ends up in the library implements [`LibraryItem`]. A [`Media`] writes its
//! NFO header and then lets its persons, streams and files write themselves, in the order the
//! media center expects. Files that have to be copied queue [`CopyCommand`]s, which the
//! exporter later merges into one [`ShellScript`] per server.

mod file;
mod media;
mod nfo;
mod paths;
mod person;
mod shell;
mod stream;

use std::path::PathBuf;

pub use nfo::NfoWriter;
pub use paths::LibraryPath;
pub use shell::{ShellScript, ShellScripts, SHEBANG};

use crate::config::Configuration;
use crate::model::{Media, MediaFile, ServerId};

/// Copy one file to a server, both paths already in the server's style
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyCommand {
    pub server: ServerId,
    pub source: String,
    pub destination: String,
}

/// A rendered NFO document and where it goes in the export directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfoDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Everything a media (including its episodes) contributes to the library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryOutput {
    pub documents: Vec<NfoDocument>,
    pub copies: Vec<CopyCommand>,
}

/// What a [`LibraryItem`] is rendered for
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a Configuration,
    /// The media whose document is being written
    pub media: &'a Media,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Configuration, media: &'a Media) -> Self {
        Self { config, media }
    }

    pub fn file_path(&self, file: &MediaFile) -> LibraryPath {
        LibraryPath::for_file(self.config, self.media, file)
    }

    /// Location of a generated file in the local export directory
    pub fn export_path(&self, file: &MediaFile) -> PathBuf {
        self.file_path(file).local(&self.config.export_dir())
    }

    /// Copy commands for a local `source` to `path` on each of `servers`.
    ///
    /// Remote sources are never copied; unknown servers are skipped.
    pub fn copies(&self, source: &str, path: &LibraryPath, servers: &[ServerId]) -> Vec<CopyCommand> {
        if source.is_empty() || crate::utils::is_remote(source) {
            return Vec::new();
        }
        let source = self.config.map_source(source);

        servers
            .iter()
            .filter_map(|id| {
                let server = self.config.server(*id);
                if server.is_none() {
                    debug!("Server {id} of {} is not configured", self.media.id);
                }
                server
            })
            .map(|server| CopyCommand {
                server: server.id,
                source: server.apply_style(&source),
                destination: path.device_path(server),
            })
            .collect()
    }
}

/// An entity that is published to the library
pub trait LibraryItem {
    /// Write the NFO tags of this item into `nfo` and queue its copies into `out`
    fn write_to_library(&self, ctx: &RenderContext<'_>, nfo: &mut NfoWriter, out: &mut LibraryOutput);

    /// Remove this item from the library again; nothing is ever removed currently
    fn delete_from_library(&self, _ctx: &RenderContext<'_>, _out: &mut LibraryOutput) {}
}

/// Render a media and, for a series, all of its episodes
pub fn render_media(media: &Media, config: &Configuration) -> LibraryOutput {
    let mut out = LibraryOutput::default();
    render_into(media, config, &mut out);
    out
}

fn render_into(media: &Media, config: &Configuration, out: &mut LibraryOutput) {
    let ctx = RenderContext::new(config, media);
    let mut nfo = NfoWriter::new(media.nfo_root());
    media.write_to_library(&ctx, &mut nfo, out);

    let path = match media.nfo_file() {
        Some(file) => ctx.export_path(file),
        None => ctx.export_path(&MediaFile::nfo(media.id, media.nfo_stem())),
    };
    out.documents.push(NfoDocument {
        path,
        content: nfo.finish(),
    });

    for episode in media.episodes() {
        render_into(episode, config, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ServerSettings, Settings};
    use crate::model::{
        AudioStream, ImageFile, ImageType, Language, MediaFileKind, MediaId, MediaKind,
        MediaStream, Movie, PathStyle, Season, StreamKind, SubtitleFile, SubtitleStream,
    };
    use pretty_assertions::assert_eq;

    fn config(style: PathStyle, publish_nfo: bool) -> Configuration {
        let mut settings = Settings::default();
        settings.export.export_dir = PathBuf::from("/export");
        settings.export.publish_nfo = publish_nfo;
        settings.servers = vec![ServerSettings {
            number: ServerId::new(1),
            name: "nas".to_string(),
            published_name: "smb://nas/media".to_string(),
            drive_letter: Some('Z'),
            device_path: "\\Library".to_string(),
            style,
        }];
        Configuration::new(settings)
    }

    /// One movie with one local backdrop, an english audio track and a german subtitle
    fn sample() -> Media {
        let id = MediaId::new(1);
        let mut media = Media::new(id, MediaKind::Movie(Movie::default()));
        media.title = "Heat".to_string();
        media.year = 1995;
        media.servers = vec![ServerId::new(1)];

        let mut backdrop = MediaFile::new(
            id,
            MediaFileKind::Image(ImageFile {
                image_type: ImageType::Backdrop,
                season: Season::None,
            }),
            "C:\\Collectorz\\Images\\heat.jpg",
        );
        backdrop.filename = "fanart".to_string();
        backdrop.servers = vec![ServerId::new(1)];
        media.files.push(backdrop);
        media.streams.push(MediaStream::new(
            id,
            StreamKind::Audio(AudioStream {
                language: Language::English,
                ..Default::default()
            }),
        ));
        media.streams.push(MediaStream::new(
            id,
            StreamKind::Subtitle(SubtitleStream {
                language: Language::German,
            }),
        ));
        let mut nfo = MediaFile::nfo(id, media.nfo_stem());
        nfo.servers = vec![ServerId::new(1)];
        media.files.push(nfo);
        media
    }

    #[test]
    fn sample_movie_renders_one_thumb_and_one_copy() {
        let out = render_media(&sample(), &config(PathStyle::Windows, false));

        assert_eq!(out.documents.len(), 1);
        let document = &out.documents[0];
        assert_eq!(
            document.path,
            PathBuf::from("/export/Movies/Heat (1995)/Heat (1995).nfo")
        );
        let thumbs: Vec<&str> = document
            .content
            .lines()
            .filter(|v| v.contains("<thumb"))
            .collect();
        assert_eq!(
            thumbs,
            ["    <thumb>smb://nas/media/Movies/Heat (1995)/fanart.jpg</thumb>"]
        );
        assert!(document.content.contains("<language>ger</language>"));

        assert_eq!(
            out.copies,
            [CopyCommand {
                server: ServerId::new(1),
                source: "C:\\Collectorz\\Images\\heat.jpg".to_string(),
                destination: "Z:\\Library\\Movies\\Heat (1995)\\fanart.jpg".to_string(),
            }]
        );

        let mut scripts = ShellScripts::default();
        scripts.merge(&out.copies);
        let script = scripts.get(ServerId::new(1)).unwrap().render();
        assert_eq!(script.lines().filter(|v| v.starts_with("/bin/cp ")).count(), 1);
    }

    #[test]
    fn subtitle_files_are_only_copied() {
        let mut media = sample();
        let mut subtitle = MediaFile::new(
            media.id,
            MediaFileKind::Subtitle(SubtitleFile {
                language: Language::German,
            }),
            "D:\\Movies\\Heat.srt",
        );
        subtitle.filename = "Heat (1995)".to_string();
        subtitle.servers = vec![ServerId::new(1)];
        media.files.push(subtitle);

        let out = render_media(&media, &config(PathStyle::Unix, false));
        assert!(!out.documents[0].content.contains("Heat.srt"));
        assert!(!out.documents[0].content.contains(".ger.srt"));
        assert_eq!(out.copies.len(), 2);
        assert_eq!(
            out.copies[1].destination,
            "/Library/Movies/Heat (1995)/Heat (1995).ger.srt"
        );
        assert_eq!(out.copies[1].source, "D:/Movies/Heat.srt");
    }

    #[test]
    fn unix_servers_get_no_backslashes() {
        let mut media = sample();
        media.files[0].kind = MediaFileKind::Image(ImageFile {
            image_type: ImageType::SeasonBackdrop,
            season: Season::Number(3),
        });
        let out = render_media(&media, &config(PathStyle::Unix, true));

        assert_eq!(out.copies.len(), 2);
        for copy in &out.copies {
            assert!(!copy.destination.contains('\\'), "{}", copy.destination);
            assert!(!copy.source.contains('\\'), "{}", copy.source);
        }
        assert_eq!(
            out.copies[0].destination,
            "/Library/Movies/Heat (1995)/Season 3/fanart.jpg"
        );
        assert_eq!(
            out.copies[1].destination,
            "/Library/Movies/Heat (1995)/Heat (1995).nfo"
        );
    }

    #[test]
    fn remote_images_are_not_copied() {
        let mut media = sample();
        media.files[0].source = "https://img.example.org/heat.jpg".to_string();
        let out = render_media(&media, &config(PathStyle::Windows, false));

        assert!(out.copies.is_empty());
        assert!(out.documents[0]
            .content
            .contains("<thumb>https://img.example.org/heat.jpg</thumb>"));
    }

    #[test]
    fn delete_is_a_no_op() {
        let media = sample();
        let config = config(PathStyle::Windows, true);
        let ctx = RenderContext::new(&config, &media);
        let mut out = LibraryOutput::default();
        media.delete_from_library(&ctx, &mut out);
        for file in &media.files {
            file.delete_from_library(&ctx, &mut out);
        }
        assert_eq!(out, LibraryOutput::default());
    }
}
