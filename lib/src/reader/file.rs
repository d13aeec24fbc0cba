use super::{list_items, FromXml, ReadContext};
use crate::model::{
    override_season, ImageFile, ImageType, Language, MediaFile, MediaFileKind, Season,
    SubtitleFile,
};
use crate::xml::XmlNode;

/// Extensions of links that are subtitle files, whatever their `urltype`
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "sub", "ssa", "ass", "idx", "vtt"];

/// Artwork stored directly on the movie node, in the order it is published
const IMAGE_NODES: &[(&str, ImageType)] = &[
    ("coverfront", ImageType::Cover),
    ("poster", ImageType::Poster),
    ("backdropurl", ImageType::Backdrop),
];

/// Read a `links/link` node into an image, subtitle or video file
impl FromXml for MediaFile {
    fn read_from_xml(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Option<Self> {
        let url = node.child_text("url").trim();
        if url.is_empty() {
            return None;
        }
        let description = node.child_text("description").trim();

        let mut file = MediaFile::new(ctx.owner, MediaFileKind::Video, url);
        file.kind = match node.child_text("urltype") {
            "Image" => {
                let (title, season) = override_season(description);
                let image_type = ctx.config.image_type(&title);
                if image_type == ImageType::Unknown {
                    debug!("Skipping image \"{description}\" of unknown type");
                    return None;
                }
                MediaFileKind::Image(ImageFile { image_type, season })
            }
            _ if SUBTITLE_EXTENSIONS.contains(&file.extension.as_str()) => {
                MediaFileKind::Subtitle(SubtitleFile {
                    language: Language::from_name(description),
                })
            }
            "Movie" => MediaFileKind::Video,
            other => {
                trace!("Skipping link \"{url}\" of type \"{other}\"");
                return None;
            }
        };
        file.description = description.to_string();
        file.servers.clone_from(&ctx.servers);

        Some(file)
    }
}

/// Read all files of a movie or series node and name them after `stem`
pub(super) fn read_files(node: &XmlNode, ctx: &mut ReadContext<'_>, stem: &str) -> Vec<MediaFile> {
    let mut files: Vec<MediaFile> = IMAGE_NODES
        .iter()
        .filter_map(|(name, image_type)| {
            let source = node.child_text(name).trim();
            (!source.is_empty()).then(|| {
                image(ctx, *image_type, source, (*name).to_string())
            })
        })
        .collect();
    files.extend(
        list_items(node, "links", "link").filter_map(|v| MediaFile::read_from_xml(v, ctx)),
    );

    name_files(&mut files, stem);
    files
}

/// A new image of the current media
pub(super) fn image(
    ctx: &ReadContext<'_>,
    image_type: ImageType,
    source: &str,
    description: String,
) -> MediaFile {
    let mut file = MediaFile::new(
        ctx.owner,
        MediaFileKind::Image(ImageFile {
            image_type,
            season: Season::None,
        }),
        source,
    );
    file.description = description;
    file.servers.clone_from(&ctx.servers);
    file
}

/// Assign the published file names.
///
/// Images are named after their type (`poster`, `fanart1`), episode thumbs, videos and
/// subtitles after `stem`. Files competing for the same name are numbered in catalog order.
pub(super) fn name_files(files: &mut [MediaFile], stem: &str) {
    for idx in 0..files.len() {
        let (before, rest) = files.split_at_mut(idx);
        let file = &mut rest[0];
        let index = before.iter().filter(|v| same_name(v, file)).count();

        let name = match &file.kind {
            MediaFileKind::Image(v) if v.image_type == ImageType::EpisodeThumb => {
                format!("{stem}-thumb")
            }
            MediaFileKind::Image(v) => v.image_type.file_stem().to_string(),
            MediaFileKind::Video | MediaFileKind::Subtitle(_) => stem.to_string(),
            MediaFileKind::Nfo => continue,
        };
        file.index = index;
        file.filename = match (index, &file.kind) {
            (0, _) => name,
            (_, MediaFileKind::Image(_)) => format!("{name}{index}"),
            _ => format!("{name}-part{}", index + 1),
        };
    }
}

/// Whether two files would end up with the same published name
fn same_name(a: &MediaFile, b: &MediaFile) -> bool {
    match (&a.kind, &b.kind) {
        (MediaFileKind::Image(x), MediaFileKind::Image(y)) => {
            x.image_type.file_stem() == y.image_type.file_stem() && a.season() == b.season()
        }
        (MediaFileKind::Subtitle(x), MediaFileKind::Subtitle(y)) => x.language == y.language,
        (MediaFileKind::Video, MediaFileKind::Video) => true,
        _ => false,
    }
}
