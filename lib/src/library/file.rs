use super::{LibraryItem, LibraryOutput, NfoWriter, RenderContext};
use crate::model::{ImageFile, ImageType, MediaFile, MediaFileKind};

impl LibraryItem for MediaFile {
    fn write_to_library(&self, ctx: &RenderContext<'_>, nfo: &mut NfoWriter, out: &mut LibraryOutput) {
        let path = ctx.file_path(self);
        match &self.kind {
            MediaFileKind::Image(image) => {
                let url = if self.is_remote() {
                    self.source.clone()
                } else {
                    self.servers
                        .iter()
                        .find_map(|id| ctx.config.server(*id))
                        .map_or_else(|| self.source.clone(), |server| path.library_url(server))
                };
                write_thumb(nfo, image, &url);
                out.copies
                    .extend(ctx.copies(&self.source, &path, &self.servers));
            }
            MediaFileKind::Subtitle(_) | MediaFileKind::Video => {
                out.copies
                    .extend(ctx.copies(&self.source, &path, &self.servers));
            }
            MediaFileKind::Nfo => {
                if ctx.config.publish_nfo() {
                    let local = ctx.export_path(self);
                    out.copies.extend(ctx.copies(
                        &local.to_string_lossy(),
                        &path,
                        &self.servers,
                    ));
                }
            }
        }
    }
}

fn write_thumb(nfo: &mut NfoWriter, image: &ImageFile, url: &str) {
    let season = image.season.to_string();
    let mut attributes: Vec<(&str, &str)> = Vec::with_capacity(3);
    match image.image_type {
        ImageType::Cover | ImageType::Poster | ImageType::SeasonCover => {
            attributes.push(("aspect", "poster"));
        }
        ImageType::Banner => attributes.push(("aspect", "banner")),
        ImageType::SeasonBackdrop => attributes.push(("aspect", "landscape")),
        ImageType::Backdrop | ImageType::EpisodeThumb | ImageType::Unknown => (),
    }
    if image.image_type.is_season_specific() {
        attributes.push(("type", "season"));
        attributes.push(("season", &season));
    }

    nfo.tag_with("thumb", &attributes, url);
}
