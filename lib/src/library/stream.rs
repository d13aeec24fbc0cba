use super::{LibraryItem, LibraryOutput, NfoWriter, RenderContext};
use crate::model::{Language, MediaStream, StreamKind};

impl LibraryItem for MediaStream {
    fn write_to_library(&self, _ctx: &RenderContext<'_>, nfo: &mut NfoWriter, _out: &mut LibraryOutput) {
        match &self.kind {
            StreamKind::Video(video) => {
                let (width, height) = video.definition.resolution();
                nfo.open("video");
                nfo.tag("codec", video.definition.codec());
                nfo.tag("aspect", video.aspect_ratio.as_decimal());
                nfo.number("width", width);
                nfo.number("height", height);
                nfo.close();
            }
            StreamKind::Audio(audio) => {
                nfo.open("audio");
                nfo.tag("codec", audio.codec.as_str());
                nfo.tag("language", language_code(&audio.language));
                nfo.number("channels", u32::from(audio.channels));
                nfo.close();
            }
            StreamKind::Subtitle(subtitle) => {
                nfo.open("subtitle");
                nfo.tag("language", language_code(&subtitle.language));
                nfo.close();
            }
        }
    }
}

/// Undetermined languages are left out
fn language_code(language: &Language) -> &str {
    if language.is_undetermined() {
        ""
    } else {
        language.code()
    }
}
