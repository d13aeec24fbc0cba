use super::{AspectRatio, AudioCodec, Language, MediaId, VideoDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoStream {
    pub definition: VideoDefinition,
    pub aspect_ratio: AspectRatio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStream {
    pub language: Language,
    pub codec: AudioCodec,
    pub channels: u8,
}

impl Default for AudioStream {
    fn default() -> Self {
        Self {
            language: Language::Undetermined,
            codec: AudioCodec::Unknown,
            channels: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubtitleStream {
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamKind {
    Video(VideoStream),
    Audio(AudioStream),
    Subtitle(SubtitleStream),
}

/// One track of a [`Media`](super::Media)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStream {
    pub owner: MediaId,
    pub kind: StreamKind,
}

impl MediaStream {
    pub fn new(owner: MediaId, kind: StreamKind) -> Self {
        Self { owner, kind }
    }

    /// The language of this track, video tracks have none
    pub fn language(&self) -> Option<&Language> {
        match &self.kind {
            StreamKind::Video(_) => None,
            StreamKind::Audio(v) => Some(&v.language),
            StreamKind::Subtitle(v) => Some(&v.language),
        }
    }

    pub fn language_mut(&mut self) -> Option<&mut Language> {
        match &mut self.kind {
            StreamKind::Video(_) => None,
            StreamKind::Audio(v) => Some(&mut v.language),
            StreamKind::Subtitle(v) => Some(&mut v.language),
        }
    }

    /// Order inside `<streamdetails>`: video, audio, subtitle
    pub fn render_rank(&self) -> u8 {
        match self.kind {
            StreamKind::Video(_) => 0,
            StreamKind::Audio(_) => 1,
            StreamKind::Subtitle(_) => 2,
        }
    }
}
