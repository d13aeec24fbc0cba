use serde::{Deserialize, Serialize};

/// Kind of artwork an image file represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    /// Not a type we publish, skipped when read
    #[default]
    Unknown,
    Cover,
    Poster,
    Banner,
    Backdrop,
    SeasonCover,
    SeasonBackdrop,
    EpisodeThumb,
}

impl ImageType {
    /// Whether this artwork belongs to one season and lives in that season's folder
    pub fn is_season_specific(self) -> bool {
        matches!(self, Self::SeasonCover | Self::SeasonBackdrop)
    }

    /// Position in the rendered NFO: covers and posters first, backdrops second, season art last
    pub fn render_rank(self) -> u8 {
        match self {
            Self::Cover | Self::Poster | Self::Banner | Self::EpisodeThumb => 0,
            Self::Backdrop => 1,
            Self::SeasonCover | Self::SeasonBackdrop => 2,
            Self::Unknown => 3,
        }
    }

    /// File stem of the published artwork, before any index suffix
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Poster | Self::SeasonCover => "poster",
            Self::Banner => "banner",
            Self::Backdrop | Self::SeasonBackdrop => "fanart",
            Self::EpisodeThumb => "thumb",
            Self::Unknown => "image",
        }
    }
}

/// Resolution class of the main video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoDefinition {
    #[default]
    Sd,
    Hd720,
    Hd1080,
    Uhd,
}

impl VideoDefinition {
    /// `(width, height)` advertised in the stream details
    pub fn resolution(self) -> (u32, u32) {
        match self {
            Self::Sd => (720, 576),
            Self::Hd720 => (1280, 720),
            Self::Hd1080 => (1920, 1080),
            Self::Uhd => (3840, 2160),
        }
    }

    /// The video codec usually found on a medium of this definition
    pub fn codec(self) -> &'static str {
        match self {
            Self::Sd => "mpeg2",
            Self::Hd720 | Self::Hd1080 => "h264",
            Self::Uhd => "hevc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "4:3")]
    Ratio4x3,
    #[default]
    #[serde(rename = "16:9")]
    Ratio16x9,
    #[serde(rename = "1.85:1")]
    Ratio185,
    #[serde(rename = "2.35:1")]
    Ratio235,
    #[serde(rename = "2.40:1")]
    Ratio240,
}

impl AspectRatio {
    /// Decimal form used by the `<aspect>` tag
    pub fn as_decimal(self) -> &'static str {
        match self {
            Self::Ratio4x3 => "1.33",
            Self::Ratio16x9 => "1.78",
            Self::Ratio185 => "1.85",
            Self::Ratio235 => "2.35",
            Self::Ratio240 => "2.40",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioCodec {
    #[default]
    Unknown,
    Ac3,
    Eac3,
    Dts,
    DtsHdMa,
    TrueHd,
    Aac,
    Mp3,
    Pcm,
}

impl AudioCodec {
    /// Free-text spellings, longest first so that "DTS-HD" wins over "DTS"
    const KEYWORDS: &'static [(&'static str, AudioCodec)] = &[
        ("dts-hd master audio", AudioCodec::DtsHdMa),
        ("dolby digital plus", AudioCodec::Eac3),
        ("dolby truehd", AudioCodec::TrueHd),
        ("dolby digital", AudioCodec::Ac3),
        ("dts-hd ma", AudioCodec::DtsHdMa),
        ("dts-hd", AudioCodec::DtsHdMa),
        ("truehd", AudioCodec::TrueHd),
        ("e-ac3", AudioCodec::Eac3),
        ("eac3", AudioCodec::Eac3),
        ("ac-3", AudioCodec::Ac3),
        ("lpcm", AudioCodec::Pcm),
        ("ac3", AudioCodec::Ac3),
        ("dd+", AudioCodec::Eac3),
        ("dts", AudioCodec::Dts),
        ("aac", AudioCodec::Aac),
        ("mp3", AudioCodec::Mp3),
        ("pcm", AudioCodec::Pcm),
    ];

    /// Find the first codec mentioned in `text`.
    ///
    /// Returns the codec and the byte offset where its name starts.
    pub fn find_in(text: &str) -> Option<(Self, usize)> {
        // ascii only, so byte offsets stay valid for `text`
        let lower = text.to_ascii_lowercase();
        let mut found: Option<(Self, usize)> = None;
        for (keyword, codec) in Self::KEYWORDS {
            if let Some(pos) = lower.find(keyword) {
                // keep the earliest, on ties the longer keyword that came first in the table
                if found.map_or(true, |(_, best)| pos < best) {
                    found = Some((*codec, pos));
                }
            }
        }

        found
    }

    /// Codec name for the `<codec>` tag, empty for [`AudioCodec::Unknown`]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Ac3 => "ac3",
            Self::Eac3 => "eac3",
            Self::Dts => "dts",
            Self::DtsHdMa => "dtshd_ma",
            Self::TrueHd => "truehd",
            Self::Aac => "aac",
            Self::Mp3 => "mp3",
            Self::Pcm => "pcm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_prefer_longest_codec_name() {
        assert_eq!(
            AudioCodec::find_in("English DTS-HD Master Audio 7.1"),
            Some((AudioCodec::DtsHdMa, 8))
        );
        assert_eq!(
            AudioCodec::find_in("German Dolby Digital 5.1"),
            Some((AudioCodec::Ac3, 7))
        );
        assert_eq!(AudioCodec::find_in("German DTS"), Some((AudioCodec::Dts, 7)));
        assert_eq!(AudioCodec::find_in("Commentary"), None);
    }

    #[test]
    fn season_art_is_ranked_last() {
        assert!(ImageType::Poster.render_rank() < ImageType::Backdrop.render_rank());
        assert!(ImageType::Backdrop.render_rank() < ImageType::SeasonCover.render_rank());
        assert!(ImageType::SeasonBackdrop.is_season_specific());
        assert!(!ImageType::Backdrop.is_season_specific());
    }

    #[test]
    fn defaults_are_sd_and_16_9() {
        assert_eq!(VideoDefinition::default(), VideoDefinition::Sd);
        assert_eq!(AspectRatio::default(), AspectRatio::Ratio16x9);
        assert_eq!(AspectRatio::default().as_decimal(), "1.78");
    }
}
