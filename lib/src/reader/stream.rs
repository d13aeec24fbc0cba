use std::sync::LazyLock;

use regex::Regex;

use super::{FromXml, ReadContext};
use crate::model::{AudioCodec, AudioStream, Language, SubtitleStream, VideoStream};
use crate::xml::XmlNode;

/// Channel layouts like `5.1` or `7.1`
static CHANNELS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d)\.(\d)\b").expect("channel regex is valid"));

/// Read from the movie node itself: `format` (falling back to `condition`) and `ratio`
impl FromXml for VideoStream {
    fn read_from_xml(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Option<Self> {
        let definition = [node.display_name("format"), node.display_name("condition")]
            .into_iter()
            .filter(|v| !v.is_empty())
            .find_map(|v| ctx.config.definition(v))
            .unwrap_or_default();
        let ratio = node.display_name("ratio");
        let aspect_ratio = ctx.config.aspect_ratio(ratio).unwrap_or_else(|| {
            if !ratio.is_empty() {
                debug!("Unknown aspect ratio \"{ratio}\", using the default");
            }
            Default::default()
        });

        Some(Self {
            definition,
            aspect_ratio,
        })
    }
}

/// Read from an `audiotrack` node, whose display name is free text like `English (Dolby Digital 5.1)`
impl FromXml for AudioStream {
    fn read_from_xml(node: &XmlNode, _ctx: &mut ReadContext<'_>) -> Option<Self> {
        let text = node.child_text("displayname");
        if text.is_empty() {
            return None;
        }

        Some(parse_audio(text))
    }
}

/// Read from a `subtitle` node
impl FromXml for SubtitleStream {
    fn read_from_xml(node: &XmlNode, _ctx: &mut ReadContext<'_>) -> Option<Self> {
        let text = node.child_text("displayname");
        if text.is_empty() {
            return None;
        }

        Some(Self {
            language: Language::from_name(text),
        })
    }
}

/// Split an audio track description into language, codec and channel count.
///
/// The language is whatever comes before the first technical detail.
fn parse_audio(text: &str) -> AudioStream {
    let lower = text.to_ascii_lowercase();
    let mut language_end = text.len();
    let mut cut = |pos: usize| language_end = language_end.min(pos);

    let codec = match AudioCodec::find_in(text) {
        Some((codec, pos)) => {
            cut(pos);
            codec
        }
        None => AudioCodec::Unknown,
    };

    let channels = if let Some(caps) = CHANNELS.captures(text) {
        // SAFETY: group 0 always exists for a successful capture
        cut(caps.get(0).unwrap().start());
        let main: u8 = caps[1].parse().unwrap_or(2);
        let lfe: u8 = caps[2].parse().unwrap_or(0);
        main + lfe
    } else if let Some(pos) = lower.find("mono") {
        cut(pos);
        1
    } else {
        if let Some(pos) = lower.find("stereo") {
            cut(pos);
        }
        2
    };

    if let Some(pos) = text.find('(') {
        cut(pos);
    }

    let language = text[..language_end].trim_matches(|c: char| c.is_whitespace() || ",-:/".contains(c));

    AudioStream {
        language: Language::from_name(language),
        codec,
        channels,
    }
}
