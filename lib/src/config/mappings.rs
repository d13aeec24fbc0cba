//! Built-in display-name tables.
//!
//! Collectorz exports enumerations as the display text the user sees in the program,
//! these tables map the known spellings. Lookups are exact and case-sensitive.

use crate::model::{AspectRatio, ImageType, VideoDefinition};

pub const IMAGE_TYPES: &[(&str, ImageType)] = &[
    ("Cover", ImageType::Cover),
    ("Front Cover", ImageType::Cover),
    ("Poster", ImageType::Poster),
    ("Banner", ImageType::Banner),
    ("Backdrop", ImageType::Backdrop),
    ("Fanart", ImageType::Backdrop),
    ("Season Cover", ImageType::SeasonCover),
    ("Season Poster", ImageType::SeasonCover),
    ("Season Backdrop", ImageType::SeasonBackdrop),
    ("Season Fanart", ImageType::SeasonBackdrop),
    ("Episode Thumb", ImageType::EpisodeThumb),
];

pub const DEFINITIONS: &[(&str, VideoDefinition)] = &[
    ("DVD", VideoDefinition::Sd),
    ("VHS", VideoDefinition::Sd),
    ("SD", VideoDefinition::Sd),
    ("HD", VideoDefinition::Hd1080),
    ("720p", VideoDefinition::Hd720),
    ("1080p", VideoDefinition::Hd1080),
    ("Blu-ray", VideoDefinition::Hd1080),
    ("HD-DVD", VideoDefinition::Hd1080),
    ("2160p", VideoDefinition::Uhd),
    ("4K Ultra HD", VideoDefinition::Uhd),
    ("Ultra HD Blu-ray", VideoDefinition::Uhd),
];

pub const ASPECT_RATIOS: &[(&str, AspectRatio)] = &[
    ("4:3", AspectRatio::Ratio4x3),
    ("1.33:1", AspectRatio::Ratio4x3),
    ("Fullscreen", AspectRatio::Ratio4x3),
    ("16:9", AspectRatio::Ratio16x9),
    ("1.78:1", AspectRatio::Ratio16x9),
    ("Widescreen", AspectRatio::Ratio16x9),
    ("1.85:1", AspectRatio::Ratio185),
    ("2.35:1", AspectRatio::Ratio235),
    ("2.39:1", AspectRatio::Ratio240),
    ("2.40:1", AspectRatio::Ratio240),
];
