//! The entity model of a converted catalog.
//!
//! Everything here is plain data: a [`Media`] owns its [`MediaFile`]s, [`MediaStream`]s, [`Person`]s
//! and (for series) its episodes, while [`Server`]s are only referenced through a [`ServerId`].
//! Reading lives in [`crate::reader`], rendering in [`crate::library`].

mod file;
mod ids;
mod language;
mod media;
mod person;
mod season;
mod server;
mod stream;
mod types;

pub use file::{ImageFile, MediaFile, MediaFileKind, SubtitleFile};
pub use ids::MediaId;
pub use language::Language;
pub use media::{Episode, LibraryCategory, Media, MediaKind, Movie, Series};
pub use person::{Person, PersonRole};
pub use season::{override_season, Season};
pub use server::{PathStyle, Server, ServerId, ServerList};
pub use stream::{AudioStream, MediaStream, StreamKind, SubtitleStream, VideoStream};
pub use types::{AspectRatio, AudioCodec, ImageType, VideoDefinition};
