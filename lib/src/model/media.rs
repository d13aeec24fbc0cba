/**
 * MIT License
 *
 * collectorz-converter - Copyright (c) 2024 collectorz-converter contributors
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
use super::{
    Language, MediaFile, MediaFileKind, MediaId, MediaStream, Person, Season, ServerId,
};
use crate::utils::sanitize_folder_name;

/// Library category a media is published under, decides the top-level folder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LibraryCategory {
    Movies,
    Series,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movie {
    pub trailer: String,
    /// Name of the box set / collection the movie is part of
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Episodes in catalog order, each with [`MediaKind::Episode`]
    pub episodes: Vec<Media>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Episode {
    pub season: Season,
    pub number: u32,
    pub aired: String,
    /// Title of the series, used for the file names of the episode
    pub series_title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MediaKind {
    Movie(Movie),
    Series(Series),
    Episode(Episode),
}

/// One catalog item: a movie, a series or an episode of a series
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: MediaId,
    /// The `id` the item has in the Collectorz catalog
    pub catalog_id: String,
    pub title: String,
    pub sort_title: String,
    pub original_title: String,
    /// `YYYY-MM-DD` or whatever the catalog had
    pub publishing_date: String,
    pub year: u32,
    pub rating: f32,
    pub mpaa: String,
    /// Runtime in minutes
    pub runtime: u32,
    pub country: String,
    pub imdb_id: String,
    pub plot: String,
    pub genres: Vec<String>,
    pub studios: Vec<String>,
    pub languages: Vec<Language>,
    pub persons: Vec<Person>,
    pub servers: Vec<ServerId>,
    pub files: Vec<MediaFile>,
    pub streams: Vec<MediaStream>,
    /// Target language if this is a localized clone
    pub localized: Option<Language>,
    pub kind: MediaKind,
}

impl Media {
    pub fn new(id: MediaId, kind: MediaKind) -> Self {
        Self {
            id,
            catalog_id: String::new(),
            title: String::new(),
            sort_title: String::new(),
            original_title: String::new(),
            publishing_date: String::new(),
            year: 0,
            rating: 0.0,
            mpaa: String::new(),
            runtime: 0,
            country: String::new(),
            imdb_id: String::new(),
            plot: String::new(),
            genres: Vec::new(),
            studios: Vec::new(),
            languages: Vec::new(),
            persons: Vec::new(),
            servers: Vec::new(),
            files: Vec::new(),
            streams: Vec::new(),
            localized: None,
            kind,
        }
    }

    pub fn category(&self) -> LibraryCategory {
        match self.kind {
            MediaKind::Movie(_) => LibraryCategory::Movies,
            MediaKind::Series(_) | MediaKind::Episode(_) => LibraryCategory::Series,
        }
    }

    /// Name of the root tag of the NFO document
    pub fn nfo_root(&self) -> &'static str {
        match self.kind {
            MediaKind::Movie(_) => "movie",
            MediaKind::Series(_) => "tvshow",
            MediaKind::Episode(_) => "episodedetails",
        }
    }

    /// Name of the folder the media is published in.
    ///
    /// Movies get `Title (Year)`, series their title. Episodes live in their series' folder
    /// and only contribute a season folder, see [`Media::season`].
    pub fn folder_name(&self) -> String {
        let name = match self.kind {
            MediaKind::Movie(_) if self.year > 0 => format!("{} ({})", self.title, self.year),
            _ => self.title.clone(),
        };

        sanitize_folder_name(&name)
    }

    /// Stem shared by the files named after an episode, like `Show S01E02`
    pub fn episode_stem(&self) -> Option<String> {
        let MediaKind::Episode(episode) = &self.kind else {
            return None;
        };
        let code = match episode.season {
            Season::None => format!("E{:02}", episode.number),
            Season::Number(season) => format!("S{season:02}E{:02}", episode.number),
        };

        Some(sanitize_folder_name(&format!("{} {code}", episode.series_title)))
    }

    /// Season of an episode, [`Season::None`] for everything else
    pub fn season(&self) -> Season {
        match &self.kind {
            MediaKind::Episode(v) => v.season,
            _ => Season::None,
        }
    }

    /// Default stem of the NFO document
    pub fn nfo_stem(&self) -> String {
        match &self.kind {
            MediaKind::Movie(_) => self.folder_name(),
            MediaKind::Series(_) => "tvshow".to_string(),
            MediaKind::Episode(_) => self.episode_stem().unwrap_or_default(),
        }
    }

    /// The NFO file of this media, if the reader attached one
    pub fn nfo_file(&self) -> Option<&MediaFile> {
        self.files.iter().find(|v| v.kind == MediaFileKind::Nfo)
    }

    pub fn episodes(&self) -> &[Media] {
        match &self.kind {
            MediaKind::Series(v) => &v.episodes,
            _ => &[],
        }
    }

    pub fn episodes_mut(&mut self) -> &mut [Media] {
        match &mut self.kind {
            MediaKind::Series(v) => &mut v.episodes,
            _ => &mut [],
        }
    }

    /// Title for log and error messages
    pub fn display_title(&self) -> String {
        match (&self.kind, self.episode_stem()) {
            (MediaKind::Episode(_), Some(stem)) => format!("{stem} {}", self.title),
            _ if self.year > 0 => format!("{} ({})", self.title, self.year),
            _ => self.title.clone(),
        }
    }
}
