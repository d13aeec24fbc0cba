use super::{LibraryItem, LibraryOutput, NfoWriter, RenderContext};
use crate::model::{ImageType, Media, MediaFile, MediaKind};

impl LibraryItem for Media {
    fn write_to_library(&self, ctx: &RenderContext<'_>, nfo: &mut NfoWriter, out: &mut LibraryOutput) {
        write_header(self, nfo);

        for genre in &self.genres {
            nfo.tag("genre", genre);
        }
        for studio in &self.studios {
            nfo.tag("studio", studio);
        }

        let mut persons: Vec<_> = self.persons.iter().collect();
        persons.sort_by_key(|v| v.role.render_rank());
        for person in persons {
            person.write_to_library(ctx, nfo, out);
        }

        if !self.streams.is_empty() {
            let mut streams: Vec<_> = self.streams.iter().collect();
            streams.sort_by_key(|v| v.render_rank());
            nfo.open("fileinfo");
            nfo.open("streamdetails");
            for stream in streams {
                stream.write_to_library(ctx, nfo, out);
            }
            nfo.close();
            nfo.close();
        }

        write_files(self, ctx, nfo, out);
    }
}

fn write_header(media: &Media, nfo: &mut NfoWriter) {
    nfo.tag("title", &media.title);
    if let MediaKind::Episode(episode) = &media.kind {
        nfo.tag("showtitle", &episode.series_title);
    }
    if media.original_title != media.title {
        nfo.tag("originaltitle", &media.original_title);
    }
    nfo.tag("sorttitle", &media.sort_title);
    nfo.number("year", media.year);
    match &media.kind {
        MediaKind::Episode(episode) => nfo.tag("aired", &episode.aired),
        MediaKind::Movie(_) | MediaKind::Series(_) => nfo.tag("premiered", &media.publishing_date),
    }
    if media.rating > 0.0 {
        nfo.tag("rating", &format!("{:.1}", media.rating));
    }
    nfo.tag("mpaa", &media.mpaa);
    nfo.number("runtime", media.runtime);
    nfo.tag("country", &media.country);
    nfo.tag("plot", &media.plot);
    nfo.tag("id", &media.imdb_id);
    nfo.tag_with("uniqueid", &[("type", "imdb"), ("default", "true")], &media.imdb_id);

    match &media.kind {
        MediaKind::Movie(movie) => {
            if !movie.collection.is_empty() {
                nfo.open("set");
                nfo.tag("name", &movie.collection);
                nfo.close();
            }
            nfo.tag("trailer", &movie.trailer);
        }
        MediaKind::Episode(episode) => {
            if let Some(season) = episode.season.number() {
                nfo.tag("season", &season.to_string());
            }
            nfo.number("episode", episode.number);
        }
        MediaKind::Series(_) => (),
    }
}

/// Images by rank with the backdrops in one `<fanart>` block, then the files that are only copied
fn write_files(media: &Media, ctx: &RenderContext<'_>, nfo: &mut NfoWriter, out: &mut LibraryOutput) {
    let mut images: Vec<&MediaFile> = media.files.iter().filter(|v| v.image().is_some()).collect();
    images.sort_by_key(|v| v.image().map_or(u8::MAX, |i| i.image_type.render_rank()));

    let mut in_fanart = false;
    for file in images {
        let is_backdrop = file
            .image()
            .is_some_and(|v| v.image_type == ImageType::Backdrop);
        if is_backdrop != in_fanart {
            if is_backdrop {
                nfo.open("fanart");
            } else {
                nfo.close();
            }
            in_fanart = is_backdrop;
        }
        file.write_to_library(ctx, nfo, out);
    }
    if in_fanart {
        nfo.close();
    }

    for file in media.files.iter().filter(|v| v.image().is_none()) {
        file.write_to_library(ctx, nfo, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::library::render_media;
    use crate::model::{
        Episode, ImageFile, MediaId, Movie, Person, PersonRole, Season, Series,
    };
    use pretty_assertions::assert_eq;

    fn image(owner: MediaId, image_type: ImageType, filename: &str) -> MediaFile {
        let mut file = MediaFile::new(
            owner,
            crate::model::MediaFileKind::Image(ImageFile {
                image_type,
                season: Season::Number(1),
            }),
            format!("http://img.example.org/{filename}.jpg"),
        );
        file.filename = filename.to_string();
        file
    }

    fn person(owner: MediaId, name: &str, role: PersonRole) -> Person {
        Person {
            owner,
            name: name.to_string(),
            role,
            thumb: String::new(),
            order: 0,
        }
    }

    #[test]
    fn should_render_in_fixed_order() {
        let id = MediaId::new(1);
        let mut media = Media::new(
            id,
            MediaKind::Movie(Movie {
                trailer: String::new(),
                collection: "Mann".to_string(),
            }),
        );
        media.title = "Heat".to_string();
        media.original_title = "Heat".to_string();
        media.year = 1995;
        media.rating = 8.3;
        media.genres = vec!["Crime".to_string()];
        media.studios = vec!["Warner".to_string()];
        media.persons = vec![
            person(id, "Producer", PersonRole::Producer),
            person(id, "Writer", PersonRole::Writer),
            person(id, "Director", PersonRole::Director),
            person(
                id,
                "Actor",
                PersonRole::Actor {
                    character: "Role".to_string(),
                },
            ),
        ];
        media.files = vec![
            image(id, ImageType::SeasonCover, "poster"),
            image(id, ImageType::Backdrop, "fanart"),
            image(id, ImageType::Cover, "cover"),
            image(id, ImageType::Backdrop, "fanart1"),
        ];

        let out = render_media(&media, &Configuration::default());
        let content = &out.documents[0].content;
        let expected = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<movie>
  <title>Heat</title>
  <year>1995</year>
  <rating>8.3</rating>
  <set>
    <name>Mann</name>
  </set>
  <genre>Crime</genre>
  <studio>Warner</studio>
  <actor>
    <name>Actor</name>
    <role>Role</role>
    <order>0</order>
  </actor>
  <director>Director</director>
  <credits>Writer</credits>
  <thumb aspect="poster">http://img.example.org/cover.jpg</thumb>
  <fanart>
    <thumb>http://img.example.org/fanart.jpg</thumb>
    <thumb>http://img.example.org/fanart1.jpg</thumb>
  </fanart>
  <thumb aspect="poster" type="season" season="1">http://img.example.org/poster.jpg</thumb>
</movie>
"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn series_renders_every_episode() {
        let mut series = Media::new(MediaId::new(1), MediaKind::Series(Series::default()));
        series.title = "Lost".to_string();
        let mut episode = Media::new(
            MediaId::new(2),
            MediaKind::Episode(Episode {
                season: Season::Number(1),
                number: 4,
                aired: "2004-10-20".to_string(),
                series_title: "Lost".to_string(),
            }),
        );
        episode.title = "Walkabout".to_string();
        episode.files.push(MediaFile::nfo(episode.id, "Lost S01E04"));
        if let MediaKind::Series(v) = &mut series.kind {
            v.episodes.push(episode);
        }

        let config = Configuration::default();
        let out = render_media(&series, &config);
        assert_eq!(out.documents.len(), 2);
        assert!(out.documents[0].content.contains("<tvshow>"));
        assert!(out.documents[0].path.ends_with("TV Shows/Lost/tvshow.nfo"));

        let episode = &out.documents[1];
        assert!(episode.path.ends_with("TV Shows/Lost/Season 1/Lost S01E04.nfo"));
        assert!(episode.content.contains("<showtitle>Lost</showtitle>"));
        assert!(episode.content.contains("<aired>2004-10-20</aired>"));
        assert!(episode.content.contains("<season>1</season>"));
        assert!(episode.content.contains("<episode>4</episode>"));
    }
}
