use ahash::HashMap;

use super::file::{image, name_files, read_files};
use super::{list_items, parse_f32, parse_u32, FromXml, ReadContext};
use crate::model::{
    AudioStream, Episode, ImageType, Language, Media, MediaFile, MediaKind, MediaStream, Movie,
    Person, Season, Series, ServerId, StreamKind, SubtitleStream, VideoStream,
};
use crate::xml::XmlNode;

/// Read a `movie` node of the catalog, which is a series if its discs list episodes
impl FromXml for Media {
    fn read_from_xml(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Option<Self> {
        let title = node.child_text("title").trim();
        if title.is_empty() {
            warn!(
                "Skipping catalog item \"{}\" without a title",
                node.child_text("id")
            );
            return None;
        }

        let id = ctx.allocate_id();
        ctx.owner = id;
        ctx.servers = read_servers(node, ctx);

        let kind = if has_episodes(node) {
            MediaKind::Series(Series::default())
        } else {
            MediaKind::Movie(Movie {
                trailer: node.child_text("trailer").trim().to_string(),
                collection: node.display_name("boxset").trim().to_string(),
            })
        };
        let mut media = Media::new(id, kind);
        read_details(&mut media, node);
        media.servers.clone_from(&ctx.servers);
        media.persons = read_persons(node, ctx);
        media.streams = read_streams(node, ctx);
        media.files = read_files(node, ctx, &media.folder_name());

        if matches!(media.kind, MediaKind::Series(_)) {
            let episodes = read_episodes(node, &media, ctx);
            if let MediaKind::Series(series) = &mut media.kind {
                series.episodes = episodes;
            }
        }
        push_nfo(&mut media);
        trace!("Read {} {}", media.id, media.display_title());

        Some(media)
    }
}

fn has_episodes(node: &XmlNode) -> bool {
    list_items(node, "discs", "disc").any(|v| v.path(&["episodes", "episode"]).is_some())
}

/// The fields shared by movies and series
fn read_details(media: &mut Media, node: &XmlNode) {
    media.catalog_id = node.child_text("id").trim().to_string();
    media.title = node.child_text("title").trim().to_string();
    media.sort_title = node.child_text("titlesort").trim().to_string();
    media.original_title = node.child_text("originaltitle").trim().to_string();
    media.publishing_date = node.path_text(&["releasedate", "date"]).trim().to_string();
    media.year = match parse_u32(node.path_text(&["releasedate", "year", "displayname"])) {
        0 => year_of(&media.publishing_date),
        year => year,
    };
    media.rating = parse_f32(node.child_text("imdbrating"));
    media.mpaa = node.display_name("mpaarating").trim().to_string();
    media.runtime = parse_u32(node.child_text("runtime"));
    media.country = node.display_name("country").trim().to_string();
    media.imdb_id = node.child_text("imdbnum").trim().to_string();
    media.plot = node.child_text("plot").trim().to_string();
    media.genres = display_names(node, "genres", "genre");
    media.studios = display_names(node, "studios", "studio");
    media.languages = display_names(node, "languages", "language")
        .iter()
        .map(|v| Language::from_name(v))
        .collect();
}

/// Non-empty display names of a collection
fn display_names(node: &XmlNode, list: &str, item: &str) -> Vec<String> {
    list_items(node, list, item)
        .map(|v| v.child_text("displayname").trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// First four digit group of a date, `0` if there is none
fn year_of(date: &str) -> u32 {
    date.split(|c: char| !c.is_ascii_digit())
        .find(|v| v.len() == 4)
        .map_or(0, parse_u32)
}

/// Servers named in the `location`, the configured defaults if it names none
fn read_servers(node: &XmlNode, ctx: &ReadContext<'_>) -> Vec<ServerId> {
    let location = node.display_name("location");
    let mut servers: Vec<ServerId> = Vec::new();

    for token in location.split([',', ';', ' ']).filter(|v| !v.is_empty()) {
        let Ok(number) = token.parse::<u32>() else {
            debug!("Ignoring \"{token}\" in location \"{location}\"");
            continue;
        };
        let id = ServerId::new(number);
        if !ctx.config.servers().contains(id) {
            warn!("Location \"{location}\" names server {number}, which is not configured");
        } else if !servers.contains(&id) {
            servers.push(id);
        }
    }

    if servers.is_empty() {
        ctx.config.default_servers()
    } else {
        servers
    }
}

/// Cast first, then crew, numbered in that order
fn read_persons(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Vec<Person> {
    let mut persons: Vec<Person> = list_items(node, "cast", "star")
        .chain(list_items(node, "crew", "crewmember"))
        .filter_map(|v| Person::read_from_xml(v, ctx))
        .collect();
    for (order, person) in (0..).zip(persons.iter_mut()) {
        person.order = order;
    }

    persons
}

/// One video stream, then the audio tracks and subtitles in catalog order
fn read_streams(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Vec<MediaStream> {
    let mut streams = Vec::new();
    if let Some(video) = VideoStream::read_from_xml(node, ctx) {
        streams.push(MediaStream::new(ctx.owner, StreamKind::Video(video)));
    }
    for track in list_items(node, "audiotracks", "audiotrack") {
        if let Some(audio) = AudioStream::read_from_xml(track, ctx) {
            streams.push(MediaStream::new(ctx.owner, StreamKind::Audio(audio)));
        }
    }
    for subtitle in list_items(node, "subtitles", "subtitle") {
        if let Some(subtitle) = SubtitleStream::read_from_xml(subtitle, ctx) {
            streams.push(MediaStream::new(ctx.owner, StreamKind::Subtitle(subtitle)));
        }
    }

    streams
}

/// All episodes of all discs; the disc title is the fallback season.
///
/// Episodes without a number continue after the highest number of their season so far,
/// a season may span several discs.
fn read_episodes(node: &XmlNode, series: &Media, ctx: &mut ReadContext<'_>) -> Vec<Media> {
    let mut episodes = Vec::new();
    let mut last_numbers: HashMap<Season, u32> = HashMap::default();
    for disc in list_items(node, "discs", "disc") {
        let disc_season = Season::convert(disc.child_text("title"));
        for episode in list_items(disc, "episodes", "episode") {
            episodes.push(read_episode(
                episode,
                series,
                disc_season,
                &mut last_numbers,
                ctx,
            ));
        }
    }
    ctx.owner = series.id;

    episodes
}

fn read_episode(
    node: &XmlNode,
    series: &Media,
    disc_season: Season,
    last_numbers: &mut HashMap<Season, u32>,
    ctx: &mut ReadContext<'_>,
) -> Media {
    let id = ctx.allocate_id();
    ctx.owner = id;

    let season = match node.child_text("seasonnr").trim() {
        "" => disc_season,
        raw => Season::convert(raw),
    };
    let last = last_numbers.entry(season).or_insert(0);
    let number = match parse_u32(node.child_text("episodenr")) {
        0 => last.saturating_add(1),
        number => number,
    };
    *last = (*last).max(number);
    let aired = node.path_text(&["firstairdate", "date"]).trim().to_string();

    let mut episode = Media::new(
        id,
        MediaKind::Episode(Episode {
            season,
            number,
            aired: aired.clone(),
            series_title: series.title.clone(),
        }),
    );
    episode.title = match node.child_text("title").trim() {
        "" => format!("Episode {number}"),
        title => title.to_string(),
    };
    episode.plot = node.child_text("plot").trim().to_string();
    episode.runtime = parse_u32(node.child_text("runtime"));
    episode.year = year_of(&aired);
    episode.publishing_date = aired;
    episode.servers.clone_from(&series.servers);
    episode.streams = series
        .streams
        .iter()
        .cloned()
        .map(|mut v| {
            v.owner = id;
            v
        })
        .collect();

    let thumb = node.child_text("imagefilename").trim();
    if !thumb.is_empty() {
        episode.files.push(image(
            ctx,
            ImageType::EpisodeThumb,
            thumb,
            "imagefilename".to_string(),
        ));
    }
    let stem = episode.episode_stem().unwrap_or_default();
    name_files(&mut episode.files, &stem);
    push_nfo(&mut episode);

    episode
}

/// Every media gets its NFO document, published like its other files
fn push_nfo(media: &mut Media) {
    let mut nfo = MediaFile::nfo(media.id, media.nfo_stem());
    nfo.servers.clone_from(&media.servers);
    media.files.push(nfo);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Configuration, ServerSettings, Settings};
    use crate::model::{AspectRatio, AudioCodec, MediaFileKind, MediaId, PersonRole, VideoDefinition};
    use crate::reader::read_catalog;
    use pretty_assertions::assert_eq;

    fn config() -> Configuration {
        let mut settings = Settings::default();
        settings.servers = vec![
            ServerSettings {
                number: ServerId::new(1),
                ..Default::default()
            },
            ServerSettings {
                number: ServerId::new(2),
                name: "server2".to_string(),
                ..Default::default()
            },
        ];
        Configuration::new(settings)
    }

    fn read(content: &str) -> Vec<Media> {
        let doc = XmlNode::parse(content).unwrap();
        read_catalog(&doc, &config()).unwrap()
    }

    const MOVIE: &str = r"<movieinfo><movielist><movie>
        <id>42</id>
        <title>Heat</title>
        <titlesort>Heat</titlesort>
        <originaltitle>Heat</originaltitle>
        <releasedate><date>1995-12-15</date><year><displayname>1995</displayname></year></releasedate>
        <imdbnum>tt0113277</imdbnum>
        <imdbrating>8.3</imdbrating>
        <runtime>170</runtime>
        <plot>A group of professional bank robbers...</plot>
        <mpaarating><displayname>R</displayname></mpaarating>
        <country><displayname>USA</displayname></country>
        <boxset><displayname>Michael Mann Collection</displayname></boxset>
        <location><displayname>2, 9, shelf</displayname></location>
        <format><displayname>Blu-ray</displayname></format>
        <ratio><displayname>2.35:1</displayname></ratio>
        <genres><genre><displayname>Crime</displayname></genre><genre><displayname>Drama</displayname></genre></genres>
        <studios><studio><displayname>Warner Bros.</displayname></studio></studios>
        <languages><language><displayname>English</displayname></language></languages>
        <audiotracks><audiotrack><displayname>English (Dolby Digital 5.1)</displayname></audiotrack></audiotracks>
        <subtitles><subtitle><displayname>German</displayname></subtitle></subtitles>
        <cast><star><person><displayname>Al Pacino</displayname></person><character>Vincent Hanna</character></star></cast>
        <crew><crewmember><roleid>dfDirector</roleid><person><displayname>Michael Mann</displayname></person></crewmember></crew>
        <backdropurl>C:\Images\heat_backdrop.jpg</backdropurl>
    </movie></movielist></movieinfo>";

    #[test]
    fn should_read_movie() {
        let media = read(MOVIE);
        assert_eq!(media.len(), 1);
        let movie = &media[0];

        assert_eq!(movie.id, MediaId::new(1));
        assert_eq!(movie.catalog_id, "42");
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 1995);
        assert_eq!(movie.publishing_date, "1995-12-15");
        assert!((movie.rating - 8.3).abs() < 0.001);
        assert_eq!(movie.runtime, 170);
        assert_eq!(movie.mpaa, "R");
        assert_eq!(movie.genres, ["Crime", "Drama"]);
        assert_eq!(movie.studios, ["Warner Bros."]);
        assert_eq!(movie.languages, [Language::English]);
        assert_eq!(movie.servers, [ServerId::new(2)]);
        assert_eq!(
            movie.kind,
            MediaKind::Movie(Movie {
                trailer: String::new(),
                collection: "Michael Mann Collection".to_string(),
            })
        );

        assert_eq!(movie.persons.len(), 2);
        assert_eq!(movie.persons[1].role, PersonRole::Director);
        assert_eq!(movie.persons[1].order, 1);

        assert_eq!(
            movie.streams,
            [
                MediaStream::new(
                    movie.id,
                    StreamKind::Video(VideoStream {
                        definition: VideoDefinition::Hd1080,
                        aspect_ratio: AspectRatio::Ratio235,
                    })
                ),
                MediaStream::new(
                    movie.id,
                    StreamKind::Audio(AudioStream {
                        language: Language::English,
                        codec: AudioCodec::Ac3,
                        channels: 6,
                    })
                ),
                MediaStream::new(
                    movie.id,
                    StreamKind::Subtitle(SubtitleStream {
                        language: Language::German,
                    })
                ),
            ]
        );

        let names: Vec<String> = movie.files.iter().map(MediaFile::file_name).collect();
        assert_eq!(names, ["fanart.jpg", "Heat (1995).nfo"]);
        assert!(movie.files.iter().all(|v| v.servers == [ServerId::new(2)]));
    }

    #[test]
    fn without_location_uses_default_servers() {
        let media = read(
            "<movieinfo><movielist>\
               <movie><title>A</title></movie>\
               <movie><title></title></movie>\
               <movie><title>B</title></movie>\
             </movielist></movieinfo>",
        );
        assert_eq!(media.len(), 2);
        assert_eq!(media[0].servers, [ServerId::new(1), ServerId::new(2)]);
        assert_eq!(media[1].id, MediaId::new(2));
        // missing definition and ratio fall back to the defaults
        assert_eq!(
            media[0].streams[0].kind,
            StreamKind::Video(VideoStream::default())
        );
    }

    #[test]
    fn should_read_series_with_episodes() {
        let media = read(
            r"<movieinfo><movielist><movie>
                <title>Lost</title>
                <discs>
                  <disc><title>Season 1</title><episodes>
                    <episode><title>Pilot</title><firstairdate><date>2004-09-22</date></firstairdate>
                      <imagefilename>C:\Images\lost_101.jpg</imagefilename></episode>
                    <episode><title>Tabula Rasa</title></episode>
                  </episodes></disc>
                  <disc><title>Extras</title><episodes>
                    <episode><title>Making of</title><seasonnr>Special</seasonnr><episodenr>3</episodenr></episode>
                    <episode><title>Deleted Scenes</title></episode>
                  </episodes></disc>
                </discs>
                <audiotracks><audiotrack><displayname>English</displayname></audiotrack></audiotracks>
            </movie></movielist></movieinfo>",
        );
        assert_eq!(media.len(), 1);
        let series = &media[0];
        assert!(matches!(series.kind, MediaKind::Series(_)));
        assert_eq!(series.nfo_file().unwrap().file_name(), "tvshow.nfo");

        let episodes = series.episodes();
        assert_eq!(episodes.len(), 4);
        let seasons: Vec<Season> = episodes.iter().map(Media::season).collect();
        assert_eq!(
            seasons,
            [
                Season::Number(1),
                Season::Number(1),
                Season::Number(0),
                Season::None
            ]
        );

        let pilot = &episodes[0];
        assert_eq!(pilot.episode_stem().as_deref(), Some("Lost S01E01"));
        assert_eq!(pilot.year, 2004);
        assert_eq!(pilot.streams.len(), series.streams.len());
        assert!(pilot.streams.iter().all(|v| v.owner == pilot.id));
        let names: Vec<String> = pilot.files.iter().map(MediaFile::file_name).collect();
        assert_eq!(names, ["Lost S01E01-thumb.jpg", "Lost S01E01.nfo"]);
        assert!(matches!(pilot.files[0].kind, MediaFileKind::Image(_)));

        assert_eq!(episodes[1].episode_stem().as_deref(), Some("Lost S01E02"));
        assert_eq!(episodes[2].episode_stem().as_deref(), Some("Lost S00E03"));
        assert_eq!(episodes[3].episode_stem().as_deref(), Some("Lost E01"));
    }

    #[test]
    fn unnumbered_episodes_continue_across_discs() {
        let media = read(
            r"<movieinfo><movielist><movie>
                <title>Lost</title>
                <discs>
                  <disc><title>Season 1</title><episodes>
                    <episode><title>Pilot</title></episode>
                    <episode><title>Tabula Rasa</title></episode>
                  </episodes></disc>
                  <disc><title>Season 1</title><episodes>
                    <episode><title>Walkabout</title></episode>
                  </episodes></disc>
                  <disc><title>Season 2</title><episodes>
                    <episode><title>Man of Science</title></episode>
                    <episode><title>Orientation</title><episodenr>3</episodenr></episode>
                    <episode><title>Everybody Hates Hugo</title></episode>
                  </episodes></disc>
                </discs>
            </movie></movielist></movieinfo>",
        );

        let stems: Vec<String> = media[0]
            .episodes()
            .iter()
            .filter_map(Media::episode_stem)
            .collect();
        assert_eq!(
            stems,
            [
                "Lost S01E01",
                "Lost S01E02",
                "Lost S01E03",
                "Lost S02E01",
                "Lost S02E03",
                "Lost S02E04",
            ]
        );
    }
}
