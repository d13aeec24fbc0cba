use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

/// The raw value the catalog uses for "no season"
pub const NO_SEASON: &str = "-1";

/// Matches the `(S<n>)` tag embedded in image titles
static SEASON_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(S(\d+)\)").expect("season tag regex is valid"));

/// Matches the spellings of a season number accepted by [`Season::convert`]
static SEASON_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:season|staffel|s)?\s*0*(\d+)$").expect("season token regex is valid")
});

/// Season of an episode or a piece of season artwork.
///
/// [`Season::None`] is written as `-1` and means the item is not nested in a `Season <n>` folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Season {
    #[default]
    None,
    Number(u32),
}

impl Season {
    /// Normalize a raw season token.
    ///
    /// - `"Special"` / `"Specials"` is season `0`
    /// - `"3"`, `"03"`, `"Season 3"`, `"Staffel 3"`, `"S3"` are season `3`
    /// - `"-1"`, empty and anything else is [`Season::None`]
    pub fn convert(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == NO_SEASON || raw.is_empty() {
            return Self::None;
        }
        if raw.eq_ignore_ascii_case("special") || raw.eq_ignore_ascii_case("specials") {
            return Self::Number(0);
        }

        SEASON_TOKEN
            .captures(raw)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map_or(Self::None, Self::Number)
    }

    pub fn number(self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::Number(n) => Some(n),
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// The library sub-folder for this season, `None` for [`Season::None`]
    pub fn folder_name(self) -> Option<String> {
        self.number().map(|n| format!("Season {n}"))
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "{NO_SEASON}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Split a `(S<n>)` season tag out of an image title.
///
/// Returns the title without the tag and the season it named. Only the first tag is used and
/// the whitespace around it is collapsed to a single space.
/// A title without a tag is returned unchanged with season `0`.
pub fn override_season(title: &str) -> (String, Season) {
    let Some(caps) = SEASON_TAG.captures(title) else {
        return (title.to_string(), Season::Number(0));
    };
    let Ok(number) = caps[1].parse::<u32>() else {
        return (title.to_string(), Season::Number(0));
    };
    // SAFETY: group 0 always exists for a successful capture
    let tag = caps.get(0).unwrap();

    let before = title[..tag.start()].trim_end();
    let after = title[tag.end()..].trim_start();
    let stripped = match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_string(),
        (false, true) => before.to_string(),
        (false, false) => format!("{before} {after}"),
    };

    (stripped, Season::Number(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_should_map_specials_to_zero() {
        assert_eq!(Season::convert("Special"), Season::Number(0));
        assert_eq!(Season::convert("specials"), Season::Number(0));
    }

    #[test]
    fn convert_should_read_numbers() {
        assert_eq!(Season::convert("3"), Season::Number(3));
        assert_eq!(Season::convert(" 03 "), Season::Number(3));
        assert_eq!(Season::convert("Season 12"), Season::Number(12));
        assert_eq!(Season::convert("Staffel 2"), Season::Number(2));
        assert_eq!(Season::convert("S4"), Season::Number(4));
    }

    #[test]
    fn convert_should_treat_minus_one_as_no_season() {
        assert_eq!(Season::convert("-1"), Season::None);
        assert_eq!(Season::convert(""), Season::None);
        assert_eq!(Season::convert("Bonus Disc"), Season::None);
        assert_eq!(Season::None.to_string(), "-1");
    }

    #[test]
    fn folder_name_only_for_real_seasons() {
        assert_eq!(Season::None.folder_name(), None);
        assert_eq!(Season::Number(0).folder_name().as_deref(), Some("Season 0"));
        assert_eq!(Season::Number(5).folder_name().as_deref(), Some("Season 5"));
    }

    #[test]
    fn override_season_should_strip_tag() {
        assert_eq!(
            override_season("Season Cover (S2)"),
            ("Season Cover".to_string(), Season::Number(2))
        );
        assert_eq!(
            override_season("Backdrop (S10) alternate"),
            ("Backdrop alternate".to_string(), Season::Number(10))
        );
        assert_eq!(
            override_season("(S1) Poster"),
            ("Poster".to_string(), Season::Number(1))
        );
    }

    #[test]
    fn override_season_without_tag_is_season_zero() {
        assert_eq!(
            override_season("Backdrop"),
            ("Backdrop".to_string(), Season::Number(0))
        );
        // lowercase and missing digits are not the tag convention
        assert_eq!(
            override_season("Cover (s2)"),
            ("Cover (s2)".to_string(), Season::Number(0))
        );
        assert_eq!(
            override_season("Cover (S)"),
            ("Cover (S)".to_string(), Season::Number(0))
        );
    }

    #[test]
    fn override_season_uses_first_tag() {
        assert_eq!(
            override_season("Cover (S1) (S2)"),
            ("Cover (S2)".to_string(), Season::Number(1))
        );
    }
}
