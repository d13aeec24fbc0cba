//! Turn a parsed Collectorz export into the entity model.
//!
//! Every entity that can be read implements [`FromXml`]. Reading never fails on missing or
//! unrecognized optional data, those fall back to documented defaults; only a document that
//! is not a Collectorz catalog at all is an error.

mod file;
mod media;
mod person;
mod stream;

use crate::config::Configuration;
use crate::model::{Media, MediaId, ServerId};
use crate::xml::XmlNode;

/// Root element of a Collectorz movie export
const CATALOG_ROOT: &str = "movieinfo";
const CATALOG_LIST: &str = "movielist";
const CATALOG_ITEM: &str = "movie";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("not a Collectorz catalog, expected root element <{CATALOG_ROOT}>")]
    MissingRoot,
}

/// State shared while reading one catalog
#[derive(Debug)]
pub struct ReadContext<'a> {
    pub config: &'a Configuration,
    /// The media currently being read, set as owner of everything read below it
    pub owner: MediaId,
    /// Servers of the current media, inherited by its files
    pub servers: Vec<ServerId>,
    next_id: u32,
}

impl<'a> ReadContext<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self {
            config,
            owner: MediaId::default(),
            servers: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next unused [`MediaId`]
    pub fn allocate_id(&mut self) -> MediaId {
        let id = MediaId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// An entity that can be read from a catalog node.
///
/// Returns `None` if the node does not describe anything this entity can represent,
/// like a link of an unsupported kind.
pub trait FromXml: Sized {
    fn read_from_xml(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Option<Self>;
}

/// Read all media of a parsed export document, in catalog order
pub fn read_catalog(document: &XmlNode, config: &Configuration) -> Result<Vec<Media>, ReadError> {
    let root = document.child(CATALOG_ROOT).ok_or(ReadError::MissingRoot)?;
    let Some(list) = root.child(CATALOG_LIST) else {
        warn!("Catalog has no <{CATALOG_LIST}>, nothing to convert");
        return Ok(Vec::new());
    };

    let mut ctx = ReadContext::new(config);
    let media: Vec<Media> = list
        .children_named(CATALOG_ITEM)
        .filter_map(|node| Media::read_from_xml(node, &mut ctx))
        .collect();
    info!("Read {} media from catalog", media.len());

    Ok(media)
}

/// The `item` children of the `list` child, the way Collectorz nests collections
pub(crate) fn list_items<'a>(
    node: &'a XmlNode,
    list: &'a str,
    item: &'a str,
) -> impl Iterator<Item = &'a XmlNode> + 'a {
    node.child(list)
        .into_iter()
        .flat_map(move |v| v.children_named(item))
}

/// Lenient number parsing: leading digits only, `0` if there are none
pub(crate) fn parse_u32(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Lenient float parsing, accepting a decimal comma; `0.0` if unparsable
pub(crate) fn parse_f32(text: &str) -> f32 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lenient_numbers() {
        assert_eq!(parse_u32(" 136 min"), 136);
        assert_eq!(parse_u32("n/a"), 0);
        assert!((parse_f32("7,5") - 7.5).abs() < f32::EPSILON);
        assert!(parse_f32("").abs() < f32::EPSILON);
    }

    #[test]
    fn missing_root_is_an_error() {
        let doc = XmlNode::parse("<playlist></playlist>").unwrap();
        assert_eq!(
            read_catalog(&doc, &Configuration::default()),
            Err(ReadError::MissingRoot)
        );
    }

    #[test]
    fn missing_list_is_empty() {
        let doc = XmlNode::parse("<movieinfo></movieinfo>").unwrap();
        assert_eq!(read_catalog(&doc, &Configuration::default()), Ok(Vec::new()));
    }
}
