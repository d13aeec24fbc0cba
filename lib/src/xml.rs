//! A small owned XML tree on top of [`quick_xml`].
//!
//! The catalog export is read once into [`XmlNode`]s, the [`crate::reader`] then looks
//! sub-nodes up by name. Attributes are not kept, Collectorz puts everything into elements.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("XML syntax error at position {position}")]
    Syntax {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },
    #[error("closing tag </{0}> without opening tag")]
    UnexpectedEnd(String),
    #[error("document ended inside of <{0}>")]
    Unclosed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlNode {
    pub name: String,
    /// Trimmed and unescaped text content, including CDATA
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Parse a whole document.
    ///
    /// Returns a nameless document node whose children are the top-level elements.
    pub fn parse(content: &str) -> Result<Self, XmlError> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);
        let decoder = reader.decoder();
        // the bottom of the stack is the document node
        let mut stack: Vec<XmlNode> = vec![XmlNode::default()];

        loop {
            let event = reader.read_event().map_err(|source| XmlError::Syntax {
                position: reader.buffer_position(),
                source,
            })?;
            let syntax = |source: quick_xml::Error| XmlError::Syntax {
                position: reader.buffer_position(),
                source,
            };

            match event {
                Event::Start(ref e) => {
                    let qname = e.name();
                    let name = decoder.decode(qname.as_ref()).map_err(syntax)?;
                    stack.push(XmlNode::new(name.into_owned()));
                }
                Event::Empty(ref e) => {
                    let qname = e.name();
                    let name = decoder.decode(qname.as_ref()).map_err(syntax)?;
                    push_child(&mut stack, XmlNode::new(name.into_owned()));
                }
                Event::End(ref e) => {
                    if stack.len() < 2 {
                        let qname = e.name();
                        let name = decoder.decode(qname.as_ref()).map_err(syntax)?;
                        return Err(XmlError::UnexpectedEnd(name.into_owned()));
                    }
                    // SAFETY: checked above that there is an element on top of the document node
                    let node = stack.pop().unwrap();
                    push_child(&mut stack, node);
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(syntax)?;
                    push_text(&mut stack, text);
                }
                Event::CData(e) => {
                    let text = decoder.decode(&e).map_err(syntax)?;
                    push_text(&mut stack, text);
                }
                Event::Eof => break,
                _ => (), // declarations, comments and processing instructions are of no interest
            }
        }

        if stack.len() > 1 {
            // SAFETY: length checked above
            let open = stack.pop().unwrap();
            return Err(XmlError::Unclosed(open.name));
        }

        Ok(stack.pop().unwrap_or_default())
    }

    /// First direct child with exactly this name
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|v| v.name == name)
    }

    /// All direct children with exactly this name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |v| v.name == name)
    }

    /// Follow a path of child names, taking the first match at each step
    pub fn path(&self, path: &[&str]) -> Option<&XmlNode> {
        path.iter().try_fold(self, |node, name| node.child(name))
    }

    /// Text of the node at `path`, empty if it does not exist
    pub fn path_text(&self, path: &[&str]) -> &str {
        self.path(path).map_or("", |v| v.text.as_str())
    }

    /// Text of a direct child, empty if it does not exist
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map_or("", |v| v.text.as_str())
    }

    /// The `<displayname>` of a child, the way Collectorz stores lookup values
    pub fn display_name(&self, name: &str) -> &str {
        self.path_text(&[name, "displayname"])
    }
}

fn push_child(stack: &mut [XmlNode], node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn push_text(stack: &mut [XmlNode], text: Cow<'_, str>) {
    if let Some(node) = stack.last_mut() {
        node.text.push_str(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_build_tree() {
        let s = r#"<?xml version="1.0" encoding="UTF-8"?>
<movieinfo>
    <movielist>
        <movie>
            <title>Heat &amp; Dust</title>
            <plot><![CDATA[A <b>bold</b> plot]]></plot>
            <genres>
                <genre><displayname>Crime</displayname></genre>
                <genre><displayname>Drama</displayname></genre>
            </genres>
            <empty/>
        </movie>
    </movielist>
</movieinfo>"#;
        let doc = XmlNode::parse(s).unwrap();
        let movie = doc.path(&["movieinfo", "movielist", "movie"]).unwrap();
        assert_eq!(movie.child_text("title"), "Heat & Dust");
        assert_eq!(movie.child_text("plot"), "A <b>bold</b> plot");
        assert!(movie.child("empty").is_some());
        assert_eq!(movie.child_text("missing"), "");

        let genres: Vec<&str> = movie
            .child("genres")
            .unwrap()
            .children_named("genre")
            .map(|v| v.child_text("displayname"))
            .collect();
        assert_eq!(genres, ["Crime", "Drama"]);
    }

    #[test]
    fn lookup_is_case_sensitive_first_match() {
        let doc = XmlNode::parse("<a><Title>upper</Title><title>one</title><title>two</title></a>")
            .unwrap();
        let a = doc.child("a").unwrap();
        assert_eq!(a.child_text("title"), "one");
        assert_eq!(a.child_text("Title"), "upper");
    }

    #[test]
    fn should_fail_on_broken_documents() {
        assert!(matches!(
            XmlNode::parse("<a><b></a>"),
            Err(XmlError::Syntax { .. })
        ));
        assert!(XmlNode::parse("<a><b></b>").is_err());
        assert!(XmlNode::parse("</a>").is_err());
    }
}
