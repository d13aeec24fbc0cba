use std::fmt::Write as _;

use quick_xml::escape::escape;

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const INDENT: &str = "  ";

/// Incremental writer of one NFO document.
///
/// One tag per line, indented by nesting depth. Text and attribute values are escaped;
/// empty values are not written at all.
#[derive(Debug)]
pub struct NfoWriter {
    out: String,
    open: Vec<String>,
}

impl NfoWriter {
    /// Start a document with the given root tag
    pub fn new(root: &str) -> Self {
        let mut writer = Self {
            out: String::with_capacity(2048),
            open: Vec::new(),
        };
        writer.out.push_str(DECLARATION);
        writer.out.push('\n');
        writer.open(root);
        writer
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.out.push_str(INDENT);
        }
    }

    fn start_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attributes {
            let _ = write!(self.out, " {name}=\"{}\"", escape(value));
        }
        self.out.push('>');
    }

    /// Open a tag that will contain other tags
    pub fn open(&mut self, tag: &str) {
        self.open_with(tag, &[]);
    }

    pub fn open_with(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.indent();
        self.start_tag(tag, attributes);
        self.out.push('\n');
        self.open.push(tag.to_string());
    }

    /// Close the innermost open tag
    pub fn close(&mut self) {
        if let Some(tag) = self.open.pop() {
            self.indent();
            let _ = writeln!(self.out, "</{tag}>");
        }
    }

    /// `<tag>value</tag>`, nothing if `value` is empty
    pub fn tag(&mut self, tag: &str, value: &str) {
        self.tag_with(tag, &[], value);
    }

    pub fn tag_with(&mut self, tag: &str, attributes: &[(&str, &str)], value: &str) {
        if value.is_empty() {
            return;
        }
        self.indent();
        self.start_tag(tag, attributes);
        self.out.push_str(&escape(value));
        let _ = writeln!(self.out, "</{tag}>");
    }

    /// Numeric tag, nothing if `value` is zero
    pub fn number(&mut self, tag: &str, value: u32) {
        if value > 0 {
            self.tag(tag, &value.to_string());
        }
    }

    /// Close all open tags and return the document
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_write_nested_document() {
        let mut nfo = NfoWriter::new("movie");
        nfo.tag("title", "Fast & Furious");
        nfo.tag("plot", "");
        nfo.number("year", 0);
        nfo.number("runtime", 107);
        nfo.open("fanart");
        nfo.tag_with("thumb", &[("season", "1")], "smb://nas/a \"b\".jpg");
        let content = nfo.finish();

        assert_eq!(
            content,
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <movie>\n  \
             <title>Fast &amp; Furious</title>\n  \
             <runtime>107</runtime>\n  \
             <fanart>\n    \
             <thumb season=\"1\">smb://nas/a &quot;b&quot;.jpg</thumb>\n  \
             </fanart>\n\
             </movie>\n"
        );
    }
}
