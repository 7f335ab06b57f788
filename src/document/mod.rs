//! Navigable model of the BIND9 statistics document.
//!
//! The raw XML is parsed once into an owned arena of elements. Callers then
//! select subtrees with absolute element paths and walk their children.
//!
//! ```
//! use bind9stats::document::Document;
//!
//! let doc = Document::parse(b"<isc><bind><memory><InUse>42</InUse></memory></bind></isc>").unwrap();
//! let nodes = doc.query("/isc/bind/memory").unwrap();
//! assert_eq!(nodes.len(), 1);
//! let in_use = nodes[0].children().find(|c| c.name() == "InUse").unwrap();
//! assert_eq!(in_use.text(), "42");
//! ```

mod parser;
mod path;

pub use path::ElementPath;

/// Error type for parsing and querying failures.
#[derive(Debug)]
pub enum DocumentError {
    /// The XML reader rejected the input.
    Xml { position: u64, message: String },
    /// Well-formed XML events that do not form a single-rooted tree.
    Malformed(String),
    /// The query path is not an absolute element path.
    InvalidPath(String),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Xml { position, message } => {
                write!(f, "document not parsed successfully at byte {}: {}", position, message)
            }
            DocumentError::Malformed(msg) => write!(f, "document not parsed successfully: {}", msg),
            DocumentError::InvalidPath(path) => write!(f, "invalid query path '{}'", path),
        }
    }
}

impl std::error::Error for DocumentError {}

/// One element of the arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<usize>,
}

/// A parsed statistics document.
///
/// Elements are stored in document order; index 0 is the root.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Parses raw bytes into a document.
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let elements = parser::build_tree(bytes)?;
        Ok(Self { elements })
    }

    /// Returns the root element.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            index: 0,
        }
    }

    /// Evaluates an absolute element path such as `/isc/bind/statistics`.
    ///
    /// Returns every matching element in document order. An empty result is
    /// not an error.
    pub fn query(&self, path: &str) -> Result<Vec<Node<'_>>, DocumentError> {
        let path = ElementPath::parse(path)?;
        Ok(self.select(&path))
    }

    /// Evaluates an already parsed path.
    pub fn select(&self, path: &ElementPath) -> Vec<Node<'_>> {
        let mut steps = path.steps().iter();
        let Some(first) = steps.next() else {
            return Vec::new();
        };

        let root = self.root();
        let mut current = if root.name() == first {
            vec![root]
        } else {
            Vec::new()
        };

        for step in steps {
            current = current
                .iter()
                .flat_map(|node| node.children().filter(|c| c.name() == step))
                .collect();
            if current.is_empty() {
                break;
            }
        }

        current
    }

    fn element(&self, index: usize) -> &Element {
        &self.elements[index]
    }
}

/// Borrowed handle to one element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    index: usize,
}

impl<'a> Node<'a> {
    /// Local element name (namespace prefix stripped).
    pub fn name(self) -> &'a str {
        &self.doc.element(self.index).name
    }

    /// Concatenated text and CDATA directly inside this element.
    pub fn text(self) -> &'a str {
        &self.doc.element(self.index).text
    }

    /// Iterates over child elements in document order.
    pub fn children(self) -> impl Iterator<Item = Node<'a>> {
        let doc = self.doc;
        doc.element(self.index)
            .children
            .iter()
            .map(move |&index| Node { doc, index })
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("text", &self.text())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<isc version="1.0">
  <bind>
    <statistics version="2.2">
      <server>
        <queries-in>
          <rdtype><name>A</name><counter>100</counter></rdtype>
          <rdtype><name>AAAA</name><counter>50</counter></rdtype>
        </queries-in>
      </server>
      <memory>
        <summary><TotalUse>123456</TotalUse><InUse>98765</InUse></summary>
      </memory>
    </statistics>
  </bind>
</isc>
"#;

    #[test]
    fn test_query_returns_all_matches_in_order() {
        let doc = Document::parse(STATS.as_bytes()).unwrap();
        let nodes = doc
            .query("/isc/bind/statistics/server/queries-in/rdtype")
            .unwrap();

        assert_eq!(nodes.len(), 2);
        let names: Vec<&str> = nodes
            .iter()
            .map(|n| n.children().find(|c| c.name() == "name").unwrap().text())
            .collect();
        assert_eq!(names, vec!["A", "AAAA"]);
    }

    #[test]
    fn test_query_no_match_is_empty() {
        let doc = Document::parse(STATS.as_bytes()).unwrap();
        assert!(doc.query("/isc/bind/statistics/views").unwrap().is_empty());
        assert!(doc.query("/other/bind").unwrap().is_empty());
    }

    #[test]
    fn test_query_invalid_path() {
        let doc = Document::parse(STATS.as_bytes()).unwrap();
        let err = doc.query("isc/bind").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidPath(_)));
    }

    #[test]
    fn test_children_and_text() {
        let doc = Document::parse(STATS.as_bytes()).unwrap();
        let summary = doc.query("/isc/bind/statistics/memory/summary").unwrap();
        assert_eq!(summary.len(), 1);

        let fields: Vec<(&str, &str)> = summary[0]
            .children()
            .map(|c| (c.name(), c.text()))
            .collect();
        assert_eq!(fields, vec![("TotalUse", "123456"), ("InUse", "98765")]);
    }

    #[test]
    fn test_root_and_children() {
        let doc = Document::parse(b"<a><b/><c>x</c></a>").unwrap();
        assert_eq!(doc.root().name(), "a");
        let names: Vec<&str> = doc.root().children().map(|c| c.name()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }
}
