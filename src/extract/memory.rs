//! Memory summary (`memory/summary`): total allocated and in use.

use tracing::trace;

use super::Extractor;
use crate::document::Node;

/// Raw memory figures as reported by the server.
///
/// Values are kept as text; the plugin protocol accepts them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySample {
    pub total_use: Option<String>,
    pub in_use: Option<String>,
}

impl MemorySample {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Extractor for MemorySample {
    fn extract(&mut self, node: Node<'_>) {
        for child in node.children() {
            match child.name() {
                "TotalUse" => self.total_use = Some(child.text().trim().to_string()),
                "InUse" => self.in_use = Some(child.text().trim().to_string()),
                _ => {}
            }
        }
        trace!(total_use = ?self.total_use, in_use = ?self.in_use, "memory summary");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn extract_all(xml: &str) -> MemorySample {
        let doc = Document::parse(xml.as_bytes()).unwrap();
        let mut sample = MemorySample::new();
        for node in doc.query("/memory/summary").unwrap() {
            sample.extract(node);
        }
        sample
    }

    #[test]
    fn test_extracts_both_fields() {
        let sample = extract_all(
            "<memory><summary>\
               <TotalUse>123456</TotalUse>\
               <InUse>98765</InUse>\
               <BlockSize>2048</BlockSize>\
             </summary></memory>",
        );
        assert_eq!(sample.total_use.as_deref(), Some("123456"));
        assert_eq!(sample.in_use.as_deref(), Some("98765"));
    }

    #[test]
    fn test_later_occurrence_overwrites() {
        let sample = extract_all(
            "<memory>\
               <summary><TotalUse>1</TotalUse><InUse>2</InUse></summary>\
               <summary><TotalUse>3</TotalUse></summary>\
             </memory>",
        );
        assert_eq!(sample.total_use.as_deref(), Some("3"));
        assert_eq!(sample.in_use.as_deref(), Some("2"));
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let sample = extract_all("<memory><summary><Lost>0</Lost></summary></memory>");
        assert_eq!(sample, MemorySample::new());
    }
}
