//! Builds the element arena from raw XML using `quick-xml`'s pull reader.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::trace;

use super::{DocumentError, Element};

/// Parses `bytes` into a flat arena of elements, root at index 0.
pub(crate) fn build_tree(bytes: &[u8]) -> Result<Vec<Element>, DocumentError> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut elements: Vec<Element> = Vec::new();
    // Indices of the currently open elements, innermost last.
    let mut open: Vec<usize> = Vec::new();
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| DocumentError::Xml {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;

        match event {
            Event::Start(start) => {
                let index = push_element(&mut elements, &open, &start)?;
                open.push(index);
            }
            Event::Empty(start) => {
                push_element(&mut elements, &open, &start)?;
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(text) => {
                if let Some(&current) = open.last() {
                    let unescaped = text.unescape().map_err(|e| DocumentError::Xml {
                        position: reader.buffer_position() as u64,
                        message: e.to_string(),
                    })?;
                    elements[current].text.push_str(&unescaped);
                }
            }
            Event::CData(data) => {
                if let Some(&current) = open.last() {
                    elements[current]
                        .text
                        .push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
        buf.clear();
    }

    if let Some(&unclosed) = open.last() {
        return Err(DocumentError::Malformed(format!(
            "unexpected end of document inside <{}>",
            elements[unclosed].name
        )));
    }
    if elements.is_empty() {
        return Err(DocumentError::Malformed("no root element".to_string()));
    }

    trace!(elements = elements.len(), "document parsed");
    Ok(elements)
}

/// Appends a new element under the innermost open one.
fn push_element(
    elements: &mut Vec<Element>,
    open: &[usize],
    start: &BytesStart<'_>,
) -> Result<usize, DocumentError> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let index = elements.len();

    match open.last() {
        Some(&parent) => elements[parent].children.push(index),
        None if elements.is_empty() => {}
        None => {
            return Err(DocumentError::Malformed(format!(
                "second root element <{}>",
                name
            )));
        }
    }

    elements.push(Element {
        name,
        ..Element::default()
    });
    Ok(index)
}
