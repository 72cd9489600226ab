//! XML manifest reader.
//!
//! Capture stations write one XML file per procedure. Every leaf element is a
//! field named after the element, except `Video`, `Picture` and `Sound`,
//! whose text is a media file name relative to the manifest. Container
//! elements only group leaves and may nest to any depth:
//!
//! ```xml
//! <Procedure>
//!   <Patient>
//!     <PatID>P001</PatID>
//!     <PatBirth>01/01/1980</PatBirth>
//!   </Patient>
//!   <ORDate>03/11/2021 14:05:30</ORDate>
//!   <Video>clip1.mp4</Video>
//!   <Picture>still1.jpg</Picture>
//! </Procedure>
//! ```

use std::fs;
use std::path::Path;

use endo_model::{FieldMap, MediaFiles, MediaKind};
use quick_xml::Reader;
use quick_xml::escape::{escape, unescape};
use quick_xml::events::Event;
use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::source::{ManifestSource, ParsedManifest};

/// Reads manifests in the capture-station XML layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlManifestSource;

impl XmlManifestSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses manifest text. `origin` only labels errors.
    pub fn parse_str(&self, xml: &str, origin: &Path) -> Result<ParsedManifest> {
        parse_manifest_xml(xml).map_err(|message| ManifestError::xml(origin, message))
    }
}

impl ManifestSource for XmlManifestSource {
    fn load(&self, path: &Path) -> Result<ParsedManifest> {
        let xml = fs::read_to_string(path).map_err(|source| ManifestError::io(path, source))?;
        let manifest = self.parse_str(&xml, path)?;
        debug!(
            path = %path.display(),
            fields = manifest.fields.len(),
            media = manifest.media.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }
}

/// An element that has been opened but not closed yet.
struct OpenElement {
    name: String,
    /// Escaped text content; entity references are kept verbatim and
    /// resolved once the element closes.
    text: String,
    has_children: bool,
}

impl OpenElement {
    fn new(name: String) -> Self {
        Self {
            name,
            text: String::new(),
            has_children: false,
        }
    }
}

#[derive(Default)]
struct ManifestBuilder {
    fields: FieldMap,
    media: MediaFiles<String>,
}

impl ManifestBuilder {
    fn leaf(&mut self, name: &str, value: &str) {
        match MediaKind::from_element_name(name) {
            Some(kind) => self.media.push(kind, value.to_string()),
            None => {
                self.fields.insert(name, value);
            }
        }
    }

    fn finish(self) -> ParsedManifest {
        ParsedManifest {
            fields: self.fields,
            media: self.media,
        }
    }
}

fn parse_manifest_xml(xml: &str) -> std::result::Result<ParsedManifest, String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut builder = ManifestBuilder::default();
    let mut saw_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("XML error at byte {}: {e}", reader.error_position()))?;
        match event {
            Event::Start(element) => {
                if stack.is_empty() && saw_root {
                    return Err("more than one root element".to_string());
                }
                saw_root = true;
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                let name = utf8(element.local_name().as_ref())?.to_string();
                stack.push(OpenElement::new(name));
            }
            Event::Empty(element) => {
                if stack.is_empty() && saw_root {
                    return Err("more than one root element".to_string());
                }
                saw_root = true;
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                builder.leaf(utf8(element.local_name().as_ref())?, "");
            }
            Event::End(_) => {
                let Some(open) = stack.pop() else {
                    return Err("unexpected closing tag".to_string());
                };
                if !open.has_children {
                    let value = unescape(&open.text)
                        .map_err(|e| format!("invalid text in <{}>: {e}", open.name))?;
                    builder.leaf(&open.name, value.trim());
                }
            }
            Event::Text(text) => {
                let text = utf8(&text)?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(text),
                    None if text.trim().is_empty() => {}
                    None => return Err("text outside root element".to_string()),
                }
            }
            Event::CData(data) => {
                let Some(open) = stack.last_mut() else {
                    return Err("text outside root element".to_string());
                };
                open.text.push_str(&escape(utf8(&data)?));
            }
            Event::GeneralRef(entity) => {
                let Some(open) = stack.last_mut() else {
                    return Err("text outside root element".to_string());
                };
                open.text.push('&');
                open.text.push_str(utf8(&entity)?);
                open.text.push(';');
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err("document has no root element".to_string());
    }
    if let Some(open) = stack.last() {
        return Err(format!("unclosed element <{}>", open.name));
    }
    Ok(builder.finish())
}

fn utf8(bytes: &[u8]) -> std::result::Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| format!("invalid UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> ParsedManifest {
        XmlManifestSource::new()
            .parse_str(xml, Path::new("test.xml"))
            .expect("parse manifest")
    }

    #[test]
    fn nested_leaves_become_fields() {
        let manifest = parse(
            r"<Procedure>
                <Patient><PatID>P001</PatID><PatName> Doe^Jane </PatName></Patient>
                <ORDate>03/11/2021 14:05:30</ORDate>
              </Procedure>",
        );
        assert_eq!(manifest.fields.get("PatID"), Some("P001"));
        assert_eq!(manifest.fields.get("PatName"), Some("Doe^Jane"));
        assert_eq!(manifest.fields.get("ORDate"), Some("03/11/2021 14:05:30"));
        assert!(!manifest.fields.contains("Patient"));
        assert!(!manifest.fields.contains("Procedure"));
    }

    #[test]
    fn entities_and_cdata_are_resolved() {
        let manifest = parse(
            "<P><ProcedureDescription>Upper GI &amp; biopsy &#x41;</ProcedureDescription>\
             <Note><![CDATA[a & b < c]]></Note></P>",
        );
        assert_eq!(
            manifest.fields.get("ProcedureDescription"),
            Some("Upper GI & biopsy A")
        );
        assert_eq!(manifest.fields.get("Note"), Some("a & b < c"));
    }

    #[test]
    fn whitespace_around_root_is_allowed() {
        let manifest = parse("<?xml version=\"1.0\"?>\n<P><PatID>P001</PatID></P>\n  \n");
        assert_eq!(manifest.fields.get("PatID"), Some("P001"));
    }

    #[test]
    fn self_closing_leaf_is_empty_field() {
        let manifest = parse("<P><PATSex/><Video/></P>");
        assert_eq!(manifest.fields.get("PATSex"), Some(""));
        assert_eq!(manifest.media.video, vec![String::new()]);
    }

    #[test]
    fn rejects_malformed_documents() {
        let source = XmlManifestSource::new();
        for xml in [
            "",
            "<P><PatID>1</PatID>",
            "<P><PatID>1</Wrong></P>",
            "<P/><Q/>",
            "<P>&bogus;</P>",
            "<P><PatID>P001</PatID></P>trailing garbage",
            "leading<P><PatID>P001</PatID></P>",
            "<P/><![CDATA[x]]>",
            "&amp;<P/>",
        ] {
            let result = source.parse_str(xml, Path::new("bad.xml"));
            assert!(
                matches!(result, Err(ManifestError::Xml { .. })),
                "{xml:?} should fail"
            );
        }
    }
}
