// crates/odata-edm-csdl/src/tree.rs

//! Low-level XML emission used by the CSDL writer.
//!
//! The `TreeWriter` trait is the only surface the model writer talks to.
//! `XmlTreeWriter` implements it on top of `quick_xml::Writer`, keeping the
//! current start tag open until its attributes are complete so that elements
//! without content can be written in their self-closing form.

use crate::config::WriterConfig;
use crate::error::CsdlError;
use log::error;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Element-level XML emission.
///
/// Elements must be closed in the reverse order they were opened, and
/// `finalize` must be called exactly once after the root element is closed.
pub trait TreeWriter {
    /// Starts the document (writes the XML declaration if configured).
    fn begin(&mut self) -> Result<(), CsdlError>;

    /// Flushes the underlying stream. No further calls are allowed afterwards.
    fn finalize(&mut self) -> Result<(), CsdlError>;

    /// Opens `name`. A `namespace` is declared as the default namespace (`xmlns`).
    fn write_start_element(&mut self, name: &str, namespace: Option<&str>) -> Result<(), CsdlError>;

    /// Opens `prefix:name`. A `namespace` is declared as `xmlns:prefix`.
    fn write_start_element_with_prefix(
        &mut self,
        prefix: &str,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<(), CsdlError>;

    /// Closes the current element, self-closing it when it has no content.
    fn write_end_element(&mut self) -> Result<(), CsdlError>;

    /// Closes the current element with an explicit end tag.
    fn write_full_end_element(&mut self) -> Result<(), CsdlError>;

    /// Adds an attribute to the element opened last. When both `prefix` and
    /// `namespace_uri` are given the prefix is declared on the same element.
    fn write_attribute(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace_uri: Option<&str>,
        value: &str,
    ) -> Result<(), CsdlError>;

    /// Writes `text` without escaping.
    fn write_raw(&mut self, text: &str) -> Result<(), CsdlError>;

    /// Writes `text` as escaped character data.
    fn write_string(&mut self, text: &str) -> Result<(), CsdlError>;

    /// Writes `<name>value</name>`.
    fn write_element(&mut self, name: &str, value: &str) -> Result<(), CsdlError> {
        self.write_start_element(name, None)?;
        self.write_string(value)?;
        self.write_full_end_element()
    }

    /// Writes `<prefix:name>value</prefix:name>`.
    fn write_element_with_prefix(&mut self, prefix: &str, name: &str, value: &str) -> Result<(), CsdlError> {
        self.write_start_element_with_prefix(prefix, name, None)?;
        self.write_string(value)?;
        self.write_full_end_element()
    }
}

/// `TreeWriter` over any `std::io::Write` stream.
pub struct XmlTreeWriter<W: Write> {
    writer: Writer<W>,
    xml_declaration: bool,
    /// Start tag whose attributes may still grow.
    pending: Option<BytesStart<'static>>,
    /// Qualified names of the open elements, innermost last.
    open: Vec<String>,
    finalized: bool,
}

impl<W: Write> XmlTreeWriter<W> {
    /// Wraps `inner` according to `config`.
    ///
    /// # Errors
    /// Returns `CsdlError::InvalidConfig` when the indent character is not
    /// ASCII, since the underlying writer repeats it as a single byte.
    pub fn new(inner: W, config: &WriterConfig) -> Result<Self, CsdlError> {
        let writer = match config.indent {
            Some(indent) => {
                let character = u8::try_from(indent.character)
                    .ok()
                    .filter(|c| c.is_ascii())
                    .ok_or_else(|| {
                        error!("Rejected indent character {:?}", indent.character);
                        CsdlError::InvalidConfig {
                            field: "indent.character",
                            reason: format!("{:?} is not an ASCII character", indent.character),
                        }
                    })?;
                Writer::new_with_indent(inner, character, indent.size)
            }
            None => Writer::new(inner),
        };
        Ok(Self {
            writer,
            xml_declaration: config.xml_declaration,
            pending: None,
            open: Vec::new(),
            finalized: false,
        })
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Number of elements currently open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn ensure_active(&self, operation: &'static str) -> Result<(), CsdlError> {
        if self.finalized {
            return Err(self.state_error(operation, "writer already finalized"));
        }
        Ok(())
    }

    fn state_error(&self, operation: &'static str, reason: &'static str) -> CsdlError {
        error!("Tree writer misuse in {}: {} (open elements: {:?})", operation, reason, self.open);
        CsdlError::WriterState { operation, reason }
    }

    /// Writes the pending start tag, if any, as a non-empty start tag.
    fn flush_pending(&mut self) -> Result<(), CsdlError> {
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }

    fn open_element(&mut self, qualified_name: String, xmlns: Option<(String, &str)>) -> Result<(), CsdlError> {
        self.flush_pending()?;
        let mut start = BytesStart::new(qualified_name.clone());
        if let Some((key, uri)) = xmlns {
            start.push_attribute((key.as_str(), uri));
        }
        self.pending = Some(start);
        self.open.push(qualified_name);
        Ok(())
    }

    fn close_element(&mut self, operation: &'static str, allow_empty: bool) -> Result<(), CsdlError> {
        self.ensure_active(operation)?;
        let Some(name) = self.open.pop() else {
            return Err(self.state_error(operation, "no open element"));
        };

        match self.pending.take() {
            Some(start) if allow_empty => {
                self.writer.write_event(Event::Empty(start))?;
            }
            Some(start) => {
                self.writer.write_event(Event::Start(start))?;
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
            None => {
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
        }
        Ok(())
    }
}

impl<W: Write> TreeWriter for XmlTreeWriter<W> {
    fn begin(&mut self) -> Result<(), CsdlError> {
        self.ensure_active("begin")?;
        if self.xml_declaration {
            self.writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), CsdlError> {
        self.ensure_active("finalize")?;
        if !self.open.is_empty() {
            return Err(self.state_error("finalize", "elements are still open"));
        }
        self.writer.get_mut().flush()?;
        self.finalized = true;
        Ok(())
    }

    fn write_start_element(&mut self, name: &str, namespace: Option<&str>) -> Result<(), CsdlError> {
        self.ensure_active("write_start_element")?;
        let xmlns = namespace.map(|uri| ("xmlns".to_string(), uri));
        self.open_element(name.to_string(), xmlns)
    }

    fn write_start_element_with_prefix(
        &mut self,
        prefix: &str,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<(), CsdlError> {
        self.ensure_active("write_start_element_with_prefix")?;
        let xmlns = namespace.map(|uri| (format!("xmlns:{}", prefix), uri));
        self.open_element(format!("{}:{}", prefix, name), xmlns)
    }

    fn write_end_element(&mut self) -> Result<(), CsdlError> {
        self.close_element("write_end_element", true)
    }

    fn write_full_end_element(&mut self) -> Result<(), CsdlError> {
        self.close_element("write_full_end_element", false)
    }

    fn write_attribute(
        &mut self,
        prefix: Option<&str>,
        name: &str,
        namespace_uri: Option<&str>,
        value: &str,
    ) -> Result<(), CsdlError> {
        self.ensure_active("write_attribute")?;
        let Some(mut start) = self.pending.take() else {
            return Err(self.state_error("write_attribute", "no start tag to attach the attribute to"));
        };

        match prefix.filter(|p| !p.is_empty()) {
            Some(prefix) => {
                if let Some(uri) = namespace_uri.filter(|u| !u.is_empty()) {
                    let declaration = format!("xmlns:{}", prefix);
                    start.push_attribute((declaration.as_str(), uri));
                }
                let key = format!("{}:{}", prefix, name);
                start.push_attribute((key.as_str(), value));
            }
            None => start.push_attribute((name, value)),
        }
        self.pending = Some(start);
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<(), CsdlError> {
        self.ensure_active("write_raw")?;
        self.flush_pending()?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(text)))?;
        Ok(())
    }

    fn write_string(&mut self, text: &str) -> Result<(), CsdlError> {
        self.ensure_active("write_string")?;
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }
}
