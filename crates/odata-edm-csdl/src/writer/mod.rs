//! Projects an EDM `Model` onto a CSDL/EDMX document.
//!
//! `CsdlWriter` is a read-only visitor: it walks the model once, in document
//! order, and issues `TreeWriter` calls for every node. The only state it
//! keeps is the borrowed tree writer and configuration; scratch buffers used
//! while partitioning entity properties live for the duration of one entity
//! type.

mod container;
mod operation;
mod types;

use crate::config::WriterConfig;
use crate::error::CsdlError;
use crate::tree::{TreeWriter, XmlTreeWriter};
use log::{debug, trace};
use odata_edm::{Model, Schema};
use std::io::Write;

/// Namespace of the `edmx:Edmx` envelope.
pub const EDMX_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edmx";

/// Default namespace of every `Schema` element.
pub const EDM_NAMESPACE: &str = "http://docs.oasis-open.org/odata/ns/edm";

const EDMX_PREFIX: &str = "edmx";

/// Writes CSDL elements for model nodes through a `TreeWriter`.
pub struct CsdlWriter<'w, T: TreeWriter> {
    tree: &'w mut T,
    config: &'w WriterConfig,
}

impl<'w, T: TreeWriter> CsdlWriter<'w, T> {
    pub fn new(tree: &'w mut T, config: &'w WriterConfig) -> Self {
        Self { tree, config }
    }

    /// Writes the complete document for `model` and finalizes the tree writer.
    ///
    /// # Errors
    /// Returns the first `CsdlError` reported by the tree writer. The output is
    /// left partially written in that case.
    pub fn write_model(&mut self, model: &Model) -> Result<(), CsdlError> {
        debug!(
            "Writing EDM model version {} with {} schema(s)",
            model.version,
            model.schemas.len()
        );

        self.tree.begin()?;

        // 1. Envelope
        self.tree
            .write_start_element_with_prefix(EDMX_PREFIX, "Edmx", Some(EDMX_NAMESPACE))?;
        self.attribute("Version", &model.version)?;
        self.tree
            .write_start_element_with_prefix(EDMX_PREFIX, "DataServices", None)?;

        // 2. Schemas, in model order
        for schema in &model.schemas {
            self.write_schema(schema)?;
        }

        self.tree.write_end_element()?;
        self.tree.write_end_element()?;

        // 3. Flush
        self.tree.finalize()?;
        debug!("Finished writing EDM model version {}", model.version);
        Ok(())
    }

    /// Writes one `Schema` element and all of its definitions.
    pub fn write_schema(&mut self, schema: &Schema) -> Result<(), CsdlError> {
        trace!("Writing schema {}", schema.name);
        self.tree.write_start_element("Schema", Some(EDM_NAMESPACE))?;
        self.attribute("Namespace", &schema.name)?;

        for enum_type in schema.enum_types.values() {
            self.write_enum_type(enum_type)?;
        }
        for complex_type in schema.complex_types.values() {
            self.write_complex_type(complex_type)?;
        }
        for entity_type in schema.entity_types.values() {
            self.write_entity_type(entity_type)?;
        }
        for operation in schema.operations.values() {
            self.write_operation(operation)?;
        }
        for container in schema.containers.values() {
            self.write_entity_container(container)?;
        }

        self.tree.write_end_element()
    }

    /// Writes an unprefixed attribute on the element opened last.
    fn attribute(&mut self, name: &str, value: &str) -> Result<(), CsdlError> {
        self.tree.write_attribute(None, name, None, value)
    }

    /// Writes `name="true"` when `flag` is set and nothing otherwise.
    fn attribute_if_true(&mut self, name: &str, flag: bool) -> Result<(), CsdlError> {
        if flag {
            self.attribute(name, "true")?;
        }
        Ok(())
    }

    /// Writes `name="false"` when `flag` is cleared and nothing otherwise.
    fn attribute_if_false(&mut self, name: &str, flag: bool) -> Result<(), CsdlError> {
        if !flag {
            self.attribute(name, "false")?;
        }
        Ok(())
    }

    /// Writes `name="value"` unless `value` is empty.
    fn attribute_if_not_empty(&mut self, name: &str, value: &str) -> Result<(), CsdlError> {
        if !value.is_empty() {
            self.attribute(name, value)?;
        }
        Ok(())
    }
}

/// Serializes `model` into `out` and returns the stream.
///
/// # Errors
/// Returns `CsdlError::InvalidConfig` before anything is written when
/// `config` cannot be honoured, and `CsdlError::Io` when the stream fails; the
/// stream is then unusable.
pub fn write_model<W: Write>(model: &Model, out: W, config: &WriterConfig) -> Result<W, CsdlError> {
    let mut tree = XmlTreeWriter::new(out, config)?;
    CsdlWriter::new(&mut tree, config).write_model(model)?;
    Ok(tree.into_inner())
}

/// Serializes `model` into a `String` with the default configuration.
pub fn write_model_to_string(model: &Model) -> Result<String, CsdlError> {
    write_model_to_string_with(model, &WriterConfig::default())
}

/// Serializes `model` into a `String` with `config`.
pub fn write_model_to_string_with(model: &Model, config: &WriterConfig) -> Result<String, CsdlError> {
    let buffer = write_model(model, Vec::new(), config)?;
    Ok(String::from_utf8(buffer)?)
}
