// crates/odata-edm-csdl/src/config.rs

//! Options controlling the shape of the produced document.

use serde::{Deserialize, Serialize};

/// Order in which non-key regular and navigation properties of an entity
/// type are flushed after the key properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyOrder {
    /// Each group is written in the reverse of its declared order, matching
    /// previously published documents byte for byte.
    #[default]
    Reversed,
    /// Each group keeps its declared order. Changes the wire format.
    Declared,
}

/// Indentation applied to nested elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indent {
    pub character: char,
    pub size: usize,
}

impl Default for Indent {
    fn default() -> Self {
        Self {
            character: ' ',
            size: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Emit `<?xml version="1.0" encoding="utf-8"?>` before the root element.
    pub xml_declaration: bool,
    /// `None` writes the document on a single line.
    pub indent: Option<Indent>,
    pub property_order: PropertyOrder,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            xml_declaration: true,
            indent: None,
            property_order: PropertyOrder::default(),
        }
    }
}

impl WriterConfig {
    /// Default options with two-space indentation.
    pub fn pretty() -> Self {
        Self {
            indent: Some(Indent::default()),
            ..Default::default()
        }
    }
}
