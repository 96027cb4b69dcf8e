// crates/odata-edm-csdl/src/lib.rs

#![doc = "Serializes an OData Entity Data Model into a CSDL/EDMX XML document."]
#![doc = ""]
#![doc = "The writer walks an `odata_edm::Model` once and emits the `edmx:Edmx`"]
#![doc = "envelope, one `Schema` per model schema, and every type, operation and"]
#![doc = "container in the fixed CSDL order. Attributes left at their schema default"]
#![doc = "are omitted."]
#![doc = ""]
#![doc = "- `write_model_to_string`: Serializes a model with the default options."]
#![doc = "- `write_model`: Serializes a model into any `std::io::Write` stream."]
#![doc = "- `CsdlWriter`: The visitor itself, usable over a custom `TreeWriter`."]

// --- Crate Modules ---

mod config;
mod error;
mod tree;
mod writer;

// --- Public API Re-exports ---

pub use config::{Indent, PropertyOrder, WriterConfig};
pub use error::CsdlError;
pub use tree::{TreeWriter, XmlTreeWriter};
pub use writer::{
    CsdlWriter, EDM_NAMESPACE, EDMX_NAMESPACE, write_model, write_model_to_string,
    write_model_to_string_with,
};
