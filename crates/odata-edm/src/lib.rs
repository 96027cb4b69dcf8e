// crates/odata-edm/src/lib.rs

#![doc = "Entity Data Model (EDM) types describing an OData service."]
#![doc = ""]
#![doc = "The model is an arena of named definitions: schemas own their enum, complex"]
#![doc = "and entity types, operations and containers in insertion-ordered maps, and"]
#![doc = "every cross reference (property type, entity set type, binding target) is a"]
#![doc = "qualified name resolved through lookup rather than a live pointer."]
#![doc = ""]
#![doc = "Consumers such as the CSDL writer only ever read a built model."]

// --- Crate Modules ---

mod container;
mod operation;
mod property;
mod schema;
mod structured;
mod types;

// --- Public API Re-exports ---

pub use container::{EntityContainer, EntitySet, OperationImport, OperationImportKind, Singleton};
pub use operation::{OperationType, Parameter};
pub use property::Property;
pub use schema::{Model, Schema};
pub use structured::{ComplexType, EntityType, EnumMember, EnumType};
pub use types::{TypeKind, TypeRef, UNDEFINED_VALUE};
