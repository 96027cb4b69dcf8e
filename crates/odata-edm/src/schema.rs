// crates/odata-edm/src/schema.rs

//! The model root and its schemas, plus qualified-name lookup across them.

use crate::container::EntityContainer;
use crate::operation::OperationType;
use crate::structured::{ComplexType, EntityType, EnumType};
use crate::types::TypeKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One namespace of definitions.
///
/// Every map is keyed by the unqualified definition name and iterates in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// The schema namespace, e.g. `Sales`.
    pub name: String,
    pub enum_types: IndexMap<String, EnumType>,
    pub complex_types: IndexMap<String, ComplexType>,
    pub entity_types: IndexMap<String, EntityType>,
    pub operations: IndexMap<String, OperationType>,
    pub containers: IndexMap<String, EntityContainer>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_enum_type(&mut self, enum_type: EnumType) -> &mut Self {
        self.enum_types.insert(enum_type.name.clone(), enum_type);
        self
    }

    pub fn add_complex_type(&mut self, complex_type: ComplexType) -> &mut Self {
        self.complex_types.insert(complex_type.name.clone(), complex_type);
        self
    }

    pub fn add_entity_type(&mut self, entity_type: EntityType) -> &mut Self {
        self.entity_types.insert(entity_type.name.clone(), entity_type);
        self
    }

    pub fn add_operation(&mut self, operation: OperationType) -> &mut Self {
        self.operations.insert(operation.name.clone(), operation);
        self
    }

    pub fn add_container(&mut self, container: EntityContainer) -> &mut Self {
        self.containers.insert(container.name.clone(), container);
        self
    }

    /// `Namespace.name` for a definition in this schema.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}.{}", self.name, name)
    }
}

/// The whole document: a CSDL version and an ordered list of schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Value of `edmx:Edmx/@Version`, e.g. `4.0`.
    pub version: String,
    pub schemas: Vec<Schema>,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            version: "4.0".into(),
            schemas: Vec::new(),
        }
    }
}

impl Model {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            schemas: Vec::new(),
        }
    }

    pub fn add_schema(&mut self, schema: Schema) -> &mut Self {
        self.schemas.push(schema);
        self
    }

    pub fn schema(&self, namespace: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == namespace)
    }

    pub fn find_enum_type(&self, qualified_name: &str) -> Option<&EnumType> {
        let (schema, name) = self.split_qualified(qualified_name)?;
        schema.enum_types.get(name)
    }

    pub fn find_complex_type(&self, qualified_name: &str) -> Option<&ComplexType> {
        let (schema, name) = self.split_qualified(qualified_name)?;
        schema.complex_types.get(name)
    }

    pub fn find_entity_type(&self, qualified_name: &str) -> Option<&EntityType> {
        let (schema, name) = self.split_qualified(qualified_name)?;
        schema.entity_types.get(name)
    }

    pub fn find_operation(&self, qualified_name: &str) -> Option<&OperationType> {
        let (schema, name) = self.split_qualified(qualified_name)?;
        schema.operations.get(name)
    }

    /// Resolves the kind of the type named `qualified_name`.
    ///
    /// `Edm.*` names are primitives and `Collection(...)` names are
    /// collections. Other names are looked up as `Namespace.Name` across the
    /// schemas; `None` when nothing matches.
    pub fn resolve_type_kind(&self, qualified_name: &str) -> Option<TypeKind> {
        if qualified_name.starts_with("Collection(") && qualified_name.ends_with(')') {
            return Some(TypeKind::Collection);
        }
        if qualified_name.starts_with("Edm.") {
            return Some(TypeKind::Primitive);
        }

        let (schema, name) = self.split_qualified(qualified_name)?;
        if schema.enum_types.contains_key(name) {
            Some(TypeKind::Enum)
        } else if schema.complex_types.contains_key(name) {
            Some(TypeKind::Complex)
        } else if schema.entity_types.contains_key(name) {
            Some(TypeKind::Entity)
        } else if schema.operations.contains_key(name) {
            Some(TypeKind::Operation)
        } else {
            None
        }
    }

    /// Splits `Namespace.Name` on the last dot and finds the schema.
    /// Namespaces may themselves contain dots (`Contoso.Sales.Order`).
    fn split_qualified<'a>(&self, qualified_name: &'a str) -> Option<(&Schema, &'a str)> {
        let (namespace, name) = qualified_name.rsplit_once('.')?;
        Some((self.schema(namespace)?, name))
    }
}
