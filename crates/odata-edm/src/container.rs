// crates/odata-edm/src/container.rs

//! Entity containers and the addressable resources they expose.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An addressable collection of entities.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitySet {
    pub name: String,
    /// Qualified entity type name.
    pub entity_type: String,
    /// Navigation property path -> target entity set or singleton.
    pub navigation_bindings: IndexMap<String, String>,
}

impl EntitySet {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            navigation_bindings: IndexMap::new(),
        }
    }

    pub fn bind(&mut self, path: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.navigation_bindings.insert(path.into(), target.into());
        self
    }
}

/// A single addressable entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Singleton {
    pub name: String,
    pub entity_type: String,
    pub navigation_bindings: IndexMap<String, String>,
}

impl Singleton {
    pub fn new(name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entity_type: entity_type.into(),
            navigation_bindings: IndexMap::new(),
        }
    }

    pub fn bind(&mut self, path: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.navigation_bindings.insert(path.into(), target.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationImportKind {
    Function,
    Action,
}

/// A container-level exposure of a schema operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationImport {
    pub name: String,
    pub kind: OperationImportKind,
    /// Qualified name of the imported function or action.
    pub operation: String,
    /// Entity set returned by the operation, if any.
    pub entity_set: Option<String>,
}

impl OperationImport {
    pub fn function(name: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: OperationImportKind::Function,
            operation: operation.into(),
            entity_set: None,
        }
    }

    pub fn action(name: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: OperationImportKind::Action,
            operation: operation.into(),
            entity_set: None,
        }
    }

    pub fn with_entity_set(self, entity_set: impl Into<String>) -> Self {
        Self {
            entity_set: Some(entity_set.into()),
            ..self
        }
    }
}

/// The service root: entity sets, singletons and operation imports.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityContainer {
    pub name: String,
    pub entity_sets: IndexMap<String, EntitySet>,
    pub singletons: IndexMap<String, Singleton>,
    pub operation_imports: IndexMap<String, OperationImport>,
}

impl EntityContainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_entity_set(&mut self, entity_set: EntitySet) -> &mut Self {
        self.entity_sets.insert(entity_set.name.clone(), entity_set);
        self
    }

    pub fn add_singleton(&mut self, singleton: Singleton) -> &mut Self {
        self.singletons.insert(singleton.name.clone(), singleton);
        self
    }

    pub fn add_operation_import(&mut self, import: OperationImport) -> &mut Self {
        self.operation_imports.insert(import.name.clone(), import);
        self
    }
}
