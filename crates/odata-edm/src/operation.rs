// crates/odata-edm/src/operation.rs

use crate::types::TypeRef;
use serde::{Deserialize, Serialize};

/// An argument of a function or action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_ref: TypeRef,
    /// Defaults to `true`.
    pub nullable: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            nullable: true,
        }
    }

    pub fn non_nullable(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }
}

/// A function (side-effect free) or action declared in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationType {
    pub name: String,
    pub is_function: bool,
    pub is_bound: bool,
    pub is_composable: bool,
    /// `EntitySetPath`; empty when not set.
    pub entity_set_path: String,
    /// Parameters in declaration order. For bound operations the first one is
    /// the binding parameter.
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeRef>,
}

impl OperationType {
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_function: true,
            ..Default::default()
        }
    }

    pub fn action(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_function: false,
            ..Default::default()
        }
    }

    pub fn add_parameter(&mut self, parameter: Parameter) -> &mut Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(&mut self, type_ref: TypeRef) -> &mut Self {
        self.return_type = Some(type_ref);
        self
    }

    /// The binding parameter of a bound operation.
    pub fn binding_parameter(&self) -> Option<&Parameter> {
        if self.is_bound {
            self.parameters.first()
        } else {
            None
        }
    }
}
