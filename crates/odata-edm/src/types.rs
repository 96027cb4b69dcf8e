// crates/odata-edm/src/types.rs

//! Type references and the closed set of EDM type kinds.

use serde::{Deserialize, Serialize};

/// Reserved value meaning "not set" for unbounded numeric facets
/// (`MaxLength`, `Precision`).
pub const UNDEFINED_VALUE: u32 = u32::MAX;

/// The kind of the type a property, parameter or return value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeKind {
    /// No type information.
    Untyped,
    /// A built-in `Edm.*` type.
    #[default]
    Primitive,
    Enum,
    /// `Collection(...)` of any other kind.
    Collection,
    Complex,
    Entity,
    /// A reference to a related entity or entity collection.
    Navigation {
        /// `ContainsTarget`: the related entities are owned by the source.
        contained: bool,
    },
    /// A function or action used as a type.
    Operation,
}

impl TypeKind {
    /// Returns `true` for `TypeKind::Navigation`, contained or not.
    pub fn is_navigation(&self) -> bool {
        matches!(self, TypeKind::Navigation { .. })
    }
}

/// A reference to a named type, tagged with the kind of that type.
///
/// `name` is the qualified name exactly as it appears in the `Type` attribute,
/// e.g. `Edm.String`, `Sales.Address` or `Collection(Sales.Order)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub kind: TypeKind,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Primitive)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn complex(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Complex)
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Entity)
    }

    /// A non-contained navigation to `target` (an entity type name or a
    /// `Collection(...)` of one).
    pub fn navigation(target: impl Into<String>) -> Self {
        Self::new(target, TypeKind::Navigation { contained: false })
    }

    pub fn contained_navigation(target: impl Into<String>) -> Self {
        Self::new(target, TypeKind::Navigation { contained: true })
    }

    /// `Collection(<element>)`, keeping the element's kind only when it is a
    /// navigation (navigation collections stay navigations).
    pub fn collection_of(element: &TypeRef) -> Self {
        let kind = match element.kind {
            TypeKind::Navigation { .. } => element.kind,
            _ => TypeKind::Collection,
        };
        Self::new(format!("Collection({})", element.name), kind)
    }
}
