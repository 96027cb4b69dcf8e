// crates/odata-edm/src/property.rs

use crate::types::{TypeKind, TypeRef, UNDEFINED_VALUE};
use serde::{Deserialize, Serialize};

/// A member of a complex or entity type.
///
/// A property whose `type_ref.kind` is `TypeKind::Navigation` is a navigation
/// property; its `ContainsTarget` flag lives on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_ref: TypeRef,
    /// Defaults to `true`.
    pub nullable: bool,
    /// Defaults to `true`.
    pub unicode: bool,
    /// `UNDEFINED_VALUE` when not set.
    pub max_length: u32,
    /// `UNDEFINED_VALUE` when not set.
    pub precision: u32,
    /// `0` when not set.
    pub scale: u32,
    /// Empty when not set.
    pub default_value: String,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            name: String::new(),
            type_ref: TypeRef::default(),
            nullable: true,
            unicode: true,
            max_length: UNDEFINED_VALUE,
            precision: UNDEFINED_VALUE,
            scale: 0,
            default_value: String::new(),
        }
    }
}

impl Property {
    /// A property with every facet at its schema default.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            ..Default::default()
        }
    }

    /// A navigation property to `target`.
    pub fn navigation(name: impl Into<String>, target: impl Into<String>, contained: bool) -> Self {
        let type_ref = TypeRef::new(target, TypeKind::Navigation { contained });
        Self::new(name, type_ref)
    }

    pub fn is_navigation(&self) -> bool {
        self.type_ref.kind.is_navigation()
    }

    /// `true` when the property is a contained navigation.
    pub fn contains_target(&self) -> bool {
        matches!(self.type_ref.kind, TypeKind::Navigation { contained: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_schema_defaults() {
        let prop = Property::new("Title", TypeRef::primitive("Edm.String"));
        assert!(prop.nullable);
        assert!(prop.unicode);
        assert_eq!(prop.max_length, UNDEFINED_VALUE);
        assert_eq!(prop.precision, UNDEFINED_VALUE);
        assert_eq!(prop.scale, 0);
        assert!(prop.default_value.is_empty());
        assert!(!prop.is_navigation());
    }

    #[test]
    fn test_navigation_flags() {
        let lines = Property::navigation("Lines", "Collection(Sales.OrderLine)", true);
        assert!(lines.is_navigation());
        assert!(lines.contains_target());

        let customer = Property::navigation("Customer", "Sales.Customer", false);
        assert!(customer.is_navigation());
        assert!(!customer.contains_target());
    }
}
