// crates/odata-edm/src/structured.rs

//! Enumeration and structured (complex / entity) type definitions.

use crate::property::Property;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single `<Member>` of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub is_flags: bool,
    /// Members in declaration order.
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn flags(name: impl Into<String>) -> Self {
        Self {
            is_flags: true,
            ..Self::new(name)
        }
    }

    pub fn add_member(&mut self, name: impl Into<String>, value: i64) -> &mut Self {
        self.members.push(EnumMember {
            name: name.into(),
            value,
        });
        self
    }
}

/// A keyless structured type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplexType {
    pub name: String,
    /// Properties keyed by name, in declaration order.
    pub properties: IndexMap<String, Property>,
}

impl ComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Inserts `property` under its own name. A property with the same name is replaced in place.
    pub fn add_property(&mut self, property: Property) -> &mut Self {
        self.properties.insert(property.name.clone(), property);
        self
    }
}

/// A keyed structured type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityType {
    pub name: String,
    /// Names of the key properties, in key declaration order.
    pub key: Vec<String>,
    /// Properties keyed by name, in declaration order. Includes key and
    /// navigation properties.
    pub properties: IndexMap<String, Property>,
}

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Inserts `property` under its own name.
    pub fn add_property(&mut self, property: Property) -> &mut Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    /// Inserts `property` and appends its name to the key.
    pub fn add_key_property(&mut self, property: Property) -> &mut Self {
        self.key.push(property.name.clone());
        self.add_property(property)
    }

    pub fn is_key(&self, name: &str) -> bool {
        self.key.iter().any(|k| k == name)
    }

    /// Key properties in key declaration order. Names without a matching
    /// property are skipped.
    pub fn key_properties(&self) -> impl Iterator<Item = &Property> {
        self.key.iter().filter_map(|k| self.properties.get(k))
    }

    pub fn navigation_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values().filter(|p| p.is_navigation())
    }
}
