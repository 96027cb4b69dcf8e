// crates/odata-edm-csdl/src/writer/types.rs

//! `EnumType`, `ComplexType` and `EntityType` emission.

use super::CsdlWriter;
use crate::config::PropertyOrder;
use crate::error::CsdlError;
use crate::tree::TreeWriter;
use log::trace;
use odata_edm::{ComplexType, EntityType, EnumType, Property, UNDEFINED_VALUE};

impl<T: TreeWriter> CsdlWriter<'_, T> {
    pub fn write_enum_type(&mut self, enum_type: &EnumType) -> Result<(), CsdlError> {
        trace!("Writing enum type {}", enum_type.name);
        self.tree.write_start_element("EnumType", None)?;
        self.attribute("Name", &enum_type.name)?;
        self.attribute_if_true("IsFlags", enum_type.is_flags)?;

        for member in &enum_type.members {
            self.tree.write_start_element("Member", None)?;
            self.attribute("Name", &member.name)?;
            self.attribute("Value", &member.value.to_string())?;
            self.tree.write_end_element()?;
        }

        self.tree.write_end_element()
    }

    pub fn write_complex_type(&mut self, complex_type: &ComplexType) -> Result<(), CsdlError> {
        trace!("Writing complex type {}", complex_type.name);
        self.tree.write_start_element("ComplexType", None)?;
        self.attribute("Name", &complex_type.name)?;

        for property in complex_type.properties.values() {
            self.write_property(property)?;
        }

        self.tree.write_end_element()
    }

    /// Writes an `EntityType`: the `Key`, then key properties at their declared
    /// position, then the buffered regular properties, then the buffered
    /// navigation properties.
    pub fn write_entity_type(&mut self, entity_type: &EntityType) -> Result<(), CsdlError> {
        trace!("Writing entity type {}", entity_type.name);
        self.tree.write_start_element("EntityType", None)?;
        self.attribute("Name", &entity_type.name)?;

        self.tree.write_start_element("Key", None)?;
        for key_name in &entity_type.key {
            self.tree.write_start_element("PropertyRef", None)?;
            self.attribute("Name", key_name)?;
            self.tree.write_end_element()?;
        }
        self.tree.write_end_element()?;

        let mut regular: Vec<&Property> = Vec::new();
        let mut navigation: Vec<&Property> = Vec::new();

        for (name, property) in &entity_type.properties {
            if entity_type.is_key(name) {
                self.write_property(property)?;
            } else if property.is_navigation() {
                navigation.push(property);
            } else {
                regular.push(property);
            }
        }

        // Buffers behave as stacks unless declared order was requested.
        if self.config.property_order == PropertyOrder::Reversed {
            regular.reverse();
            navigation.reverse();
        }

        for property in regular {
            self.write_property(property)?;
        }
        for property in navigation {
            self.write_navigation_property(property)?;
        }

        self.tree.write_end_element()
    }

    /// Writes a `Property` element, omitting every facet left at its default.
    pub(crate) fn write_property(&mut self, property: &Property) -> Result<(), CsdlError> {
        self.tree.write_start_element("Property", None)?;
        self.attribute("Name", &property.name)?;
        self.attribute("Type", &property.type_ref.name)?;
        self.attribute_if_false("Nullable", property.nullable)?;
        self.attribute_if_false("Unicode", property.unicode)?;
        if property.max_length != UNDEFINED_VALUE {
            self.attribute("MaxLength", &property.max_length.to_string())?;
        }
        if property.precision != UNDEFINED_VALUE {
            self.attribute("Precision", &property.precision.to_string())?;
        }
        if property.scale != 0 {
            self.attribute("Scale", &property.scale.to_string())?;
        }
        self.attribute_if_not_empty("DefaultValue", &property.default_value)?;
        self.tree.write_end_element()
    }

    fn write_navigation_property(&mut self, property: &Property) -> Result<(), CsdlError> {
        self.tree.write_start_element("NavigationProperty", None)?;
        self.attribute("Name", &property.name)?;
        self.attribute("Type", &property.type_ref.name)?;
        self.attribute_if_false("Nullable", property.nullable)?;
        self.attribute_if_true("ContainsTarget", property.contains_target())?;
        self.tree.write_end_element()
    }
}
