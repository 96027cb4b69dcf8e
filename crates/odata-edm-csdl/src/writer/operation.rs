// crates/odata-edm-csdl/src/writer/operation.rs

//! `Function` / `Action` emission.

use super::CsdlWriter;
use crate::error::CsdlError;
use crate::tree::TreeWriter;
use log::{debug, trace};
use odata_edm::{OperationType, Parameter, TypeKind};

impl<T: TreeWriter> CsdlWriter<'_, T> {
    pub fn write_operation(&mut self, operation: &OperationType) -> Result<(), CsdlError> {
        let element = if operation.is_function { "Function" } else { "Action" };
        trace!("Writing {} {}", element, operation.name);

        self.tree.write_start_element(element, None)?;
        self.attribute("Name", &operation.name)?;
        self.attribute_if_true("IsBound", operation.is_bound)?;
        self.attribute_if_true("IsComposable", operation.is_composable)?;
        self.attribute_if_not_empty("EntitySetPath", &operation.entity_set_path)?;

        for parameter in &operation.parameters {
            self.write_parameter(parameter)?;
        }

        if let Some(return_type) = &operation.return_type {
            self.tree.write_start_element("ReturnType", None)?;
            self.attribute("Type", &return_type.name)?;
            self.tree.write_end_element()?;
        }

        self.tree.write_end_element()
    }

    fn write_parameter(&mut self, parameter: &Parameter) -> Result<(), CsdlError> {
        self.tree.write_start_element("Parameter", None)?;
        self.attribute("Name", &parameter.name)?;
        self.attribute("Type", &parameter.type_ref.name)?;
        self.attribute_if_false("Nullable", parameter.nullable)?;

        // Kind-specific facets go in these arms; none are written yet.
        match parameter.type_ref.kind {
            TypeKind::Primitive => {}
            TypeKind::Enum => {}
            TypeKind::Collection => {}
            TypeKind::Complex => {}
            TypeKind::Entity => {}
            TypeKind::Untyped | TypeKind::Navigation { .. } | TypeKind::Operation => {
                debug!(
                    "Parameter {} has type kind {:?}; no kind-specific output written",
                    parameter.name, parameter.type_ref.kind
                );
            }
        }

        self.tree.write_end_element()
    }
}
