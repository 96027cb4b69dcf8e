// crates/odata-edm-csdl/src/writer/container.rs

//! `EntityContainer` emission: entity sets, singletons and operation imports.

use super::CsdlWriter;
use crate::error::CsdlError;
use crate::tree::TreeWriter;
use log::trace;
use odata_edm::{EntityContainer, EntitySet, OperationImport, OperationImportKind, Singleton};

impl<T: TreeWriter> CsdlWriter<'_, T> {
    pub fn write_entity_container(&mut self, container: &EntityContainer) -> Result<(), CsdlError> {
        trace!("Writing entity container {}", container.name);
        self.tree.write_start_element("EntityContainer", None)?;
        self.attribute("Name", &container.name)?;

        for entity_set in container.entity_sets.values() {
            self.write_entity_set(entity_set)?;
        }
        for singleton in container.singletons.values() {
            self.write_singleton(singleton)?;
        }
        for import in container.operation_imports.values() {
            self.write_operation_import(import)?;
        }

        self.tree.write_end_element()
    }

    pub fn write_entity_set(&mut self, entity_set: &EntitySet) -> Result<(), CsdlError> {
        self.write_navigation_source(
            "EntitySet",
            &entity_set.name,
            &entity_set.entity_type,
            &entity_set.navigation_bindings,
        )
    }

    pub fn write_singleton(&mut self, singleton: &Singleton) -> Result<(), CsdlError> {
        self.write_navigation_source(
            "Singleton",
            &singleton.name,
            &singleton.entity_type,
            &singleton.navigation_bindings,
        )
    }

    /// Writes an `EntitySet` or `Singleton` with its navigation bindings
    /// (path -> target) in map order.
    fn write_navigation_source<'a>(
        &mut self,
        element: &str,
        name: &str,
        entity_type: &str,
        bindings: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Result<(), CsdlError> {
        self.tree.write_start_element(element, None)?;
        self.attribute("Name", name)?;
        self.attribute("EntityType", entity_type)?;

        for (path, target) in bindings {
            self.tree.write_start_element("NavigationPropertyBinding", None)?;
            self.attribute("Path", path)?;
            self.attribute("Target", target)?;
            self.tree.write_end_element()?;
        }

        self.tree.write_end_element()
    }

    pub fn write_operation_import(&mut self, import: &OperationImport) -> Result<(), CsdlError> {
        let (element, operation_attribute) = match import.kind {
            OperationImportKind::Function => ("FunctionImport", "Function"),
            OperationImportKind::Action => ("ActionImport", "Action"),
        };

        self.tree.write_start_element(element, None)?;
        self.attribute("Name", &import.name)?;
        self.attribute(operation_attribute, &import.operation)?;
        if let Some(entity_set) = &import.entity_set {
            self.attribute_if_not_empty("EntitySet", entity_set)?;
        }
        self.tree.write_end_element()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fragment_config, into_string};
    use crate::tree::XmlTreeWriter;
    use crate::writer::CsdlWriter;
    use odata_edm::{EntityContainer, EntitySet, OperationImport, Singleton};

    fn render(container: &EntityContainer) -> String {
        let config = fragment_config();
        let mut tree = XmlTreeWriter::new(Vec::new(), &config).unwrap();
        CsdlWriter::new(&mut tree, &config)
            .write_entity_container(container)
            .unwrap();
        into_string(tree)
    }

    #[test]
    fn test_container_children_in_fixed_order() {
        let mut container = EntityContainer::new("Default");
        container
            .add_operation_import(OperationImport::action("ResetAll", "Sales.Reset"))
            .add_singleton(Singleton::new("Me", "Sales.Customer"))
            .add_entity_set(EntitySet::new("Orders", "Sales.Order"));

        assert_eq!(
            render(&container),
            concat!(
                r#"<EntityContainer Name="Default">"#,
                r#"<EntitySet Name="Orders" EntityType="Sales.Order"/>"#,
                r#"<Singleton Name="Me" EntityType="Sales.Customer"/>"#,
                r#"<ActionImport Name="ResetAll" Action="Sales.Reset"/>"#,
                r#"</EntityContainer>"#
            )
        );
    }

    #[test]
    fn test_navigation_bindings_in_map_order() {
        let mut orders = EntitySet::new("Orders", "Sales.Order");
        orders.bind("Lines", "OrderLines").bind("Customer", "Customers");
        let mut me = Singleton::new("Me", "Sales.Customer");
        me.bind("Orders", "Orders");

        let mut container = EntityContainer::new("Default");
        container.add_entity_set(orders).add_singleton(me);

        assert_eq!(
            render(&container),
            concat!(
                r#"<EntityContainer Name="Default">"#,
                r#"<EntitySet Name="Orders" EntityType="Sales.Order">"#,
                r#"<NavigationPropertyBinding Path="Lines" Target="OrderLines"/>"#,
                r#"<NavigationPropertyBinding Path="Customer" Target="Customers"/>"#,
                r#"</EntitySet>"#,
                r#"<Singleton Name="Me" EntityType="Sales.Customer">"#,
                r#"<NavigationPropertyBinding Path="Orders" Target="Orders"/>"#,
                r#"</Singleton>"#,
                r#"</EntityContainer>"#
            )
        );
    }

    #[test]
    fn test_function_import_entity_set_only_when_present() {
        let mut container = EntityContainer::new("Default");
        container
            .add_operation_import(
                OperationImport::function("TopSellers", "Sales.TopSellers").with_entity_set("Products"),
            )
            .add_operation_import(OperationImport::function("Count", "Sales.Count"))
            .add_operation_import(OperationImport::function("Blank", "Sales.Blank").with_entity_set(""));

        assert_eq!(
            render(&container),
            concat!(
                r#"<EntityContainer Name="Default">"#,
                r#"<FunctionImport Name="TopSellers" Function="Sales.TopSellers" EntitySet="Products"/>"#,
                r#"<FunctionImport Name="Count" Function="Sales.Count"/>"#,
                r#"<FunctionImport Name="Blank" Function="Sales.Blank"/>"#,
                r#"</EntityContainer>"#
            )
        );
    }
}
