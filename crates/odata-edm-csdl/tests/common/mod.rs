// crates/odata-edm-csdl/tests/common/mod.rs

//! Shared helpers for the integration tests: fixtures, a sample model and a
//! minimal element tree built from the produced XML.

#![allow(dead_code)]

use odata_edm::{
    ComplexType, EntityContainer, EntitySet, EntityType, EnumType, Model, OperationImport,
    OperationType, Parameter, Property, Schema, Singleton, TypeRef,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::PathBuf;

/// Installs a test logger once so `RUST_LOG=trace` shows writer output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper function to load a test file from the `tests/data/` directory.
pub fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// One parsed XML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attr_names(&self) -> Vec<&str> {
        self.attributes.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child<'a>(&'a self, name: &'a str) -> &'a Node {
        self.children_named(name)
            .next()
            .unwrap_or_else(|| panic!("<{}> has no <{}> child", self.name, name))
    }

    /// The child `name` whose `Name` attribute equals `value`.
    pub fn child_by_name<'a>(&'a self, name: &'a str, value: &str) -> &'a Node {
        self.children_named(name)
            .find(|c| c.attr("Name") == Some(value))
            .unwrap_or_else(|| panic!("<{}> has no <{} Name=\"{}\">", self.name, name, value))
    }

    /// `(element, Name)` for every child, in document order.
    pub fn child_summary(&self) -> Vec<(&str, &str)> {
        self.children
            .iter()
            .map(|c| (c.name.as_str(), c.attr("Name").unwrap_or("")))
            .collect()
    }
}

fn node_from_start(start: &BytesStart<'_>) -> Node {
    let attributes = start
        .attributes()
        .map(|attr| {
            let attr = attr.expect("attribute should be well formed");
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .expect("attribute value should unescape")
                .into_owned();
            (key, value)
        })
        .collect();
    Node {
        name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes,
        children: Vec::new(),
    }
}

/// Parses `xml` and returns its root element. Panics on malformed XML or
/// unbalanced tags.
pub fn parse_tree(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event().expect("produced XML should parse") {
            Event::Start(e) => stack.push(node_from_start(&e)),
            Event::Empty(e) => {
                let node = node_from_start(&e);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::End(_) => {
                let node = stack.pop().expect("end tag without start tag");
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    root.expect("document has no root element")
}

/// The `Schema` elements below `edmx:Edmx/edmx:DataServices`.
pub fn schemas(root: &Node) -> Vec<&Node> {
    assert_eq!(root.name, "edmx:Edmx");
    root.child("edmx:DataServices")
        .children_named("Schema")
        .collect()
}

/// A small but complete sales model touching every node type.
pub fn sales_model() -> Model {
    let mut schema = Schema::new("Sales");

    let mut color = EnumType::flags("Color");
    color.add_member("Red", 1).add_member("Green", 2);

    let mut address = ComplexType::new("Address");
    address
        .add_property(Property::new("Street", TypeRef::primitive("Edm.String")))
        .add_property(Property {
            max_length: 10,
            ..Property::new("Zip", TypeRef::primitive("Edm.String"))
        });

    let mut customer = EntityType::new("Customer");
    customer
        .add_key_property(Property {
            nullable: false,
            ..Property::new("Id", TypeRef::primitive("Edm.Int32"))
        })
        .add_property(Property::new("Name", TypeRef::primitive("Edm.String")))
        .add_property(Property::new("Address", TypeRef::complex("Sales.Address")))
        .add_property(Property::navigation("Orders", "Collection(Sales.Order)", false));

    let mut order = EntityType::new("Order");
    order
        .add_key_property(Property {
            nullable: false,
            ..Property::new("Region", TypeRef::primitive("Edm.String"))
        })
        .add_key_property(Property {
            nullable: false,
            ..Property::new("Number", TypeRef::primitive("Edm.Int64"))
        })
        .add_property(Property {
            precision: 18,
            scale: 2,
            ..Property::new("Total", TypeRef::primitive("Edm.Decimal"))
        })
        .add_property(Property::navigation("Customer", "Sales.Customer", false));

    let mut top = OperationType::function("TopCustomers");
    top.is_composable = true;
    top.add_parameter(Parameter::new("count", TypeRef::primitive("Edm.Int32")).non_nullable())
        .returns(TypeRef::collection_of(&TypeRef::entity("Sales.Customer")));

    let mut paint = OperationType::action("Paint");
    paint.is_bound = true;
    paint
        .add_parameter(Parameter::new("order", TypeRef::entity("Sales.Order")).non_nullable())
        .add_parameter(Parameter::new("color", TypeRef::enumeration("Sales.Color")));

    let mut customers = EntitySet::new("Customers", "Sales.Customer");
    customers.bind("Orders", "Orders");
    let mut orders = EntitySet::new("Orders", "Sales.Order");
    orders.bind("Customer", "Customers");
    let mut me = Singleton::new("Me", "Sales.Customer");
    me.bind("Orders", "Orders");

    let mut container = EntityContainer::new("Default");
    container
        .add_entity_set(customers)
        .add_entity_set(orders)
        .add_singleton(me)
        .add_operation_import(
            OperationImport::function("TopCustomers", "Sales.TopCustomers").with_entity_set("Customers"),
        );

    schema
        .add_enum_type(color)
        .add_complex_type(address)
        .add_entity_type(customer)
        .add_entity_type(order)
        .add_operation(top)
        .add_operation(paint)
        .add_container(container);

    let mut model = Model::new("4.0");
    model.add_schema(schema);
    model
}
