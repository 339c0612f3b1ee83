//! Node entities
//!
//! A node is a named attribute record validated against the graph's node
//! schema. Immutable once constructed; identity is the `name` attribute.

use crate::error::{GdfError, Result};

use super::schema::{AttrValue, AttributeSchema, Record};

/// Named graph entity holding an attribute record
///
/// Two nodes are equal iff their names match; a node also compares equal
/// against a bare name string for lookups.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    record: Record,
}

impl Node {
    /// Validate `record` against the node schema and construct the node
    ///
    /// The identity key is the rendered text of the record's `name` value.
    ///
    /// # Errors
    ///
    /// Returns [`GdfError::UndeclaredAttribute`] for a record key outside
    /// the schema's declared set, and [`GdfError::MissingRequiredField`]
    /// when `name` is absent.
    pub fn new(record: Record, schema: &AttributeSchema) -> Result<Self> {
        for key in record.keys() {
            if !schema.is_declared(key) {
                return Err(GdfError::UndeclaredAttribute {
                    attribute: key.clone(),
                    kind: "node",
                });
            }
        }

        let name = record
            .get("name")
            .ok_or(GdfError::MissingRequiredField("name"))?
            .to_string();

        Ok(Self { name, record })
    }

    /// Identity key
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name, if this node carries it
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.record.get(attribute)
    }

    pub(crate) fn record(&self) -> &Record {
        &self.record
    }

    /// Comma-joined used columns in schema order
    ///
    /// Attributes this node does not carry render as empty fields,
    /// preserving column alignment across heterogeneous nodes.
    #[must_use]
    pub fn render(&self, schema: &AttributeSchema) -> String {
        schema.render_row(&self.record)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[cfg(test)]
mod tests {
    use super::super::schema::TypeTag;
    use super::*;

    fn record(pairs: &[(&str, AttrValue)]) -> Record {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_rejects_undeclared_attribute() {
        let schema = AttributeSchema::node_defaults();
        let result = Node::new(
            record(&[
                ("name", AttrValue::from("a")),
                ("speed", AttrValue::from(3.0)),
            ]),
            &schema,
        );

        match result {
            Err(GdfError::UndeclaredAttribute { attribute, kind }) => {
                assert_eq!(attribute, "speed");
                assert_eq!(kind, "node");
            }
            other => panic!("expected UndeclaredAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_requires_name() {
        let schema = AttributeSchema::node_defaults();
        let result = Node::new(record(&[("label", AttrValue::from("Foo"))]), &schema);

        assert!(matches!(result, Err(GdfError::MissingRequiredField("name"))));
    }

    #[test]
    fn test_render_in_schema_order_with_gaps() {
        let mut schema = AttributeSchema::node_defaults();
        schema.extend(&[("connections", TypeTag::Double)]);
        schema.mark_used(["name", "label", "connections"]);

        let node = Node::new(
            record(&[
                ("name", AttrValue::from("3")),
                ("connections", AttrValue::from(4)),
            ]),
            &schema,
        )
        .unwrap();

        assert_eq!(node.render(&schema), "3,,4");
    }

    #[test]
    fn test_equality_by_name() {
        let schema = AttributeSchema::node_defaults();
        let a1 = Node::new(
            record(&[
                ("name", AttrValue::from("a")),
                ("label", AttrValue::from("first")),
            ]),
            &schema,
        )
        .unwrap();
        let a2 = Node::new(record(&[("name", AttrValue::from("a"))]), &schema).unwrap();
        let b = Node::new(record(&[("name", AttrValue::from("b"))]), &schema).unwrap();

        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(a1, "a");
        assert_ne!(a1, "b");
    }
}
