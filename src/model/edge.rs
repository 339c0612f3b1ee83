//! Edge entities
//!
//! An edge is an attribute record referencing two node names (`node1`,
//! `node2`), validated against the graph's edge schema. Identity is the
//! ordered endpoint pair; whole-record equality is the tiebreaker when a
//! graph allows parallel edges.

use crate::error::{GdfError, Result};

use super::schema::{AttrValue, AttributeSchema, Record};

/// Relation between two node names holding an attribute record
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    node1: String,
    node2: String,
    record: Record,
}

impl Edge {
    /// Validate `record` against the edge schema and construct the edge
    ///
    /// Endpoint existence is the owning graph's concern; this only checks
    /// schema membership and that both endpoint attributes are present.
    ///
    /// # Errors
    ///
    /// Returns [`GdfError::UndeclaredAttribute`] for a record key outside
    /// the schema's declared set, and [`GdfError::MissingRequiredField`]
    /// when `node1` or `node2` is absent.
    pub fn new(record: Record, schema: &AttributeSchema) -> Result<Self> {
        for key in record.keys() {
            if !schema.is_declared(key) {
                return Err(GdfError::UndeclaredAttribute {
                    attribute: key.clone(),
                    kind: "edge",
                });
            }
        }

        let node1 = record
            .get("node1")
            .ok_or(GdfError::MissingRequiredField("node1"))?
            .to_string();
        let node2 = record
            .get("node2")
            .ok_or(GdfError::MissingRequiredField("node2"))?
            .to_string();

        Ok(Self {
            node1,
            node2,
            record,
        })
    }

    /// Ordered endpoint pair `(node1, node2)`
    #[must_use]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.node1, &self.node2)
    }

    /// Attribute value by name, if this edge carries it
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.record.get(attribute)
    }

    pub(crate) fn record(&self) -> &Record {
        &self.record
    }

    /// Comma-joined used columns in schema order, empty fields for
    /// attributes this edge does not carry
    #[must_use]
    pub fn render(&self, schema: &AttributeSchema) -> String {
        schema.render_row(&self.record)
    }
}
