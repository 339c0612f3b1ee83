//! Attribute schemas and tagged values
//!
//! A schema is an ordered mapping from attribute name to declared column
//! type, plus the subset of names that has appeared on at least one
//! committed entity. Declaration order drives column order in the GDF
//! output; only used columns are emitted.
//!
//! Each [`Graph`](super::Graph) owns one schema per entity kind. Schemas
//! only ever grow: extension may retag an existing column but never removes
//! one, and a name never leaves the used set.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Column type tag emitted in GDF type headers
///
/// The built-in tags cover the stock GDF column types. Callers may
/// introduce further tag strings via [`Custom`](TypeTag::Custom); they are
/// emitted verbatim. Value/tag consistency is never checked — a `DOUBLE`
/// column happily renders whatever text its values produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    /// Free-form text column (`VARCHAR`)
    Varchar,
    /// Numeric column (`DOUBLE`)
    Double,
    /// Boolean column (`BOOLEAN`)
    Boolean,
    /// Caller-supplied tag string, emitted as-is
    Custom(String),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Varchar => f.write_str("VARCHAR"),
            Self::Double => f.write_str("DOUBLE"),
            Self::Boolean => f.write_str("BOOLEAN"),
            Self::Custom(tag) => f.write_str(tag),
        }
    }
}

/// Attribute value carried by a node or edge record
///
/// Rendered via [`Display`](fmt::Display) into the GDF field text:
/// booleans as `true`/`false`, numbers via the standard float formatting
/// (`2.0` renders as `2`, `0.3` as `0.3`).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text value
    Str(String),
    /// Numeric value
    Double(f64),
    /// Boolean value
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Double(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Double(f64::from(value))
    }
}

impl From<i64> for AttrValue {
    #[allow(clippy::cast_precision_loss)] // Attribute values are display-only
    fn from(value: i64) -> Self {
        Self::Double(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Attribute record supplied when constructing a node or edge
pub type Record = HashMap<String, AttrValue>;

/// Ordered attribute declarations plus the used subset for one entity kind
///
/// # Example
///
/// ```
/// use gdf_graph::{AttributeSchema, TypeTag};
///
/// let mut schema = AttributeSchema::node_defaults();
/// schema.extend(&[("connections", TypeTag::Double)]);
/// assert!(schema.is_declared("connections"));
///
/// // Nothing is used until an entity carries it
/// assert_eq!(schema.exported_header().count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    /// Declaration order; drives header and column order
    declared: Vec<(String, TypeTag)>,

    /// Names that appeared on at least one committed entity.
    /// Always a subset of the declared names.
    used: HashSet<String>,
}

impl AttributeSchema {
    /// Built-in node columns (`name`, `label`, `class`, visibility and
    /// geometry attributes, `color`)
    #[must_use]
    pub fn node_defaults() -> Self {
        Self::with_declared(&[
            ("name", TypeTag::Varchar),
            ("label", TypeTag::Varchar),
            ("class", TypeTag::Varchar),
            ("visible", TypeTag::Boolean),
            ("labelvisible", TypeTag::Boolean),
            ("height", TypeTag::Double),
            ("x", TypeTag::Double),
            ("y", TypeTag::Double),
            ("width", TypeTag::Double),
            ("color", TypeTag::Varchar),
        ])
    }

    /// Built-in edge columns (`node1`, `node2`, `weight`, `directed`,
    /// `color`)
    #[must_use]
    pub fn edge_defaults() -> Self {
        Self::with_declared(&[
            ("node1", TypeTag::Varchar),
            ("node2", TypeTag::Varchar),
            ("weight", TypeTag::Double),
            ("directed", TypeTag::Boolean),
            ("color", TypeTag::Varchar),
        ])
    }

    fn with_declared(entries: &[(&str, TypeTag)]) -> Self {
        let mut schema = Self {
            declared: Vec::new(),
            used: HashSet::new(),
        };
        schema.extend(entries);
        schema
    }

    /// Merge new declarations into the schema
    ///
    /// An existing name keeps its position but takes the new type tag; new
    /// names are appended in the order given. Declarations are never
    /// removed, so extension cannot invalidate already-committed entities.
    pub fn extend(&mut self, entries: &[(&str, TypeTag)]) {
        for (name, tag) in entries {
            match self
                .declared
                .iter_mut()
                .find(|(existing, _)| existing.as_str() == *name)
            {
                Some((_, slot)) => *slot = tag.clone(),
                None => self.declared.push(((*name).to_string(), tag.clone())),
            }
        }
    }

    /// Whether `name` is a declared attribute
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|(existing, _)| existing == name)
    }

    /// Whether `name` has appeared on at least one committed entity
    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Record that these attributes appeared on a committed entity
    ///
    /// Undeclared names are ignored, keeping the used set a subset of the
    /// declared set.
    pub fn mark_used<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            if self.is_declared(name) {
                self.used.insert(name.to_string());
            }
        }
    }

    /// All declared columns in declaration order
    pub fn declared(&self) -> impl Iterator<Item = (&str, &TypeTag)> {
        self.declared.iter().map(|(name, tag)| (name.as_str(), tag))
    }

    /// Used columns in declaration order
    ///
    /// This is the header view: stable across calls for an unchanged
    /// schema, so repeated exports produce identical output.
    pub fn exported_header(&self) -> impl Iterator<Item = (&str, &TypeTag)> {
        self.declared
            .iter()
            .filter(|(name, _)| self.used.contains(name))
            .map(|(name, tag)| (name.as_str(), tag))
    }

    /// Render a record as one comma-joined row over the used columns
    ///
    /// Attributes the record does not carry render as empty fields, keeping
    /// columns aligned across heterogeneous entities.
    pub(crate) fn render_row(&self, record: &Record) -> String {
        self.exported_header()
            .map(|(name, _)| {
                record
                    .get(name)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
