//! Error taxonomy for graph building and export
//!
//! Every error aborts the single operation that raised it; the graph's
//! committed state (collections and used-column sets) is left untouched.

use thiserror::Error;

/// Result alias over [`GdfError`]
pub type Result<T> = std::result::Result<T, GdfError>;

/// Errors raised while building or exporting a graph
#[derive(Debug, Error)]
pub enum GdfError {
    /// Record carries an attribute the schema does not declare
    #[error("attribute `{attribute}` is not declared in the {kind} schema")]
    UndeclaredAttribute {
        /// Offending attribute name
        attribute: String,
        /// Entity kind whose schema rejected it (`"node"` or `"edge"`)
        kind: &'static str,
    },

    /// Required identity or endpoint attribute absent from the record
    #[error("record is missing required attribute `{0}`")]
    MissingRequiredField(&'static str),

    /// A node with the same name already exists
    #[error("node `{0}` already exists")]
    DuplicateNode(String),

    /// An edge with the same ordered endpoint pair already exists
    #[error("edge ({0}, {1}) already exists")]
    DuplicateEdge(String, String),

    /// Edge endpoint does not name a known node
    #[error("edge references unknown node `{0}`")]
    UnknownEndpoint(String),

    /// Destination sink could not be written
    #[error("failed to write GDF output: {0}")]
    Io(#[from] std::io::Error),
}
