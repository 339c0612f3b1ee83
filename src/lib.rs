//! gdf-graph: embedded attributed-graph builder with GDF text export
//!
//! # Overview
//!
//! gdf-graph builds a small attributed graph in memory (nodes and edges with
//! typed, extensible attribute schemas) and serializes it as a GDF document:
//! a node table followed by an edge table, each preceded by a type header.
//! GDF is the tabular text format consumed by Gephi and GUESS.
//!
//! # Quick Start
//!
//! ```
//! use gdf_graph::{AttrValue, Graph};
//!
//! # fn main() -> gdf_graph::Result<()> {
//! let mut graph = Graph::new();
//! graph.add_node(&[
//!     ("name", AttrValue::from("main")),
//!     ("label", AttrValue::from("Entry point")),
//! ])?;
//! graph.add_node(&[("name", AttrValue::from("parse_args"))])?;
//! graph.add_link(&[
//!     ("node1", AttrValue::from("main")),
//!     ("node2", AttrValue::from("parse_args")),
//!     ("weight", AttrValue::from(1.0)),
//! ])?;
//!
//! let mut out = Vec::new();
//! graph.export(&mut out)?;
//! assert!(out.starts_with(b"nodedef>"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Model**: attribute schemas, nodes, edges and the owning [`Graph`]
//! - **Validation**: declared-key membership, unique node names, endpoint
//!   integrity, configurable duplicate-edge policy
//! - **Export**: deterministic GDF rendering into any [`std::io::Write`]
//!   sink, plus an async file convenience wrapper

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod export;
pub mod model;

// Re-export core types
pub use error::{GdfError, Result};
pub use model::{AttrValue, AttributeSchema, Edge, Graph, Node, Record, TypeTag};
