//! GDF text rendering
//!
//! # Format
//!
//! ```text
//! nodedef>name VARCHAR,label VARCHAR
//! a,Foo
//! b,Bar
//! edgedef>node1 VARCHAR,node2 VARCHAR,weight DOUBLE
//! a,b,0.3
//! ```
//!
//! Column order is schema declaration order; only used columns appear.
//! No spaces after commas — downstream GDF consumers are picky about
//! whitespace. Every record line is newline-terminated.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::error::Result;
use crate::model::{AttributeSchema, Graph};

impl Graph {
    /// Write the GDF document to `sink`
    ///
    /// Emits the `nodedef>` header, one line per node in insertion order,
    /// then the `edgedef>` header and one line per edge in insertion
    /// order. Output is byte-identical across calls for an unchanged
    /// graph. The core never opens paths itself; any [`Write`] sink works.
    ///
    /// # Errors
    ///
    /// Returns [`GdfError::Io`](crate::GdfError::Io) when the sink cannot
    /// be written.
    pub fn export<W: Write>(&self, sink: &mut W) -> Result<()> {
        writeln!(sink, "{}", header_line("nodedef>", self.node_schema()))?;
        for node in self.nodes() {
            writeln!(sink, "{}", node.render(self.node_schema()))?;
        }

        writeln!(sink, "{}", header_line("edgedef>", self.edge_schema()))?;
        for edge in self.edges() {
            writeln!(sink, "{}", edge.render(self.edge_schema()))?;
        }

        Ok(())
    }

    /// Render the GDF document to an owned string
    ///
    /// # Errors
    ///
    /// Infallible in practice (the sink is an in-memory buffer), but kept
    /// as a [`Result`] to match [`export`](Graph::export).
    pub fn to_gdf_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.export(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the GDF document to a file
    ///
    /// The document is rendered to an in-memory buffer first and the file
    /// is written in a single operation, so a rendering failure leaves no
    /// partial file behind.
    ///
    /// # Errors
    ///
    /// Returns an error when the destination cannot be created or written.
    pub async fn write_gdf<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();

        let mut buf = Vec::new();
        self.export(&mut buf)?;

        tokio::fs::write(path, buf)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

fn header_line(prefix: &str, schema: &AttributeSchema) -> String {
    let columns = schema
        .exported_header()
        .map(|(name, tag)| format!("{name} {tag}"))
        .collect::<Vec<_>>()
        .join(",");
    format!("{prefix}{columns}")
}
