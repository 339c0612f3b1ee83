//! Simple example demonstrating gdf-graph usage
//!
//! Run with: cargo run --example build_and_export

use anyhow::Result;
use gdf_graph::{AttrValue, Graph, TypeTag};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Build a small network with custom node columns
    println!("📊 Building network...");
    let mut graph = Graph::with_schemas(
        &[("type", TypeTag::Varchar), ("connections", TypeTag::Double)],
        &[],
        true, // parallel edges allowed
    );

    graph.add_node(&[
        ("name", AttrValue::from("1")),
        ("label", AttrValue::from("Foo")),
        ("type", AttrValue::from("AP")),
        ("connections", AttrValue::from(2)),
    ])?;
    graph.add_node(&[
        ("name", AttrValue::from("2")),
        ("label", AttrValue::from("Bar")),
        ("type", AttrValue::from("cP")),
        ("connections", AttrValue::from(2)),
    ])?;
    graph.add_node(&[
        ("name", AttrValue::from("3")),
        ("label", AttrValue::from("Qux")),
        ("connections", AttrValue::from(4)),
    ])?;

    graph.add_link(&[
        ("node1", AttrValue::from("1")),
        ("node2", AttrValue::from("2")),
        ("weight", AttrValue::from(0.3)),
    ])?;
    graph.add_link(&[
        ("node1", AttrValue::from("2")),
        ("node2", AttrValue::from("1")),
        ("weight", AttrValue::from(0.4)),
    ])?;
    graph.add_link(&[
        ("node1", AttrValue::from("1")),
        ("node2", AttrValue::from("3")),
        ("weight", AttrValue::from(0.1)),
    ])?;

    println!(
        "  ✅ Network built: {} nodes, {} edges\n",
        graph.num_nodes(),
        graph.num_edges()
    );

    // 2. Render to the console
    println!("🔍 GDF document:");
    println!("{}", graph.to_gdf_string()?);

    // 3. Write the file
    let path = std::env::temp_dir().join("saida.gdf");
    graph.write_gdf(&path).await?;
    println!("💾 Saved to {}", path.display());

    Ok(())
}
