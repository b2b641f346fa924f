//! Text rendering of the spanning tree report.

use std::io::{self, Write};

use spanning_core::{Edge, NO_SECOND_TREE_WEIGHT, SpanningTree};

/// Minimum spanning tree and, when one exists, the second-smallest tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningReport {
    /// Minimum spanning tree.
    pub smallest: SpanningTree,
    /// Second-smallest spanning tree; `None` when the graph is a tree.
    pub second: Option<SpanningTree>,
}

impl SpanningReport {
    /// Weight of the second tree, or [`NO_SECOND_TREE_WEIGHT`] without one.
    #[must_use]
    pub fn second_weight(&self) -> i64 {
        self.second
            .as_ref()
            .map_or(NO_SECOND_TREE_WEIGHT, SpanningTree::weight)
    }
}

/// Writes `report` in the line-oriented report format.
///
/// Each tree contributes a weight line, a `#List` comment line, and one
/// `<u> <v> <w>` line per edge. A missing second tree renders as weight `-1`
/// with no edge lines.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
pub fn render_report(report: &SpanningReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Smallest Spanning Tree Weight = {}",
        report.smallest.weight()
    )?;
    writeln!(writer, "#List of edges in the smallest spanning tree:")?;
    write_edges(&mut writer, report.smallest.edges())?;

    writeln!(
        writer,
        "Second-smallest Spanning Tree Weight = {}",
        report.second_weight()
    )?;
    writeln!(writer, "#List of edges in the second smallest spanning tree:")?;
    let second_edges = report.second.as_ref().map_or(&[][..], SpanningTree::edges);
    write_edges(&mut writer, second_edges)
}

fn write_edges(writer: &mut impl Write, edges: &[Edge]) -> io::Result<()> {
    for edge in edges {
        writeln!(writer, "{edge}")?;
    }
    Ok(())
}
