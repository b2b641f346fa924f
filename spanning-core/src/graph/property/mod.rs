//! Property-based tests for the spanning tree engine.
//!
//! Verifies Kruskal and the edge-replacement search against a brute-force
//! oracle that enumerates every spanning tree of small graphs, validates the
//! structure of both returned trees, and checks that repeated calls agree.

mod equivalence;
mod helpers;
mod strategies;
mod structural;
mod types;
