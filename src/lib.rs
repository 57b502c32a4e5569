//! A crate implementing the biclique enumeration algorithm of Eppstein (1994).
//!
//! The algorithm lists every maximal complete bipartite subgraph of an undirected graph
//! as a pair of disjoint vertex sets in which every cross pair is adjacent.
//! Its running time is linear in the number of vertices but exponential in the degeneracy
//! of the graph, which makes it practical for sparse graphs with potentially large outputs.
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// The enumeration of maximal bicliques.
pub mod bicliques;
/// Algorithms to compute degeneracy orientations.
pub mod degeneracy;
/// Contains the error types used by this crate.
pub mod error;
/// Different implementations of the graph traits.
pub mod implementation;
/// Strongly typed graph indices.
pub mod index;
/// The graph traits.
pub mod interface;
/// Functions to create graphs with predefined structures.
pub mod predefined_graphs;
/// The enumeration of all subsets of a sequence of elements.
pub mod subsets;
