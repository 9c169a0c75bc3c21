#![forbid(unsafe_code)]

//! Directed graph container with attached payload data.
//!
//! Design goals:
//! - adjacency-list storage keyed by caller-supplied integer vertex ids
//! - typed errors and strong error safety (a failed operation never leaves
//!   a partial mutation behind)
//! - deterministic, testable outputs (ascending vertex order everywhere an
//!   order is observable)
//!
//! Graph algorithms — strong-connectivity testing and Dijkstra shortest
//! paths — live in [`alg`] as free functions over a borrowed [`Digraph`].

pub mod alg;
pub mod digraph;
pub mod error;

pub use digraph::{Digraph, VertexId};
pub use error::{Error, Result};
