//! The `Digraph` container.
//!
//! Adjacency-list storage: vertex records live in a `BTreeMap` keyed by
//! caller-supplied vertex ids, and each record owns the `Vec` of its outgoing
//! edges. Edges hold plain ids rather than references, so a cyclic graph
//! never produces cyclic ownership.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Caller-chosen vertex identifier. Unique within a graph; ids are not
/// required to be contiguous or zero-based.
pub type VertexId = i64;

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    from: VertexId,
    to: VertexId,
    payload: E,
}

#[derive(Debug, Clone)]
struct VertexEntry<V, E> {
    payload: V,
    out: Vec<EdgeEntry<E>>,
}

/// A directed graph holding one opaque payload per vertex (`V`) and per edge
/// (`E`), with at most one edge per ordered `(from, to)` pair.
///
/// All query and mutation operations validate their inputs before touching
/// any structure; a failed call returns a typed [`Error`] and leaves the
/// graph unmodified. `Clone` produces a fully independent deep copy.
///
/// Iteration-order contract: [`vertices`](Digraph::vertices) is ascending by
/// id, and [`edges`](Digraph::edges) is grouped by source in that same order,
/// so query output is deterministic across runs.
#[derive(Debug, Clone)]
pub struct Digraph<V, E> {
    vertices: BTreeMap<VertexId, VertexEntry<V, E>>,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Digraph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(&v)
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|entry| entry.out.iter().any(|e| e.to == to))
    }

    /// All vertex ids, ascending.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.keys().copied().collect()
    }

    /// All `(from, to)` pairs, grouped by source vertex in ascending order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.vertices
            .values()
            .flat_map(|entry| entry.out.iter().map(|e| (e.from, e.to)))
            .collect()
    }

    /// The `(from, to)` pairs of every edge outgoing from `v`.
    pub fn out_edges(&self, v: VertexId) -> Result<Vec<(VertexId, VertexId)>> {
        let entry = self
            .vertices
            .get(&v)
            .ok_or(Error::NoSuchVertex { vertex: v })?;
        Ok(entry.out.iter().map(|e| (e.from, e.to)).collect())
    }

    /// Out-neighbors of `v`, in edge insertion order. Empty if `v` is absent.
    pub fn successors(&self, v: VertexId) -> Vec<VertexId> {
        let Some(entry) = self.vertices.get(&v) else {
            return Vec::new();
        };
        entry.out.iter().map(|e| e.to).collect()
    }

    /// Visits every edge outgoing from `v` with its destination and payload.
    /// No-op if `v` is absent.
    pub fn for_each_out_edge<F>(&self, v: VertexId, mut f: F)
    where
        F: FnMut(VertexId, &E),
    {
        let Some(entry) = self.vertices.get(&v) else {
            return;
        };
        for e in &entry.out {
            f(e.to, &e.payload);
        }
    }

    pub fn vertex(&self, v: VertexId) -> Result<&V> {
        self.vertices
            .get(&v)
            .map(|entry| &entry.payload)
            .ok_or(Error::NoSuchVertex { vertex: v })
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Result<&mut V> {
        self.vertices
            .get_mut(&v)
            .map(|entry| &mut entry.payload)
            .ok_or(Error::NoSuchVertex { vertex: v })
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Result<&E> {
        self.check_endpoints(from, to)?;
        self.vertices[&from]
            .out
            .iter()
            .find(|e| e.to == to)
            .map(|e| &e.payload)
            .ok_or(Error::NoSuchEdge { from, to })
    }

    pub fn edge_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut E> {
        self.check_endpoints(from, to)?;
        let Some(entry) = self.vertices.get_mut(&from) else {
            return Err(Error::NoSuchVertex { vertex: from });
        };
        entry
            .out
            .iter_mut()
            .find(|e| e.to == to)
            .map(|e| &mut e.payload)
            .ok_or(Error::NoSuchEdge { from, to })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges, summed over every vertex's out-list.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|entry| entry.out.len()).sum()
    }

    /// Out-degree of `v`.
    pub fn out_degree(&self, v: VertexId) -> Result<usize> {
        let entry = self
            .vertices
            .get(&v)
            .ok_or(Error::NoSuchVertex { vertex: v })?;
        Ok(entry.out.len())
    }

    /// Inserts a new vertex. Fails with [`Error::DuplicateVertex`] if `v` is
    /// already present.
    pub fn add_vertex(&mut self, v: VertexId, payload: V) -> Result<()> {
        if self.vertices.contains_key(&v) {
            return Err(Error::DuplicateVertex { vertex: v });
        }
        self.vertices.insert(
            v,
            VertexEntry {
                payload,
                out: Vec::new(),
            },
        );
        Ok(())
    }

    /// Inserts a new edge `from -> to`. Both endpoints must already exist and
    /// the pair must not.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> Result<()> {
        self.check_endpoints(from, to)?;
        if self.contains_edge(from, to) {
            return Err(Error::DuplicateEdge { from, to });
        }
        let Some(entry) = self.vertices.get_mut(&from) else {
            return Err(Error::NoSuchVertex { vertex: from });
        };
        entry.out.push(EdgeEntry { from, to, payload });
        Ok(())
    }

    /// Removes `v` and every edge incident to it, incoming edges included.
    /// Returns the removed vertex payload.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<V> {
        let Some(removed) = self.vertices.remove(&v) else {
            return Err(Error::NoSuchVertex { vertex: v });
        };

        // Scrub incoming edges from the surviving adjacency lists.
        let mut scrubbed = removed.out.len();
        for entry in self.vertices.values_mut() {
            let before = entry.out.len();
            entry.out.retain(|e| e.to != v);
            scrubbed += before - entry.out.len();
        }
        tracing::trace!(vertex = v, incident_edges = scrubbed, "removed vertex");
        Ok(removed.payload)
    }

    /// Removes the edge `from -> to` and returns its payload.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<E> {
        self.check_endpoints(from, to)?;
        let Some(entry) = self.vertices.get_mut(&from) else {
            return Err(Error::NoSuchVertex { vertex: from });
        };
        let Some(idx) = entry.out.iter().position(|e| e.to == to) else {
            return Err(Error::NoSuchEdge { from, to });
        };
        let removed = entry.out.remove(idx);
        Ok(removed.payload)
    }

    fn check_endpoints(&self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.vertices.contains_key(&from) {
            return Err(Error::NoSuchVertex { vertex: from });
        }
        if !self.vertices.contains_key(&to) {
            return Err(Error::NoSuchVertex { vertex: to });
        }
        Ok(())
    }
}
