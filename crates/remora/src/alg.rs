//! Traversal algorithms over [`Digraph`].
//!
//! Results with an ordering contract come back in `BTreeMap`s so output is
//! deterministic; bookkeeping that never escapes a function uses Fx-hashed
//! sets instead.

use crate::digraph::{Digraph, VertexId};
use crate::error::{Error, Result};
use rustc_hash::FxBuildHasher;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Returns true iff every vertex is reachable from every other vertex along
/// directed edges.
///
/// Runs an iterative BFS over outgoing edges from each vertex in turn; the
/// graph is strongly connected iff every traversal reaches all vertices.
/// The empty graph and a single vertex with no edges are trivially strongly
/// connected. Worst case O(V·(V+E)).
pub fn is_strongly_connected<V, E>(g: &Digraph<V, E>) -> bool {
    let vertices = g.vertices();
    if vertices.len() <= 1 {
        return true;
    }

    for &start in &vertices {
        let mut seen: HashSet<VertexId> = HashSet::default();
        seen.insert(start);
        let mut frontier: VecDeque<VertexId> = VecDeque::new();
        frontier.push_back(start);

        while let Some(v) = frontier.pop_front() {
            for w in g.successors(v) {
                if seen.insert(w) {
                    frontier.push_back(w);
                }
            }
        }

        if seen.len() != vertices.len() {
            return false;
        }
    }
    true
}

/// Computes the single-source shortest-path tree from `start` with Dijkstra's
/// algorithm and returns it as a predecessor map covering every vertex.
///
/// `edge_weight` maps an edge payload to its weight and must return
/// non-negative values; that is a caller contract and is not validated here.
///
/// In the result, `start` maps to itself, and so does any vertex unreachable
/// from `start` (it is never relaxed, so its initial self-mapping survives).
/// Fails with [`Error::NoSuchVertex`] if `start` is absent.
///
/// Selection of the next vertex to settle is a linear scan of the unsettled
/// set (O(V²+E) overall); ties resolve to the smallest vertex id.
pub fn shortest_paths<V, E, F>(
    g: &Digraph<V, E>,
    start: VertexId,
    edge_weight: F,
) -> Result<BTreeMap<VertexId, VertexId>>
where
    F: Fn(&E) -> f64,
{
    if !g.contains_vertex(start) {
        return Err(Error::NoSuchVertex { vertex: start });
    }

    let vertices = g.vertices();
    let mut distance: HashMap<VertexId, f64> =
        vertices.iter().map(|&v| (v, f64::INFINITY)).collect();
    distance.insert(start, 0.0);

    let mut predecessor: BTreeMap<VertexId, VertexId> =
        vertices.iter().map(|&v| (v, v)).collect();

    let mut unsettled: BTreeSet<VertexId> = vertices.into_iter().collect();
    let mut settled = 0usize;

    while let Some(&first) = unsettled.first() {
        // Ascending scan with a strict comparison: ties go to the smallest id.
        let mut current = first;
        let mut best = distance[&current];
        for &v in unsettled.iter().skip(1) {
            let d = distance[&v];
            if d < best {
                current = v;
                best = d;
            }
        }
        unsettled.remove(&current);

        // Everything left is unreachable; its self-mapping stands.
        if best.is_infinite() {
            continue;
        }
        settled += 1;

        g.for_each_out_edge(current, |to, payload| {
            let candidate = best + edge_weight(payload);
            if candidate < distance[&to] {
                distance.insert(to, candidate);
                predecessor.insert(to, current);
            }
        });
    }

    tracing::trace!(start, settled, "computed shortest-path tree");
    Ok(predecessor)
}
