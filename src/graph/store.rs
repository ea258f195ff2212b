//! Adjacency-list graph store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::INFINITY;
use crate::error::{NetworkError, NetworkResult};
use crate::models::{EdgeAttr, Node};

/// An outgoing adjacency entry: the head node and the edge attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Destination node index.
    pub to: usize,
    /// Attributes of the segment.
    pub attr: EdgeAttr,
}

/// A directed, attributed transport network.
///
/// Nodes are addressed by dense indices `0..node_count()`. Each ordered pair
/// `(u, v)` carries at most one edge; inserting again overwrites it. Removing
/// a node tombstones it rather than shifting indices.
///
/// Every index argument is bounds-checked: mutations with an out-of-range
/// index leave the graph untouched and return
/// [`NetworkError::InvalidIndex`]; queries return `None` or the
/// [`INFINITY`] sentinel. A tombstoned node can never gain an edge again:
/// [`Graph::upsert_edge`] rejects it with [`NetworkError::InactiveNode`], so
/// every analysis sees removed nodes as isolated.
///
/// Deserialization goes through the same checks: node and adjacency counts
/// must agree, and every edge must join two active, in-range nodes.
///
/// # Examples
///
/// ```
/// use u_logistics::graph::Graph;
/// use u_logistics::models::EdgeAttr;
///
/// let mut g = Graph::new(3);
/// g.upsert_edge(0, 1, EdgeAttr::new(5.0, 7.0)).unwrap();
/// g.upsert_edge(1, 2, EdgeAttr::new(4.0, 6.0)).unwrap();
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.edge(0, 1).map(|e| e.base_time), Some(7.0));
/// assert!(g.edge(2, 0).is_none());
///
/// g.remove_node(1).unwrap();
/// assert_eq!(g.edge_count(), 0);
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.active_node_count(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord")]
pub struct Graph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
}

/// Unchecked wire shape of a [`Graph`].
#[derive(Deserialize)]
struct GraphRecord {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<Edge>>,
}

impl TryFrom<GraphRecord> for Graph {
    type Error = NetworkError;

    fn try_from(record: GraphRecord) -> NetworkResult<Self> {
        let GraphRecord {
            mut nodes,
            adjacency,
        } = record;
        if adjacency.len() != nodes.len() {
            return Err(NetworkError::InvalidIndex {
                index: adjacency.len().min(nodes.len()),
                node_count: nodes.len(),
            });
        }
        for (i, node) in nodes.iter_mut().enumerate() {
            node.set_id(i);
        }

        let graph = Self { nodes, adjacency };
        for (u, list) in graph.adjacency.iter().enumerate() {
            for e in list {
                graph.check_active(u)?;
                graph.check_active(e.to)?;
            }
        }
        Ok(graph)
    }
}

impl Graph {
    /// Creates a graph of `node_count` default nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        let nodes = (0..node_count)
            .map(|i| Node::new(i, format!("node {i}")))
            .collect();
        Self {
            nodes,
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Creates an edgeless graph from node records.
    ///
    /// Each node's id is rewritten to its position in `nodes`.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut nodes = nodes;
        for (i, node) in nodes.iter_mut().enumerate() {
            node.set_id(i);
        }
        let adjacency = vec![Vec::new(); nodes.len()];
        Self { nodes, adjacency }
    }

    /// Number of node slots, tombstones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes that have not been removed.
    pub fn active_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_active()).count()
    }

    /// Number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no node slots.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node slots in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the node at `id`, tombstoned or not.
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` is in range and not tombstoned.
    pub fn is_active(&self, id: usize) -> bool {
        self.nodes.get(id).is_some_and(Node::is_active)
    }

    /// Outgoing edges of `u`, empty when `u` is out of range.
    pub fn out_edges(&self, u: usize) -> &[Edge] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attributes of the edge `u → v`, if present.
    pub fn edge(&self, u: usize, v: usize) -> Option<&EdgeAttr> {
        self.out_edges(u)
            .iter()
            .find(|e| e.to == v)
            .map(|e| &e.attr)
    }

    /// Direct distance `u → v`: `0.0` on the diagonal, the edge distance when
    /// an edge exists, [`INFINITY`] otherwise.
    pub fn distance(&self, u: usize, v: usize) -> f64 {
        if u == v && u < self.node_count() {
            return 0.0;
        }
        self.edge(u, v).map_or(INFINITY, |e| e.distance)
    }

    /// Inserts the edge `u → v`, overwriting any existing one.
    ///
    /// Self-loops are stored but ignored by the path and topology algorithms.
    /// Fails with [`NetworkError::InactiveNode`] if either endpoint has been
    /// removed.
    pub fn upsert_edge(&mut self, u: usize, v: usize, attr: EdgeAttr) -> NetworkResult<()> {
        self.check_active(u)?;
        self.check_active(v)?;
        let list = &mut self.adjacency[u];
        match list.iter_mut().find(|e| e.to == v) {
            Some(existing) => existing.attr = attr,
            None => list.push(Edge { to: v, attr }),
        }
        Ok(())
    }

    /// Removes the edge `u → v`, returning its attributes if it existed.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> NetworkResult<Option<EdgeAttr>> {
        self.check_index(u)?;
        self.check_index(v)?;
        let list = &mut self.adjacency[u];
        Ok(list
            .iter()
            .position(|e| e.to == v)
            .map(|pos| list.remove(pos).attr))
    }

    /// Appends a node and returns its index.
    ///
    /// The node's id is rewritten to the new index.
    pub fn append_node(&mut self, mut node: Node) -> usize {
        let id = self.nodes.len();
        node.set_id(id);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Removes node `v`: drops its outgoing edges, every edge pointing at it,
    /// and tombstones the slot. Indices of other nodes are unchanged.
    pub fn remove_node(&mut self, v: usize) -> NetworkResult<()> {
        self.check_index(v)?;
        self.adjacency[v].clear();
        for list in &mut self.adjacency {
            list.retain(|e| e.to != v);
        }
        self.nodes[v].tombstone();
        Ok(())
    }

    fn check_active(&self, index: usize) -> NetworkResult<()> {
        self.check_index(index)?;
        if self.nodes[index].is_active() {
            Ok(())
        } else {
            debug!(index, "rejected edge at removed node");
            Err(NetworkError::InactiveNode { index })
        }
    }

    pub(crate) fn check_index(&self, index: usize) -> NetworkResult<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            debug!(index, node_count = self.nodes.len(), "rejected out-of-range node index");
            Err(NetworkError::InvalidIndex {
                index,
                node_count: self.nodes.len(),
            })
        }
    }
}
