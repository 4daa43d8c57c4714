//! `GraphWorld`: explicit directed weighted graph over `u32` node ids.
//!
//! Adjacency is kept in both directions (`outgoing`, `incoming`) so
//! predecessor queries cost the same as successor queries. `BTreeMap`
//! storage makes neighbour order deterministic.

use std::collections::{BTreeMap, BTreeSet};

use lrta_kernel::domain::SearchDomain;

/// Explicit weighted graph with mutable blocked nodes and edge costs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphWorld {
    nodes: BTreeSet<u32>,
    outgoing: BTreeMap<u32, BTreeMap<u32, f64>>,
    incoming: BTreeMap<u32, BTreeMap<u32, f64>>,
    blocked: BTreeSet<u32>,
}

impl GraphWorld {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Undirected unit-cost line `0 - 1 - ... - (n-1)`.
    #[must_use]
    pub fn line(n: u32) -> Self {
        let mut world = Self::new();
        for node in 0..n {
            world.add_node(node);
        }
        for node in 1..n {
            world.add_undirected_edge(node - 1, node, 1.0);
        }
        world
    }

    pub fn add_node(&mut self, node: u32) {
        self.nodes.insert(node);
    }

    /// Add or overwrite the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: u32, to: u32, cost: f64) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.outgoing.entry(from).or_default().insert(to, cost);
        self.incoming.entry(to).or_default().insert(from, cost);
    }

    pub fn add_undirected_edge(&mut self, a: u32, b: u32, cost: f64) {
        self.add_edge(a, b, cost);
        self.add_edge(b, a, cost);
    }

    /// Change the cost of an existing edge. Returns `false` if there is no
    /// such edge.
    pub fn set_edge_cost(&mut self, from: u32, to: u32, cost: f64) -> bool {
        let Some(slot) = self.outgoing.get_mut(&from).and_then(|m| m.get_mut(&to)) else {
            return false;
        };
        *slot = cost;
        if let Some(slot) = self.incoming.get_mut(&to).and_then(|m| m.get_mut(&from)) {
            *slot = cost;
        }
        true
    }

    pub fn remove_edge(&mut self, from: u32, to: u32) -> bool {
        let removed = self
            .outgoing
            .get_mut(&from)
            .is_some_and(|m| m.remove(&to).is_some());
        if let Some(m) = self.incoming.get_mut(&to) {
            m.remove(&from);
        }
        removed
    }

    pub fn block(&mut self, node: u32) {
        self.blocked.insert(node);
    }

    pub fn unblock(&mut self, node: u32) {
        self.blocked.remove(&node);
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.iter().copied()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every edge as `(from, to, cost)`, ordered by `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        self.outgoing
            .iter()
            .flat_map(|(&from, m)| m.iter().map(move |(&to, &cost)| (from, to, cost)))
    }

    fn open_neighbours(&self, adjacency: &BTreeMap<u32, BTreeMap<u32, f64>>, node: u32) -> Vec<u32> {
        adjacency
            .get(&node)
            .map(|m| {
                m.keys()
                    .copied()
                    .filter(|n| !self.blocked.contains(n))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl SearchDomain for GraphWorld {
    type State = u32;

    fn is_blocked(&self, state: &u32) -> bool {
        self.blocked.contains(state)
    }

    fn successors(&self, state: &u32) -> Vec<u32> {
        self.open_neighbours(&self.outgoing, *state)
    }

    fn predecessors(&self, state: &u32) -> Vec<u32> {
        self.open_neighbours(&self.incoming, *state)
    }

    fn cost(&self, from: &u32, to: &u32) -> f64 {
        self.outgoing
            .get(from)
            .and_then(|m| m.get(to))
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}
