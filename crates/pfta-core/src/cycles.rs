//! All-elementary-cycles detection on a directed graph.
//!
//! Used to validate that the gate graph (edges: gate -> its gate-typed
//! inputs) is acyclic. Implements the blocked-DFS core of Johnson's
//! algorithm: for each candidate start node `s` (visited in ascending
//! order), search for circuits back to `s` using only nodes `>= s`, so
//! every elementary cycle is discovered exactly once, rooted at its
//! lexicographically smallest node.
//!
//! Uses the same blocked-set / strongly-connected-component style as
//! recursive-definition cycle detection elsewhere in this codebase
//! (`query::ref_cycles::find_sccs`), generalised from self-reference
//! detection to full elementary-cycle enumeration.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hash;

/// Find every elementary cycle in `adjacency`, each returned as a
/// rotation-normalised sequence starting from its smallest node (by `Ord`).
/// Self-loops (a node adjacent to itself) are reported as a length-1 cycle.
pub fn find_cycles<N>(adjacency: &BTreeMap<N, Vec<N>>) -> Vec<Vec<N>>
where
    N: Clone + Eq + Hash + Ord,
{
    let nodes: Vec<N> = adjacency.keys().cloned().collect();
    let mut cycles = Vec::new();

    for start in &nodes {
        let mut finder = CircuitFinder {
            adjacency,
            start,
            blocked: BTreeSet::new(),
            block_map: BTreeMap::new(),
            stack: Vec::new(),
            cycles: Vec::new(),
        };
        finder.search(start);
        cycles.extend(finder.cycles);
    }

    cycles
}

struct CircuitFinder<'a, N: Ord> {
    adjacency: &'a BTreeMap<N, Vec<N>>,
    start: &'a N,
    blocked: BTreeSet<N>,
    block_map: BTreeMap<N, BTreeSet<N>>,
    stack: Vec<N>,
    cycles: Vec<Vec<N>>,
}

impl<'a, N> CircuitFinder<'a, N>
where
    N: Clone + Eq + Hash + Ord,
{
    /// Successors of `node` restricted to the subgraph of nodes `>= start`.
    fn successors(&self, node: &N) -> Vec<N> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .filter(|w| *w >= self.start)
            .cloned()
            .collect()
    }

    fn unblock(&mut self, node: &N) {
        self.blocked.remove(node);
        if let Some(dependents) = self.block_map.remove(node) {
            for w in dependents {
                if self.blocked.contains(&w) {
                    self.unblock(&w);
                }
            }
        }
    }

    fn search(&mut self, node: &N) -> bool {
        let mut found_cycle = false;
        self.stack.push(node.clone());
        self.blocked.insert(node.clone());

        for successor in self.successors(node) {
            if &successor == self.start {
                self.cycles.push(self.stack.clone());
                found_cycle = true;
            } else if !self.blocked.contains(&successor) && self.search(&successor) {
                found_cycle = true;
            }
        }

        if found_cycle {
            self.unblock(node);
        } else {
            for successor in self.successors(node) {
                self.block_map.entry(successor).or_default().insert(node.clone());
            }
        }

        self.stack.pop();
        found_cycle
    }
}

#[cfg(test)]
#[path = "cycles_tests.rs"]
mod cycles_tests;
