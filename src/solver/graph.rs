use std::collections::HashMap;

use crate::types::{ResidualClause, SampleId};

/// Bipartite constraint graph node. Samples are referred to by a dense
/// slot handed out during construction, not by their raw id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Node {
    Clause(usize),
    Sample(usize),
}

/// Links every residual clause to the samples it constrains. Built once
/// per test case and consumed by [`ConstraintGraph::is_forced`].
pub struct ConstraintGraph {
    clause_edges: Vec<Vec<usize>>,
    sample_edges: Vec<Vec<usize>>,
}

impl ConstraintGraph {
    pub fn new(clauses: &[ResidualClause]) -> Self {
        let mut slots: HashMap<SampleId, usize> = HashMap::new();
        let mut clause_edges: Vec<Vec<usize>> = vec![vec![]; clauses.len()];
        let mut sample_edges: Vec<Vec<usize>> = vec![];

        for (c, clause) in clauses.iter().enumerate() {
            for &id in clause {
                let slot = *slots.entry(id).or_insert(sample_edges.len());
                if slot == sample_edges.len() {
                    sample_edges.push(vec![]);
                }
                clause_edges[c].push(slot);
                sample_edges[slot].push(c);
            }
        }

        Self {
            clause_edges,
            sample_edges,
        }
    }

    /// True when every connected component holds at least as many clause
    /// nodes as sample nodes, leaving no slack for a second satisfying
    /// assignment. The count comparison is a structural criterion, not
    /// an exact-cover proof; see the pinned test in `solver::tests`.
    pub fn is_forced(&self) -> bool {
        let mut clause_seen = vec![false; self.clause_edges.len()];
        let mut sample_seen = vec![false; self.sample_edges.len()];

        // Every sample node neighbors some clause node, so sweeping the
        // clause side starts a traversal in each component.
        for start in 0..self.clause_edges.len() {
            if clause_seen[start] {
                continue;
            }

            // Explicit frontier; component size must not bound the call stack.
            let mut stack = vec![Node::Clause(start)];
            let mut clause_count = 0;
            let mut sample_count = 0;

            while let Some(node) = stack.pop() {
                match node {
                    Node::Clause(c) => {
                        if clause_seen[c] {
                            continue;
                        }
                        clause_seen[c] = true;
                        clause_count += 1;
                        stack.extend(self.clause_edges[c].iter().map(|&s| Node::Sample(s)));
                    }
                    Node::Sample(s) => {
                        if sample_seen[s] {
                            continue;
                        }
                        sample_seen[s] = true;
                        sample_count += 1;
                        stack.extend(self.sample_edges[s].iter().map(|&c| Node::Clause(c)));
                    }
                }
            }

            if clause_count < sample_count {
                return false;
            }
        }

        true
    }
}
