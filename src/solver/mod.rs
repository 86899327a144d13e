mod graph;
mod propagate;

use std::collections::{HashMap, HashSet};

use crate::types::{Genotype, Resolution, SampleId, TestCase};

use self::{
    graph::ConstraintGraph,
    propagate::{propagate, StatusMap},
};

/// Resolves one test case to its unique assignment, or reports that the
/// mixtures are contradictory (`Inconsistent`) or leave more than one
/// assignment open (`Nonunique`).
pub fn resolve(case: &TestCase) -> Resolution {
    let (status, clauses) = propagate(&case.mixtures);

    // An empty clause is a MUT mixture whose every sample was proven NORM.
    if clauses.iter().any(|clause| clause.is_empty()) {
        return Resolution::Inconsistent;
    }

    if !ConstraintGraph::new(&clauses).is_forced() {
        return Resolution::Nonunique;
    }

    assemble(status)
}

fn assemble(status: StatusMap) -> Resolution {
    let assignment: Vec<(SampleId, Genotype)> = status.into_iter().collect();
    let mut_count = assignment
        .iter()
        .filter(|(_, genotype)| *genotype == Genotype::Mut)
        .count();
    let norm_count = assignment.len() - mut_count;

    Resolution::Resolved {
        mut_count,
        norm_count,
        assignment,
    }
}

/// Checks a `Resolved` outcome against the case it was computed from:
/// the assignment must cover every mentioned sample exactly once in
/// ascending order, the counts must add up, and every mixture must obey
/// the pooling rule. `Inconsistent` and `Nonunique` carry no assignment
/// to check.
pub fn verify(case: &TestCase, resolution: &Resolution) -> bool {
    let Resolution::Resolved {
        mut_count,
        norm_count,
        assignment,
    } = resolution
    else {
        return true;
    };

    if !assignment.windows(2).all(|pair| pair[0].0 < pair[1].0) {
        return false;
    }

    let lookup: HashMap<SampleId, Genotype> = assignment.iter().copied().collect();
    let mentioned: HashSet<SampleId> = case
        .mixtures
        .iter()
        .flat_map(|mixture| mixture.samples.iter().copied())
        .collect();
    if lookup.len() != mentioned.len() || !mentioned.iter().all(|id| lookup.contains_key(id)) {
        return false;
    }

    let muts = assignment
        .iter()
        .filter(|(_, genotype)| *genotype == Genotype::Mut)
        .count();
    if *mut_count != muts || *norm_count != assignment.len() - muts {
        return false;
    }

    case.mixtures.iter().all(|mixture| match mixture.genotype {
        Genotype::Norm => mixture
            .samples
            .iter()
            .all(|id| lookup[id] == Genotype::Norm),
        Genotype::Mut => mixture.samples.iter().any(|id| lookup[id] == Genotype::Mut),
    })
}
