use std::collections::BTreeMap;

use crate::types::{Genotype, Mixture, ResidualClause, SampleId};

/// Resolved (or tentatively resolved) genotype per sample. Keyed by id,
/// so iteration is already in ascending id order.
pub type StatusMap = BTreeMap<SampleId, Genotype>;

/// Applies all NORM mixtures, then reduces every MUT mixture to its
/// residual clause. NORM evidence is absolute, so the first pass must
/// finish before any clause is built: a sample may sit in both a NORM
/// and a MUT mixture.
///
/// MUT entries in the returned map are tentative. They only become
/// visible to callers once the case certifies unique.
pub fn propagate(mixtures: &[Mixture]) -> (StatusMap, Vec<ResidualClause>) {
    let mut status = StatusMap::new();

    for mixture in mixtures {
        if mixture.genotype == Genotype::Norm {
            for &id in &mixture.samples {
                status.insert(id, Genotype::Norm);
            }
        }
    }

    let mut clauses = vec![];
    for mixture in mixtures {
        if mixture.genotype != Genotype::Mut {
            continue;
        }

        let mut clause: ResidualClause = mixture
            .samples
            .iter()
            .copied()
            .filter(|id| status.get(id) != Some(&Genotype::Norm))
            .collect();
        clause.sort();
        clause.dedup();

        for &id in &clause {
            status.insert(id, Genotype::Mut);
        }
        clauses.push(clause);
    }

    (status, clauses)
}
