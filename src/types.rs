use std::fmt;

pub type SampleId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genotype {
    Norm,
    Mut,
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Genotype::Norm => "NORM",
            Genotype::Mut => "MUT",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mixture {
    pub genotype: Genotype,
    pub samples: Vec<SampleId>,
}

/// One blank-line-delimited block of the input. Sample ids are local to
/// the case; equal ids in different cases are unrelated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub mixtures: Vec<Mixture>,
}

/// Unresolved samples of one MUT mixture, carrying the implicit
/// "at least one member is mutant" constraint. Empty means contradiction.
pub type ResidualClause = Vec<SampleId>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        mut_count: usize,
        norm_count: usize,
        /// Ascending by sample id, every id exactly once.
        assignment: Vec<(SampleId, Genotype)>,
    },
    Inconsistent,
    Nonunique,
}
