use std::{sync::mpsc::channel, thread};

use itertools::Itertools;

use crate::{
    solver,
    types::{Resolution, TestCase},
};

/// Resolves a batch of independent test cases on `n` worker threads
/// (available parallelism when unset). Cases share no state, so the only
/// bookkeeping is restoring input order in the returned batch.
pub fn resolve_all(cases: Vec<TestCase>, n: Option<usize>) -> Vec<Resolution> {
    let n = n
        .unwrap_or_else(|| {
            thread::available_parallelism()
                .map(|val| val.get())
                .unwrap_or(2)
        })
        .max(1);

    let total = cases.len();
    let chunk_size = total.div_ceil(n).max(1);

    let (tx, rx) = channel::<(usize, Resolution)>();

    let chunks: Vec<Vec<(usize, TestCase)>> = cases
        .into_iter()
        .enumerate()
        .chunks(chunk_size)
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect();

    for chunk in chunks {
        let thread_tx = tx.clone();
        thread::spawn(move || {
            for (i, case) in chunk {
                let _ = thread_tx.send((i, solver::resolve(&case)));
            }
        });
    }

    // receiver blocks as long as some transmitter is alive
    drop(tx);

    let mut resolutions: Vec<Option<Resolution>> = (0..total).map(|_| None).collect();
    for (i, resolution) in rx {
        resolutions[i] = Some(resolution);
    }

    let resolutions: Vec<Resolution> = resolutions.into_iter().flatten().collect();
    debug_assert_eq!(resolutions.len(), total);
    resolutions
}
