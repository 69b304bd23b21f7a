use float_ord::FloatOrd;

use std::cmp::Reverse;

use crate::error::{Error, Result};

/// Computes the 0-based rank of every position in `group`, ordering by
/// descending score.
///
/// `ranks[p]` is the rank of `group[p]`. The sort is stable: examples with
/// equal scores keep their order within the group, so ties are broken the
/// same way on every run. Scores are compared through `FloatOrd`, which gives
/// NaNs a fixed place instead of breaking the sort. `-0.0` and `0.0` count as
/// the same score.
///
/// Panics if `group` refers past the end of `scores`; see `try_compute_ranks`.
pub fn compute_ranks(group: &[usize], scores: &[f64]) -> Vec<usize> {
    // Positions sorted by score
    let mut ranking: Vec<usize> = (0..group.len()).collect();
    // Adding 0.0 turns -0.0 into 0.0, FloatOrd would order them apart
    ranking.sort_by_key(|&pos| Reverse(FloatOrd(scores[group[pos]] + 0.)));

    // For each position, store its rank
    let mut ranks = vec![0; group.len()];
    for (rank, &pos) in ranking.iter().enumerate() {
        ranks[pos] = rank;
    }
    ranks
}

/// Same as `compute_ranks`, but reports indices outside of `scores`
pub fn try_compute_ranks(group: &[usize], scores: &[f64]) -> Result<Vec<usize>> {
    check_indices(group, scores.len(), "score vector")?;
    Ok(compute_ranks(group, scores))
}

/// Fails on the first index in `group` that is not below `len`
pub(crate) fn check_indices(group: &[usize], len: usize, what: &'static str) -> Result<()> {
    match group.iter().find(|&&idx| idx >= len) {
        Some(&index) => Err(Error::IndexOutOfRange {
            index: index,
            len: len,
            what: what,
        }),
        None => Ok(()),
    }
}
