//! LambdaMART
//! ---
//!
//! Pairwise logistic loss where every pair is weighted by how much swapping
//! the two examples would move the DCG of their group. Swaps near the top of
//! the ranking move the discount the most, so those pairs get the largest
//! weights.
//!
//! Once per boosting iteration and group, the trainer asks for the pair
//! weights of that group under the current scores. The returned value owns
//! the ranks it was built from, so groups can be weighted in parallel.
use gbdt_data::Column;
use log::{debug, trace};

/// Rank discount and its cache
pub mod discount;
/// Ranking of a group by score
pub mod ranks;

use self::discount::{DiscountTable, NUM_PRECOMPUTED_DISCOUNTS};
use self::ranks::{check_indices, try_compute_ranks};
use crate::config::LossFuncConfig;
use crate::error::Result;
use crate::loss::math::{compute_log_loss, LogLoss};
use crate::loss::{PairWeightingFunc, PairwiseLoss};

/// DCG base used when the config doesn't provide one
pub const DEFAULT_DCG_BASE: f64 = 2.0;

#[derive(Debug, Clone)]
/// The LambdaMART loss
pub struct LambdaMart {
    discounts: DiscountTable,
}

impl LambdaMart {
    /// Builds the loss. A positive `dcg_base` in the config replaces the
    /// default; the resulting base must be above 1.
    pub fn new(config: &LossFuncConfig) -> Result<Self> {
        let dcg_base = match config.lambdamart_config.dcg_base {
            // NaN is kept so that it gets rejected below
            Some(base) if !(base <= 0.) => base,
            _ => DEFAULT_DCG_BASE,
        };
        let discounts = DiscountTable::new(dcg_base)?;
        debug!(
            "LambdaMART with dcg_base {} ({} precomputed discounts)",
            dcg_base, NUM_PRECOMPUTED_DISCOUNTS
        );
        Ok(LambdaMart {
            discounts: discounts,
        })
    }

    /// Base of the rank discount
    pub fn dcg_base(&self) -> f64 {
        self.discounts.base()
    }

    /// Discount table shared by all groups
    pub fn discounts(&self) -> &DiscountTable {
        &self.discounts
    }

    /// Ranks `group` by `scores` and binds the ranks, targets and discounts
    /// into a weighting for pairs of that group.
    ///
    /// Every index in `group` must be covered by both `targets` and `scores`.
    pub fn pair_weights<'a, C: Column + ?Sized>(
        &'a self,
        targets: &'a C,
        group: &'a [usize],
        scores: &[f64],
    ) -> Result<PairWeights<'a, C>> {
        check_indices(group, targets.len(), "target column")?;
        let ranks = try_compute_ranks(group, scores)?;
        trace!("Ranked group of {} examples", group.len());

        Ok(PairWeights {
            group: group,
            targets: targets,
            discounts: &self.discounts,
            ranks: ranks,
        })
    }
}

impl PairwiseLoss for LambdaMart {
    /// Logistic loss of the pair being ordered as given
    fn base_loss(&self, _delta_target: f64, delta_func: f64) -> LogLoss {
        compute_log_loss(1., delta_func)
    }

    fn pair_weighting_func<'a>(
        &'a self,
        targets: &'a dyn Column,
        group: &'a [usize],
        scores: &[f64],
    ) -> Result<PairWeightingFunc<'a>> {
        let weights = self.pair_weights(targets, group, scores)?;
        Ok(Box::new(move |pair: &(usize, usize)| weights.weight(*pair)))
    }

    fn name(&self) -> &'static str {
        "lambdamart"
    }
}

#[derive(Debug)]
/// Pair weights for one group under one set of scores.
///
/// Pairs are addressed by position within the group, not by example index.
pub struct PairWeights<'a, C: ?Sized> {
    group: &'a [usize],
    targets: &'a C,
    discounts: &'a DiscountTable,
    /// Rank of each position
    ranks: Vec<usize>,
}

impl<'a, C: Column + ?Sized> PairWeights<'a, C> {
    /// Weight of the pair `(i, j)`: the target difference times the absolute
    /// difference of the two rank discounts.
    ///
    /// The sign follows `target[i] - target[j]`; it is left to the caller to
    /// fold it into the gradient.
    #[inline]
    pub fn weight(&self, (i, j): (usize, usize)) -> f64 {
        let target_diff = self.targets.value(self.group[i]) - self.targets.value(self.group[j]);
        let discount_diff =
            (self.discounts.lookup(self.ranks[i]) - self.discounts.lookup(self.ranks[j])).abs();
        target_diff * discount_diff
    }

    /// Rank of every position in the group
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Size of the group
    pub fn len(&self) -> usize {
        self.group.len()
    }

    /// Whether the group is empty, in which case there is nothing to weight
    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    /// Every ordered pair of distinct positions
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.len();
        (0..n).flat_map(move |i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
    }
}
