//! Loss
//! ---
//!
//! Interfaces through which the trainer's pairwise driver consumes a ranking
//! loss. The driver enumerates pairs within a group, evaluates the base loss
//! on each pair's score difference and scales it by the pair's weight.
use std::fmt::Debug;

use gbdt_data::Column;

/// Logistic loss primitive
pub mod math;

use self::math::LogLoss;
use crate::config::{LossFunc, LossFuncConfig};
use crate::error::Result;
use crate::lambdamart::LambdaMart;

/// Weight of a pair of group positions. Only valid for the group it was built for.
///
/// The function owns the ranks it was built from, so it stays valid after
/// later calls build weightings for other groups.
pub type PairWeightingFunc<'a> = Box<dyn Fn(&(usize, usize)) -> f64 + Send + Sync + 'a>;

/// Trait defining a pairwise loss. You will need to implement this for any new pairwise losses
pub trait PairwiseLoss: Send + Sync + Debug {
    /// Loss of a single pair given the difference of targets and the
    /// difference of current scores
    fn base_loss(&self, delta_target: f64, delta_func: f64) -> LogLoss;

    /// Builds the weighting for pairs of `group` under the current `scores`.
    ///
    /// `targets` and `scores` are indexed by the example indices in `group`;
    /// the returned function is indexed by position within `group`.
    fn pair_weighting_func<'a>(
        &'a self,
        targets: &'a dyn Column,
        group: &'a [usize],
        scores: &[f64],
    ) -> Result<PairWeightingFunc<'a>>;

    /// Name of the loss, for logging
    fn name(&self) -> &'static str;
}

/// Builds the loss described by `config`
pub fn from_config(config: &LossFuncConfig) -> Result<Box<dyn PairwiseLoss>> {
    match config.loss_func {
        LossFunc::LambdaMart => Ok(Box::new(LambdaMart::new(config)?)),
    }
}
