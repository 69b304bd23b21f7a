//! LambdaMART
//!
//! Pair weights for the LambdaMART ranking loss of a gradient boosted tree
//! trainer: ranks every group by the current scores, discounts each rank the
//! way DCG does, and weights pairs by their target difference times their
//! discount difference.
#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;

/// Loss configuration
pub mod config;
/// Error types
pub mod error;
/// The LambdaMART loss
pub mod lambdamart;
/// Pairwise loss interfaces
pub mod loss;

pub use crate::config::{LambdaMartConfig, LossFunc, LossFuncConfig};
pub use crate::error::{Error, Result};
pub use crate::lambdamart::{LambdaMart, PairWeights, DEFAULT_DCG_BASE};
pub use crate::loss::{from_config, PairWeightingFunc, PairwiseLoss};
