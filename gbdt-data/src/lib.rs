//! Library for the data store used by the ranking losses
#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;

/// Column abstraction over per-example values
pub mod column;
/// Grouping of examples by query
pub mod group;
/// Defines methods for loading grouped data from a file
pub mod load;

pub use crate::column::{Column, FloatColumn};
pub use crate::group::group_by;
pub use crate::load::{parse_grouped_libsvm, read_grouped_libsvm, GroupedTargets, LoadError};
