//! Load
//! ---
//!
//! This defines the methods to read targets and query ids from libsvm data
use log::info;
use rayon;
use thiserror::Error;

use self::rayon::prelude::*;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::column::FloatColumn;
use crate::group::group_by;

/// Name given to the column holding the labels
pub const TARGET_COLUMN: &str = "target";

/// Hard code buffersize for now
static BUFFER_SIZE: usize = 1000;

#[derive(Debug, Error)]
/// Failures while reading a grouped dataset
pub enum LoadError {
    /// The underlying reader failed
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed. Lines are numbered from 1
    #[error("line {line}: {reason}")]
    Parse {
        /// Line number
        line: usize,
        /// What was wrong with it
        reason: String,
    },
}

#[derive(Debug, Clone)]
/// Targets for every example along with the query groups they belong to
pub struct GroupedTargets {
    /// One label per example, in file order
    pub targets: FloatColumn,
    /// Example indices for each query
    pub groups: Vec<Vec<usize>>,
}

impl GroupedTargets {
    /// Number of examples
    pub fn num_examples(&self) -> usize {
        self.targets.values().len()
    }
}

/// Given a line from a libsvm file, outputs the label and the query id.
///
/// Returns `Ok(None)` for blank and comment-only lines. Feature columns are
/// not needed to weight pairs and are skipped.
pub fn parse_line(line: &str) -> Result<Option<(f32, String)>, String> {
    // Remove comments
    let line = line.split('#').next().unwrap_or("");
    let mut pieces = line.split_whitespace();
    let label = match pieces.next() {
        Some(l) => l,
        None => return Ok(None),
    };
    let label: f32 = label
        .parse()
        .map_err(|_| format!("invalid label `{}`", label))?;

    match pieces.next() {
        Some(q) if q.starts_with("qid:") && q.len() > 4 => Ok(Some((label, q[4..].to_string()))),
        Some(q) => Err(format!("expected `qid:<id>`, found `{}`", q)),
        None => Err("missing qid".to_string()),
    }
}

/// Reads grouped libsvm data from any reader
pub fn parse_grouped_libsvm<R: Read>(reader: R) -> Result<GroupedTargets, LoadError> {
    let br = BufReader::new(reader);
    let mut targets = Vec::new();
    let mut qids = Vec::new();
    let mut buffer = Vec::with_capacity(BUFFER_SIZE);
    let mut tmp_results = Vec::with_capacity(BUFFER_SIZE);
    let mut first_line = 1;
    let mut it = br.lines();
    loop {
        buffer.clear();
        for _ in 0..BUFFER_SIZE {
            if let Some(line) = it.next() {
                buffer.push(line?);
            }
        }
        if buffer.is_empty() {
            break;
        }

        tmp_results.clear();
        // Parse in parallel
        buffer
            .par_iter()
            .map(|l| parse_line(l))
            .collect_into_vec(&mut tmp_results);

        for (offset, res) in tmp_results.drain(..).enumerate() {
            match res {
                Ok(Some((label, qid))) => {
                    targets.push(label);
                    qids.push(qid);
                }
                Ok(None) => {}
                Err(reason) => {
                    return Err(LoadError::Parse {
                        line: first_line + offset,
                        reason: reason,
                    })
                }
            }
        }
        first_line += buffer.len();
    }

    let groups = group_by(&qids);
    targets.shrink_to_fit();
    Ok(GroupedTargets {
        targets: FloatColumn::new(TARGET_COLUMN, targets),
        groups: groups,
    })
}

/// Given a file path, loads the targets and query groups
pub fn read_grouped_libsvm<P: AsRef<Path>>(path: P) -> Result<GroupedTargets, LoadError> {
    let now = std::time::Instant::now();
    let f = File::open(path.as_ref())?;
    let data = parse_grouped_libsvm(f)?;
    info!(
        "Loaded {}: {} groups, {} examples in {:?}",
        path.as_ref().display(),
        data.groups.len(),
        data.num_examples(),
        now.elapsed()
    );
    Ok(data)
}
