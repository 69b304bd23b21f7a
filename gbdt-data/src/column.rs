use std::ops::Index;

/// Read-only view over one value per example, addressed by global example index.
///
/// Losses only ever read columns, so anything that can hand out a float per
/// index works: plain slices, vectors, or a named `FloatColumn`.
pub trait Column: Sync {
    /// Number of examples in the column
    fn len(&self) -> usize;

    /// Returns the value for example `idx`, widened to f64
    fn value(&self, idx: usize) -> f64;

    /// Whether the column holds no examples
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Column for [f32] {
    fn len(&self) -> usize {
        <[f32]>::len(self)
    }

    #[inline]
    fn value(&self, idx: usize) -> f64 {
        self[idx] as f64
    }
}

impl Column for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    #[inline]
    fn value(&self, idx: usize) -> f64 {
        self[idx]
    }
}

impl Column for Vec<f32> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn value(&self, idx: usize) -> f64 {
        self[idx] as f64
    }
}

impl Column for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn value(&self, idx: usize) -> f64 {
        self[idx]
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
/// A named column of f32 values, e.g. the target labels of a dataset
pub struct FloatColumn {
    /// Name of the column
    name: String,
    /// One value per example
    values: Vec<f32>,
}

impl FloatColumn {
    /// Creates a new column
    pub fn new(name: &str, values: Vec<f32>) -> Self {
        FloatColumn {
            name: name.to_string(),
            values: values,
        }
    }

    /// Name of the column
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw values
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

impl Index<usize> for FloatColumn {
    type Output = f32;

    fn index(&self, idx: usize) -> &f32 {
        &self.values[idx]
    }
}

impl Column for FloatColumn {
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn value(&self, idx: usize) -> f64 {
        self.values[idx] as f64
    }
}
