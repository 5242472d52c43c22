//! Input and output shapes shared by every objective function.
//!
//! A caller hands in either one vector or a batch of vectors (one per
//! row). Functions normalize both to a batch view, evaluate each row, and
//! hand back a scalar for a single vector or one score per row otherwise.

use crate::error::{ObjectiveError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Points at which an objective function is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Points {
    /// One vector of dimension n
    Single(Array1<f64>),
    /// A batch of vectors, one per row, all of dimension n = ncols
    Batch(Array2<f64>),
}

impl Points {
    /// Build a batch from rows of equal length.
    ///
    /// Fails with `RaggedBatch` if a row differs in length from the first
    /// row, and with `EmptyBatch` if `rows` is empty.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let first = rows.first().ok_or(ObjectiveError::EmptyBatch)?;
        let dim = first.len();
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
            return Err(ObjectiveError::RaggedBatch {
                row,
                expected: dim,
                got: values.len(),
            });
        }
        Ok(Points::Batch(Array2::from_shape_fn(
            (rows.len(), dim),
            |(i, j)| rows[i][j],
        )))
    }

    /// Coerce textual elements into a single vector.
    ///
    /// Surrounding whitespace is ignored. Any element that does not parse
    /// as `f64` yields `NonNumeric`.
    pub fn parse<S: AsRef<str>>(values: &[S]) -> Result<Self> {
        parse_row(0, values).map(|v| Points::Single(Array1::from_vec(v)))
    }

    /// Coerce textual rows into a batch, then check that rows agree in
    /// length as [`Points::from_rows`] does.
    pub fn parse_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let parsed = rows
            .iter()
            .enumerate()
            .map(|(row, values)| parse_row(row, values))
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&parsed)
    }

    /// Dimension n of each vector (the trailing axis length).
    pub fn dim(&self) -> usize {
        match self {
            Points::Single(x) => x.len(),
            Points::Batch(x) => x.ncols(),
        }
    }

    /// Number of vectors held.
    pub fn len(&self) -> usize {
        match self {
            Points::Single(_) => 1,
            Points::Batch(x) => x.nrows(),
        }
    }

    /// Returns `true` for a batch with no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the input was given in batch form.
    pub fn is_batch(&self) -> bool {
        matches!(self, Points::Batch(_))
    }

    /// View the input as a batch; a single vector becomes a 1 x n view.
    pub fn as_batch(&self) -> ArrayView2<'_, f64> {
        match self {
            Points::Single(x) => x.view().insert_axis(Axis(0)),
            Points::Batch(x) => x.view(),
        }
    }
}

impl From<Array1<f64>> for Points {
    fn from(x: Array1<f64>) -> Self {
        Points::Single(x)
    }
}

impl From<Array2<f64>> for Points {
    fn from(x: Array2<f64>) -> Self {
        Points::Batch(x)
    }
}

impl From<Vec<f64>> for Points {
    fn from(x: Vec<f64>) -> Self {
        Points::Single(Array1::from_vec(x))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Points {
    type Error = ObjectiveError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Points::from_rows(&rows)
    }
}

/// Values produced by an objective function, shaped like its input.
#[derive(Debug, Clone, PartialEq)]
pub enum Scores {
    /// Result for a single vector
    Single(f64),
    /// One result per row of a batch
    Batch(Array1<f64>),
}

impl Scores {
    /// Number of scores held.
    pub fn len(&self) -> usize {
        match self {
            Scores::Single(_) => 1,
            Scores::Batch(v) => v.len(),
        }
    }

    /// Returns `true` for a batch result with no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the scores came from batch input.
    pub fn is_batch(&self) -> bool {
        matches!(self, Scores::Batch(_))
    }

    /// Score of vector `i`; a single result only answers for `i == 0`.
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            Scores::Single(v) => (i == 0).then_some(*v),
            Scores::Batch(v) => v.get(i).copied(),
        }
    }

    /// The scalar result, if the input was a single vector.
    pub fn as_single(&self) -> Option<f64> {
        match self {
            Scores::Single(v) => Some(*v),
            Scores::Batch(_) => None,
        }
    }

    /// Flatten into an array; a single result becomes a length-1 array.
    pub fn into_array(self) -> Array1<f64> {
        match self {
            Scores::Single(v) => Array1::from_elem(1, v),
            Scores::Batch(v) => v,
        }
    }
}

fn parse_row<S: AsRef<str>>(row: usize, values: &[S]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let text = value.as_ref();
            text.trim()
                .parse::<f64>()
                .map_err(|_| ObjectiveError::NonNumeric {
                    row,
                    index,
                    value: text.to_string(),
                })
        })
        .collect()
}

/// Evaluate `kernel` on every vector of `x`, broadcasting over rows.
///
/// A single vector is evaluated as a batch of one and its score unwrapped
/// back to a scalar.
pub(crate) fn broadcast<F>(function: &'static str, x: &Points, kernel: F) -> Result<Scores>
where
    F: Fn(ArrayView1<'_, f64>) -> f64,
{
    if x.dim() == 0 {
        return Err(ObjectiveError::EmptyVector { function });
    }

    let values: Array1<f64> = x.as_batch().rows().into_iter().map(kernel).collect();

    if x.is_batch() {
        Ok(Scores::Batch(values))
    } else {
        Ok(Scores::Single(values[0]))
    }
}
