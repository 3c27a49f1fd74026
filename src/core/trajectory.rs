//! Sampled solution of one fixed-step integration run.

use crate::Float;

/// Sampled solution: grid abscissas and values plus basic stats.
///
/// Both vectors always have the same length, start at `(a, y0)` and advance
/// with the constant step the run was produced with. The struct is a plain
/// record; integrators build it once and hand it over complete.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub x: Vec<Float>,
    pub y: Vec<Float>,
    /// Step size the grid was built with.
    pub h: Float,
    /// Number of right-hand side evaluations spent on this run.
    pub nfev: usize,
}

impl Trajectory {
    /// Number of stored grid points, start included.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Final stored sample `(x_n, y_n)`.
    pub fn last(&self) -> Option<(Float, Float)> {
        match (self.x.last(), self.y.last()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }

    /// Iterate over stored sample pairs `(x_i, y_i)`.
    pub fn iter(&self) -> TrajectoryIter {
        TrajectoryIter { x_iter: self.x.iter(), y_iter: self.y.iter() }
    }
}

/// Iterator over `(x, y)` pairs of stored samples in a [`Trajectory`].
pub struct TrajectoryIter<'a> {
    x_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Float>,
}

impl<'a> Iterator for TrajectoryIter<'a> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.x_iter.next(), self.y_iter.next()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }
}
