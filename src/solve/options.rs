//! Options for the solve entry points

use bon::Builder;

#[derive(Builder, Clone, Debug)]
/// Options for [`integrate`](super::integrate) and [`solve`](super::solve).
pub struct SolveOptions {
    /// Maximum number of corrector sweeps per Adams step before the run is
    /// abandoned as non-convergent. Default: 50.
    #[builder(default = 50)]
    pub max_corrections: usize,
}
