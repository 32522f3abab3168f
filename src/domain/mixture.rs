/// Largest tolerated deviation of the summed component weights from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One Gaussian component of the price model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureComponent {
    /// Mixing weight in (0, 1]
    pub weight: f64,
    pub mean: f64,
    /// Strictly positive
    pub std_dev: f64,
}

impl MixtureComponent {
    pub const fn new(weight: f64, mean: f64, std_dev: f64) -> Self {
        Self {
            weight,
            mean,
            std_dev,
        }
    }

    pub const fn is_well_formed(&self) -> bool {
        self.weight > 0.0 && self.weight <= 1.0 && self.std_dev > 0.0
    }
}

/// Advisory price bounds for display and sampling grids.
/// The density and CDF are still defined over all reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionRange {
    pub min: f64,
    pub max: f64,
}

/// Two-component Gaussian Mixture Model fitted offline to historical prices.
///
/// `low` is the everyday price cluster and `high` the rarer expensive one.
/// The statistics engine (see `crate::stats::mixture`) is implemented as
/// methods on this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianMixture {
    pub low: MixtureComponent,
    pub high: MixtureComponent,
    pub range: DistributionRange,
}

impl GaussianMixture {
    pub const fn new(low: MixtureComponent, high: MixtureComponent, range: DistributionRange) -> Self {
        Self { low, high, range }
    }

    /// Definition-time sanity check. Usable in `const` context so a bad
    /// parameter set fails the build rather than a computation.
    pub const fn is_well_formed(&self) -> bool {
        let weight_sum = self.low.weight + self.high.weight;
        self.low.is_well_formed()
            && self.high.is_well_formed()
            && (weight_sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
            && self.range.min < self.range.max
    }

    /// Exact mean of the mixture, `Σ wᵢ·μᵢ`.
    pub fn mean(&self) -> f64 {
        self.low.weight * self.low.mean + self.high.weight * self.high.mean
    }
}
