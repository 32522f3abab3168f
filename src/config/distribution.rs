//! Fixed price model parameters.
//!
//! The two-component mixture was fitted offline to daily price history.
//! Nothing here is learned or adjusted at runtime.

use crate::domain::{DistributionRange, GaussianMixture, MixtureComponent};

/// The price model every analysis runs against.
pub const PRICE_MODEL: GaussianMixture = GaussianMixture {
    // 77.9% of days - the normal price cluster
    low: MixtureComponent {
        weight: 0.779,
        mean: 1691.0,
        std_dev: 606.0,
    },
    // 22.1% of days - the high price cluster (jackpot)
    high: MixtureComponent {
        weight: 0.221,
        mean: 3742.0,
        std_dev: 714.0,
    },
    // Reasonable bounds for charting
    range: DistributionRange {
        min: 500.0,
        max: 5100.0,
    },
};

const _: () = assert!(PRICE_MODEL.is_well_formed());

