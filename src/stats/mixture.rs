//! Mixture statistics: density, CDF, percentile, cluster attribution and
//! the geometric waiting-time model built on top of them.
//!
//! Every operation is pure and O(1). The methods on [`GaussianMixture`] work
//! for any parameter set; the free functions at the bottom bind them to
//! [`PRICE_MODEL`].

use super::normal::{normal_cdf, normal_density};
use crate::config::PRICE_MODEL;
use crate::domain::{GaussianMixture, MixtureComponent};

/// Posterior responsibility of each cluster for an observed price, in percent.
///
/// Fields sum to 100 up to rounding. Both are NaN if the total density
/// underflows to exactly zero, which cannot happen for finite prices with the
/// fixed model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentAttribution {
    pub low_cluster_pct: f64,
    pub high_cluster_pct: f64,
}

fn weighted_density(c: &MixtureComponent, x: f64) -> f64 {
    c.weight * normal_density(x, c.mean, c.std_dev)
}

fn weighted_cdf(c: &MixtureComponent, x: f64) -> f64 {
    c.weight * normal_cdf(x, c.mean, c.std_dev)
}

impl GaussianMixture {
    /// Mixture density `w₁·N(x;μ₁,σ₁) + w₂·N(x;μ₂,σ₂)`. This is the plotted curve.
    pub fn density(&self, x: f64) -> f64 {
        weighted_density(&self.low, x) + weighted_density(&self.high, x)
    }

    /// Mixture CDF, the same weighted sum over component CDFs.
    pub fn cdf(&self, x: f64) -> f64 {
        weighted_cdf(&self.low, x) + weighted_cdf(&self.high, x)
    }

    /// Percentage of historical prices expected below `price`.
    pub fn percentile(&self, price: f64) -> f64 {
        self.cdf(price) * 100.0
    }

    /// Bayes' rule responsibilities of the two clusters for `price`.
    pub fn component_attribution(&self, price: f64) -> ComponentAttribution {
        let low = weighted_density(&self.low, price);
        let high = weighted_density(&self.high, price);
        let total = low + high;

        ComponentAttribution {
            low_cluster_pct: low / total * 100.0,
            high_cluster_pct: high / total * 100.0,
        }
    }

    /// Percentage chance a single fresh draw lands above `target_price`.
    pub fn probability_strictly_above(&self, target_price: f64) -> f64 {
        (1.0 - self.cdf(target_price)) * 100.0
    }

    /// Percentage chance that at least one of `trials_per_period` independent
    /// draws lands above `target_price`: `1 − (1 − p)ⁿ`.
    ///
    /// With one trial this is exactly [`Self::probability_strictly_above`].
    /// Zero trials gives 0%.
    pub fn probability_above_with_trials(&self, target_price: f64, trials_per_period: u32) -> f64 {
        let single = 1.0 - self.cdf(target_price);
        if trials_per_period == 1 {
            return single * 100.0;
        }
        let n = i32::try_from(trials_per_period).unwrap_or(i32::MAX);
        let at_least_one = 1.0 - (1.0 - single).powi(n);
        at_least_one * 100.0
    }

    /// Expected number of periods until a price above `target_price` shows
    /// up, as the mean `1/p` of a geometric distribution.
    ///
    /// Returns `f64::INFINITY` when `p` is zero, which only happens once the
    /// CDF has saturated to 1.0. Callers must check before formatting.
    pub fn expected_periods_to_wait(&self, target_price: f64, trials_per_period: u32) -> f64 {
        let p = self.probability_above_with_trials(target_price, trials_per_period) / 100.0;
        if p <= 0.0 {
            if crate::config::debug::PRINT_SATURATION_WARNINGS {
                log::warn!(
                    "Expected wait for target {} with {} trials/period is unbounded",
                    target_price,
                    trials_per_period
                );
            }
            return f64::INFINITY;
        }
        1.0 / p
    }
}

/// [`GaussianMixture::density`] on the fixed price model.
pub fn mixture_density(x: f64) -> f64 {
    PRICE_MODEL.density(x)
}

/// [`GaussianMixture::cdf`] on the fixed price model.
pub fn mixture_cdf(x: f64) -> f64 {
    PRICE_MODEL.cdf(x)
}

pub fn percentile(price: f64) -> f64 {
    PRICE_MODEL.percentile(price)
}

pub fn component_attribution(price: f64) -> ComponentAttribution {
    PRICE_MODEL.component_attribution(price)
}

pub fn probability_strictly_above(target_price: f64) -> f64 {
    PRICE_MODEL.probability_strictly_above(target_price)
}

pub fn probability_above_with_trials(target_price: f64, trials_per_period: u32) -> f64 {
    PRICE_MODEL.probability_above_with_trials(target_price, trials_per_period)
}

pub fn expected_periods_to_wait(target_price: f64, trials_per_period: u32) -> f64 {
    PRICE_MODEL.expected_periods_to_wait(target_price, trials_per_period)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_grid() -> impl Iterator<Item = f64> {
        (-20..=160).map(|i| i as f64 * 50.0) // -1000 .. 8000
    }

    #[test]
    fn test_density_integrates_to_one() {
        let step = 5.0;
        let area: f64 = (-1000..=2000)
            .map(|i| mixture_density(i as f64 * step) * step)
            .sum(); // -5000 .. 10000
        assert!((area - 1.0).abs() < 1e-6, "area = {}", area);
    }

    #[test]
    fn test_cdf_monotonic_and_complementary() {
        let mut prev = mixture_cdf(-1050.0);
        for x in price_grid() {
            let cur = mixture_cdf(x);
            assert!(cur >= prev, "cdf decreased at {}", x);
            assert!((cur + (1.0 - cur) - 1.0).abs() < 1e-12);
            prev = cur;
        }
    }

    #[test]
    fn test_cdf_limits() {
        assert!(mixture_cdf(-10_000.0) < 1e-9);
        assert!(mixture_cdf(20_000.0) > 1.0 - 1e-9);
    }

    #[test]
    fn test_percentile_strictly_increasing_inside_range() {
        let mut prev = percentile(500.0);
        for i in 1..=46 {
            let cur = percentile(500.0 + i as f64 * 100.0);
            assert!(cur > prev);
            prev = cur;
        }
    }

    #[test]
    fn test_percentile_at_low_mean() {
        // Half the low cluster plus the high cluster's thin left tail ≈ 39.0
        let p = percentile(1691.0);
        assert!((38.0..=40.0).contains(&p), "percentile(1691) = {}", p);
        assert!(p < 50.0);
    }

    #[test]
    fn test_attribution_sums_to_hundred() {
        for x in price_grid() {
            let a = component_attribution(x);
            assert!(
                (a.low_cluster_pct + a.high_cluster_pct - 100.0).abs() < 1e-9,
                "price {} -> {:?}",
                x,
                a
            );
        }
    }

    #[test]
    fn test_attribution_favours_nearest_cluster() {
        assert!(component_attribution(1200.0).low_cluster_pct > 95.0);
        assert!(component_attribution(4500.0).high_cluster_pct > 95.0);
    }

    #[test]
    fn test_single_trial_matches_single_roll() {
        for x in price_grid() {
            assert_eq!(probability_above_with_trials(x, 1), probability_strictly_above(x));
        }
    }

    #[test]
    fn test_more_trials_never_lower_probability() {
        for x in price_grid() {
            let mut prev = probability_above_with_trials(x, 1);
            for n in 2..=10 {
                let cur = probability_above_with_trials(x, n);
                assert!(cur >= prev - 1e-12, "target {} n {}", x, n);
                prev = cur;
            }
        }
    }

    #[test]
    fn test_more_trials_never_longer_wait() {
        for x in price_grid() {
            let mut prev = expected_periods_to_wait(x, 1);
            for n in 2..=10 {
                let cur = expected_periods_to_wait(x, n);
                assert!(cur <= prev * (1.0 + 1e-12), "target {} n {}", x, n);
                prev = cur;
            }
        }
    }

    #[test]
    fn test_wait_for_far_target_is_long() {
        assert!(expected_periods_to_wait(5000.0, 1) > 10.0);
    }

    #[test]
    fn test_wait_for_cheap_target_is_about_one_period() {
        let wait = expected_periods_to_wait(0.0, 1);
        assert!((1.0..1.01).contains(&wait), "wait = {}", wait);
    }

    #[test]
    fn test_saturated_cdf_gives_infinite_wait() {
        assert_eq!(mixture_cdf(1e7), 1.0);
        assert!(expected_periods_to_wait(1e7, 1).is_infinite());
        assert!(expected_periods_to_wait(1e7, 5).is_infinite());
    }

    #[test]
    fn test_zero_trials_never_succeed() {
        assert_eq!(probability_above_with_trials(2000.0, 0), 0.0);
        assert!(expected_periods_to_wait(2000.0, 0).is_infinite());
    }
}
