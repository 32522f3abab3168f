//! Random price generation from the mixture.
//!
//! The random source is injected, so tests (and anyone wanting reproducible
//! draws) can hand in a seeded generator instead of ambient global state.

use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::PRICE_MODEL;
use crate::domain::GaussianMixture;

/// Box–Muller transform: two independent uniforms to one standard normal.
///
/// `u1` must be in (0, 1] so that `ln(u1)` is finite.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Draws whole, non-negative prices from a [`GaussianMixture`].
#[derive(Debug, Clone)]
pub struct PriceSampler<R: Rng> {
    model: GaussianMixture,
    rng: R,
}

impl PriceSampler<SmallRng> {
    /// Sampler over the fixed price model, seeded from the OS.
    pub fn from_entropy() -> Self {
        Self::new(PRICE_MODEL, SmallRng::from_os_rng())
    }

    /// Reproducible sampler over the fixed price model.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PRICE_MODEL, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PriceSampler<R> {
    pub fn new(model: GaussianMixture, rng: R) -> Self {
        Self { model, rng }
    }

    /// One raw (unrounded) draw from the mixture.
    pub fn sample_raw(&mut self) -> f64 {
        // Weighted coin picks the cluster
        let roll: f64 = self.rng.random();
        let component = if roll < self.model.high.weight {
            self.model.high
        } else {
            self.model.low
        };

        // random() is in [0, 1); flip it to (0, 1] for the log
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random();
        box_muller(u1, u2) * component.std_dev + component.mean
    }

    /// One price: the raw draw rounded to a whole unit and floored at zero.
    pub fn sample_price(&mut self) -> f64 {
        self.sample_raw().round().max(0.0)
    }

    pub fn sample_prices(&mut self, count: usize) -> Vec<f64> {
        let prices: Vec<f64> = (0..count).map(|_| self.sample_price()).collect();
        if crate::config::debug::PRINT_SAMPLER_SUMMARY && !prices.is_empty() {
            let mean = prices.iter().sum::<f64>() / prices.len() as f64;
            log::info!("Sampled {} prices, mean {:.1}", prices.len(), mean);
        }
        prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DistributionRange, MixtureComponent};

    #[test]
    fn test_box_muller_known_points() {
        // u1 = 1 gives ln(1) = 0
        assert_eq!(box_muller(1.0, 0.3), 0.0);
        // u2 = 0 gives cos(0) = 1, so z = √(-2 ln u1)
        let u1 = (-0.5f64).exp(); // -2 ln u1 = 1
        assert!((box_muller(u1, 0.0) - 1.0).abs() < 1e-12);
        assert!((box_muller(u1, 0.5) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_mean_matches_mixture_mean() {
        let mut sampler = PriceSampler::seeded(42);
        let prices = sampler.sample_prices(10_000);
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        let expected = PRICE_MODEL.mean(); // ≈ 2144.3
        assert!(
            ((mean - expected) / expected).abs() < 0.03,
            "sample mean {} vs {}",
            mean,
            expected
        );
    }

    #[test]
    fn test_samples_are_whole_and_non_negative() {
        let mut sampler = PriceSampler::seeded(7);
        for price in sampler.sample_prices(10_000) {
            assert!(price >= 0.0);
            assert_eq!(price, price.round());
        }
    }

    #[test]
    fn test_negative_draws_clamp_to_zero() {
        // A single cluster centred well below zero
        let model = GaussianMixture::new(
            MixtureComponent::new(1.0, -1000.0, 1.0),
            MixtureComponent::new(f64::MIN_POSITIVE, 0.0, 1.0),
            DistributionRange { min: -10.0, max: 10.0 },
        );
        let mut sampler = PriceSampler::new(model, SmallRng::seed_from_u64(1));
        assert!(sampler.sample_prices(100).iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = PriceSampler::seeded(2024).sample_prices(50);
        let b = PriceSampler::seeded(2024).sample_prices(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_upper_tail_share() {
        // Rounded price > 3000 means raw draw ≥ 3000.5
        let mut sampler = PriceSampler::seeded(99);
        let prices = sampler.sample_prices(20_000);
        let above = prices.iter().filter(|&&p| p > 3000.0).count() as f64 / prices.len() as f64;
        let expected = 1.0 - PRICE_MODEL.cdf(3000.5);
        assert!((above - expected).abs() < 0.02, "{} vs {}", above, expected);
    }
}
