use serde::Serialize;

use super::verdict::cap_wait;
use crate::config::INTERPRETATION;
use crate::domain::GaussianMixture;

/// A plottable `(x, y)` series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<f64>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }

    fn push(&mut self, x: f64, y: f64) {
        self.labels.push(x);
        self.values.push(y);
    }
}

/// Grid of `start, start + step, ...` up to and including `end`.
/// Computed by index so long grids don't accumulate rounding.
fn grid(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = if step > 0.0 && end >= start {
        ((end - start) / step).floor() as usize + 1
    } else {
        0
    };
    (0..n).map(move |i| start + i as f64 * step)
}

/// Mixture density across the model's display range.
pub fn distribution_curve(model: &GaussianMixture) -> ChartSeries {
    let mut series = ChartSeries::default();
    for x in grid(
        model.range.min,
        model.range.max,
        INTERPRETATION.chart.distribution_step,
    ) {
        series.push(x, model.density(x));
    }
    series
}

/// Expected wait (capped for display) for each target sell price from the
/// first step at or above `buy_price` up to the configured maximum.
pub fn wait_time_curve(
    model: &GaussianMixture,
    buy_price: f64,
    trials_per_period: u32,
) -> ChartSeries {
    let chart = &INTERPRETATION.chart;
    let start = (buy_price / chart.wait_step).ceil() * chart.wait_step;

    let mut series = ChartSeries::default();
    for target in grid(start, chart.wait_max_target, chart.wait_step) {
        let wait = model.expected_periods_to_wait(target, trials_per_period);
        series.push(target, cap_wait(wait));
    }
    series
}
