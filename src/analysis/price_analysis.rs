use serde::Serialize;

use super::request::{AnalysisError, AnalysisRequest};
use super::verdict::{BuyVerdict, SellVerdict};
use crate::config::debug;
use crate::domain::GaussianMixture;

/// Everything shown to the user for one buy (and optional sell) price.
///
/// Built by [`analyze`]; the statistics engine only produces the individual
/// numbers. Sell-side fields are `None` when no sell price was given.
/// An unbounded `expected_periods` is `f64::INFINITY` (serialised as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub buy_price: f64,
    pub buy_percentile: f64,
    pub low_cluster_pct: f64,
    pub high_cluster_pct: f64,
    pub trials_per_period: u32,

    pub sell_price: Option<f64>,
    pub sell_percentile: Option<f64>,
    pub profit: Option<f64>,
    /// Return on the buy price, in percent
    pub roi: Option<f64>,
    /// Chance per period of a better sell price, in percent
    pub prob_better: Option<f64>,
    pub expected_periods: Option<f64>,
}

impl AnalysisResult {
    pub fn buy_verdict(&self) -> BuyVerdict {
        BuyVerdict::from_percentile(self.buy_percentile)
    }

    /// Percentage of prices lower (better for a buyer) than the buy price.
    /// This is the percentile itself.
    pub fn buy_pct_lower(&self) -> f64 {
        self.buy_percentile
    }

    /// Percentage of prices higher (worse for a buyer) than the buy price.
    pub fn buy_pct_higher(&self) -> f64 {
        100.0 - self.buy_percentile
    }

    pub fn sell_verdict(&self) -> Option<SellVerdict> {
        self.expected_periods.map(SellVerdict::from_expected_wait)
    }

    pub fn has_sell_side(&self) -> bool {
        self.sell_price.is_some()
    }
}

/// Validates `request` and computes every statistic against `model`.
pub fn analyze(
    model: &GaussianMixture,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, AnalysisError> {
    request.validate()?;

    let buy = request.buy_price;
    let trials = request.trials_per_period();
    let attribution = model.component_attribution(buy);

    let mut result = AnalysisResult {
        buy_price: buy,
        buy_percentile: model.percentile(buy),
        low_cluster_pct: attribution.low_cluster_pct,
        high_cluster_pct: attribution.high_cluster_pct,
        trials_per_period: trials,
        sell_price: None,
        sell_percentile: None,
        profit: None,
        roi: None,
        prob_better: None,
        expected_periods: None,
    };

    if let Some(sell) = request.sell_price {
        let profit = sell - buy;
        result.sell_price = Some(sell);
        result.sell_percentile = Some(model.percentile(sell));
        result.profit = Some(profit);
        result.roi = Some(profit / buy * 100.0);
        result.prob_better = Some(model.probability_above_with_trials(sell, trials));
        result.expected_periods = Some(model.expected_periods_to_wait(sell, trials));
    }

    if debug::PRINT_ANALYSIS_DETAILS {
        log::info!("Analysis for {:?}: {:?}", request, result);
    }

    Ok(result)
}
