//! Interpretation rules used when presenting analysis numbers.
//!
//! These thresholds belong to the presentation side, not the statistics
//! engine. Every view reads them from here.

/// Percentile buckets for judging a buy price.
/// A percentile below `great_below` is a great buy, and so on.
pub struct BuyThresholds {
    pub great_below: f64,
    pub good_below: f64,
    pub average_below: f64,
}

/// Expected-wait buckets (in periods) for judging a sell price.
pub struct WaitThresholds {
    /// Below this, waiting for a better price is worthwhile
    pub worth_waiting_below: f64,
    /// Below this (and above the previous), it's the user's call
    pub borderline_below: f64,
    /// Waits at or beyond this are displayed as "<cap>+"
    pub display_cap: f64,
}

/// Sampling grids for the plotted curves.
pub struct ChartGrid {
    /// Step between points on the distribution curve
    pub distribution_step: f64,
    /// Step between target prices on the wait-time curve
    pub wait_step: f64,
    /// Last target price on the wait-time curve
    pub wait_max_target: f64,
}

/// The Master Interpretation Configuration
pub struct InterpretationConfig {
    pub buy: BuyThresholds,
    pub wait: WaitThresholds,
    pub chart: ChartGrid,
}

pub const INTERPRETATION: InterpretationConfig = InterpretationConfig {
    buy: BuyThresholds {
        great_below: 25.0,
        good_below: 50.0,
        average_below: 75.0,
    },

    wait: WaitThresholds {
        worth_waiting_below: 2.0,
        borderline_below: 5.0,
        display_cap: 100.0,
    },

    chart: ChartGrid {
        distribution_step: 50.0,
        wait_step: 100.0,
        wait_max_target: 5500.0,
    },
};
