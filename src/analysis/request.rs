use std::fmt;

/// Rejected user input. The statistics engine assumes all of this was
/// checked before it is called.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Buy price missing, non-finite, or not strictly positive
    InvalidBuyPrice(f64),
    /// Sell price given but non-finite or not strictly positive
    InvalidSellPrice(f64),
}

impl std::error::Error for AnalysisError {}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidBuyPrice(price) => {
                write!(f, "Buy price must be a number greater than 0 (got {})", price)
            }
            AnalysisError::InvalidSellPrice(price) => {
                write!(f, "Sell price must be a number greater than 0 (got {})", price)
            }
        }
    }
}

/// What the user asked about.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub buy_price: f64,
    pub sell_price: Option<f64>,
    /// Extra independent price quotes per period (e.g. friends checking
    /// prices on your behalf). Total trials per period is `1 + extra_trials`.
    pub extra_trials: u32,
}

impl AnalysisRequest {
    pub fn new(buy_price: f64, sell_price: Option<f64>, extra_trials: u32) -> Self {
        Self {
            buy_price,
            sell_price,
            extra_trials,
        }
    }

    pub fn trials_per_period(&self) -> u32 {
        self.extra_trials.saturating_add(1)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !is_valid_price(self.buy_price) {
            return Err(AnalysisError::InvalidBuyPrice(self.buy_price));
        }
        if let Some(sell) = self.sell_price {
            if !is_valid_price(sell) {
                return Err(AnalysisError::InvalidSellPrice(sell));
            }
        }
        Ok(())
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
