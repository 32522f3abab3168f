use std::fmt;

use crate::config::INTERPRETATION;

/// Qualitative label for a buy price, bucketed by its percentile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum BuyVerdict {
    Great,
    Good,
    Average,
    Poor,
}

impl BuyVerdict {
    pub fn from_percentile(percentile: f64) -> Self {
        let t = &INTERPRETATION.buy;
        if percentile < t.great_below {
            BuyVerdict::Great
        } else if percentile < t.good_below {
            BuyVerdict::Good
        } else if percentile < t.average_below {
            BuyVerdict::Average
        } else {
            BuyVerdict::Poor
        }
    }

    /// Percentile band this verdict covers, e.g. "25 to 50"
    pub fn band(&self) -> String {
        let t = &INTERPRETATION.buy;
        match self {
            BuyVerdict::Great => format!("below {}", t.great_below),
            BuyVerdict::Good => format!("{} to {}", t.great_below, t.good_below),
            BuyVerdict::Average => format!("{} to {}", t.good_below, t.average_below),
            BuyVerdict::Poor => format!("{} and above", t.average_below),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuyVerdict::Great => "This is in the bottom 25% of prices.",
            BuyVerdict::Good => "This is below average.",
            BuyVerdict::Average => "Consider waiting for better.",
            BuyVerdict::Poor => "This is in the top 25% of prices.",
        }
    }
}

impl fmt::Display for BuyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuyVerdict::Great => write!(f, "Great buy!"),
            BuyVerdict::Good => write!(f, "Good buy!"),
            BuyVerdict::Average => write!(f, "Average buy."),
            BuyVerdict::Poor => write!(f, "Poor buy."),
        }
    }
}

/// Recommendation for a sell price, bucketed by the expected wait for a
/// better one.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, strum_macros::EnumIter)]
pub enum SellVerdict {
    WorthWaiting,
    Borderline,
    SellNow,
}

impl SellVerdict {
    /// An infinite wait falls in the last bucket.
    pub fn from_expected_wait(periods: f64) -> Self {
        let t = &INTERPRETATION.wait;
        if periods < t.worth_waiting_below {
            SellVerdict::WorthWaiting
        } else if periods < t.borderline_below {
            SellVerdict::Borderline
        } else {
            SellVerdict::SellNow
        }
    }

    /// Expected-wait band this verdict covers, in periods
    pub fn band(&self) -> String {
        let t = &INTERPRETATION.wait;
        match self {
            SellVerdict::WorthWaiting => format!("below {}", t.worth_waiting_below),
            SellVerdict::Borderline => {
                format!("{} to {}", t.worth_waiting_below, t.borderline_below)
            }
            SellVerdict::SellNow => format!("{} and above", t.borderline_below),
        }
    }
}

impl fmt::Display for SellVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SellVerdict::WorthWaiting => write!(f, "Might be worth waiting!"),
            SellVerdict::Borderline => write!(f, "Borderline - your call"),
            SellVerdict::SellNow => write!(f, "Sell now! Not worth waiting"),
        }
    }
}

/// Clamps an expected wait for charting. Infinite waits become the cap.
pub fn cap_wait(periods: f64) -> f64 {
    periods.min(INTERPRETATION.wait.display_cap)
}

/// Formats an expected wait, showing "100+" at or beyond the display cap.
pub fn format_wait(periods: f64) -> String {
    let cap = INTERPRETATION.wait.display_cap;
    if periods < cap {
        format!("{:.1}", periods)
    } else {
        format!("{}+", cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_buy_buckets() {
        assert_eq!(BuyVerdict::from_percentile(0.0), BuyVerdict::Great);
        assert_eq!(BuyVerdict::from_percentile(24.99), BuyVerdict::Great);
        assert_eq!(BuyVerdict::from_percentile(25.0), BuyVerdict::Good);
        assert_eq!(BuyVerdict::from_percentile(50.0), BuyVerdict::Average);
        assert_eq!(BuyVerdict::from_percentile(74.9), BuyVerdict::Average);
        assert_eq!(BuyVerdict::from_percentile(75.0), BuyVerdict::Poor);
        assert_eq!(BuyVerdict::from_percentile(100.0), BuyVerdict::Poor);
    }

    #[test]
    fn test_sell_buckets() {
        assert_eq!(SellVerdict::from_expected_wait(1.0), SellVerdict::WorthWaiting);
        assert_eq!(SellVerdict::from_expected_wait(2.0), SellVerdict::Borderline);
        assert_eq!(SellVerdict::from_expected_wait(4.99), SellVerdict::Borderline);
        assert_eq!(SellVerdict::from_expected_wait(5.0), SellVerdict::SellNow);
        assert_eq!(
            SellVerdict::from_expected_wait(f64::INFINITY),
            SellVerdict::SellNow
        );
    }

    #[test]
    fn test_every_verdict_has_text() {
        for v in BuyVerdict::iter() {
            assert!(!v.to_string().is_empty());
            assert!(!v.description().is_empty());
        }
        assert_eq!(SellVerdict::iter().count(), 3);
    }

    #[test]
    fn test_bands_follow_thresholds() {
        assert_eq!(BuyVerdict::Great.band(), "below 25");
        assert_eq!(BuyVerdict::Average.band(), "50 to 75");
        assert_eq!(SellVerdict::Borderline.band(), "2 to 5");
        assert_eq!(SellVerdict::SellNow.band(), "5 and above");
    }

    #[test]
    fn test_wait_formatting() {
        assert_eq!(format_wait(3.456), "3.5");
        assert_eq!(format_wait(100.0), "100+");
        assert_eq!(format_wait(f64::INFINITY), "100+");
        assert_eq!(cap_wait(f64::INFINITY), 100.0);
        assert_eq!(cap_wait(12.0), 12.0);
    }
}
