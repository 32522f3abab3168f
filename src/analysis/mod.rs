// Turning user prices into analysis results, verdicts and chart series
pub mod chart_data;
pub mod price_analysis;
pub mod request;
pub mod verdict;

// Re-export commonly used types
pub use chart_data::{ChartSeries, distribution_curve, wait_time_curve};
pub use price_analysis::{AnalysisResult, analyze};
pub use request::{AnalysisError, AnalysisRequest};
pub use verdict::{BuyVerdict, SellVerdict, cap_wait, format_wait};
