#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod domain;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use analysis::{AnalysisRequest, AnalysisResult, analyze};
pub use config::PRICE_MODEL;
pub use domain::{DistributionRange, GaussianMixture, MixtureComponent};
pub use stats::PriceSampler;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::{Itertools, MinMaxResult};

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Judge a buy price, and optionally a sell price, against the price model
    Analyze {
        /// Price you are being offered to buy at
        #[arg(long)]
        buy: f64,
        /// Price you could sell at
        #[arg(long)]
        sell: Option<f64>,
        /// Friends who also check prices each period
        #[arg(long, default_value_t = 0)]
        friends: u32,
        /// Emit the result as JSON instead of a text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Draw random prices from the model
    Sample {
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the data behind one of the charts
    Curve {
        #[arg(value_enum)]
        kind: CurveKind,
        /// Buy price the wait-time curve starts from
        #[arg(long, default_value_t = PRICE_MODEL.range.min)]
        buy: f64,
        #[arg(long, default_value_t = 0)]
        friends: u32,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Mixture density across the display range
    Distribution,
    /// Expected wait by target sell price
    Wait,
}

/// Runs one CLI command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Analyze {
            buy,
            sell,
            friends,
            json,
        } => {
            let request = AnalysisRequest::new(*buy, *sell, *friends);
            let result = analyze(&PRICE_MODEL, &request)
                .with_context(|| format!("Failed to analyse {:?}", request))?;
            if *json {
                serde_json::to_string_pretty(&result).context("Failed to serialise analysis")
            } else {
                Ok(report::render_analysis(&result))
            }
        }
        Command::Sample { count, seed } => {
            let mut sampler = match seed {
                Some(seed) => PriceSampler::seeded(*seed),
                None => PriceSampler::from_entropy(),
            };
            let prices = sampler.sample_prices(*count);
            Ok(render_samples(&prices))
        }
        Command::Curve {
            kind,
            buy,
            friends,
            json,
        } => {
            let request = AnalysisRequest::new(*buy, None, *friends);
            request.validate()?;
            let series = match kind {
                CurveKind::Distribution => analysis::distribution_curve(&PRICE_MODEL),
                CurveKind::Wait => analysis::wait_time_curve(
                    &PRICE_MODEL,
                    request.buy_price,
                    request.trials_per_period(),
                ),
            };
            if *json {
                return serde_json::to_string_pretty(&series).context("Failed to serialise curve");
            }
            let text = match kind {
                CurveKind::Distribution => {
                    report::render_series("Price distribution", "price", "density", &series)
                        + "\n"
                        + &report::render_buy_legend()
                }
                CurveKind::Wait => {
                    report::render_series(
                        "Expected wait by target sell price",
                        "target",
                        "periods",
                        &series,
                    ) + "\n"
                        + &report::render_sell_legend()
                }
            };
            Ok(text)
        }
    }
}

fn render_samples(prices: &[f64]) -> String {
    let mut out = prices.iter().map(|p| format!("{:.0}", p)).join("\n");
    if prices.len() > 1 {
        let mean = prices.iter().sum::<f64>() / prices.len() as f64;
        let (min, max) = match prices.iter().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::MinMax(min, max) => (*min, *max),
            MinMaxResult::OneElement(p) => (*p, *p),
            MinMaxResult::NoElements => (0.0, 0.0),
        };
        out.push_str(&format!(
            "\n{} samples: mean {:.1}, min {:.0}, max {:.0} (model mean {:.1})",
            prices.len(),
            mean,
            min,
            max,
            PRICE_MODEL.mean()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("price-sniper").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_analyze_command_text() {
        let out = run(&parse(&["analyze", "--buy", "1500", "--sell", "2500"])).unwrap();
        assert!(out.contains("BUY ANALYSIS:"));
        assert!(out.contains("SELL ANALYSIS:"));
    }

    #[test]
    fn test_analyze_command_json() {
        let out = run(&parse(&["analyze", "--buy", "1500", "--friends", "2", "--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["trials_per_period"], 3);
        assert!(value["sell_price"].is_null());
    }

    #[test]
    fn test_analyze_rejects_bad_price() {
        let err = run(&parse(&["analyze", "--buy", "0"])).unwrap_err();
        assert!(format!("{:#}", err).contains("Buy price"));
    }

    #[test]
    fn test_negative_friends_rejected_by_parser() {
        let parsed = Cli::try_parse_from(["price-sniper", "analyze", "--buy", "10", "--friends", "-1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_seeded_sample_is_reproducible() {
        let a = run(&parse(&["sample", "--count", "5", "--seed", "11"])).unwrap();
        let b = run(&parse(&["sample", "--count", "5", "--seed", "11"])).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("5 samples: mean"));
    }

    #[test]
    fn test_curve_commands() {
        let dist = run(&parse(&["curve", "distribution"])).unwrap();
        assert!(dist.starts_with("PRICE DISTRIBUTION:"));
        assert!(dist.contains("BUY VERDICTS BY PERCENTILE:"));

        let wait_text = run(&parse(&["curve", "wait", "--buy", "4000"])).unwrap();
        assert!(wait_text.contains("SELL RECOMMENDATIONS BY EXPECTED WAIT:"));

        let wait = run(&parse(&["curve", "wait", "--buy", "4000", "--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&wait).unwrap();
        assert_eq!(value["labels"][0], 4000.0);
    }
}
