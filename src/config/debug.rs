//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. Verbose per-call dumps stay `false`;
//! the short summaries and warnings that are on by default log at `info`
//! or `warn`, so they show under the binary's default log filter.

/// Emit every intermediate number computed while building an analysis result.
pub const PRINT_ANALYSIS_DETAILS: bool = false;

/// Emit a summary line (count, mean) after batches of sampled prices.
pub const PRINT_SAMPLER_SUMMARY: bool = true;

/// Emit a warning whenever an expected wait saturates to infinity.
pub const PRINT_SATURATION_WARNINGS: bool = true;
