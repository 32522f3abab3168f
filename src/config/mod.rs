//! Configuration module for the price sniper.

pub mod debug;
pub mod distribution;
pub mod interpretation;

// Re-export commonly used items
pub use distribution::PRICE_MODEL;
pub use interpretation::INTERPRETATION;
