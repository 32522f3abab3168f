// Domain types and value objects
pub mod mixture;

// Re-export commonly used types
pub use mixture::{DistributionRange, GaussianMixture, MixtureComponent};
