// Statistical inference engine for the price model
pub mod mixture;
pub mod normal;
pub mod sampling;
pub mod special;

// Re-export commonly used items
pub use mixture::{
    ComponentAttribution, component_attribution, expected_periods_to_wait, mixture_cdf,
    mixture_density, percentile, probability_above_with_trials, probability_strictly_above,
};
pub use normal::{normal_cdf, normal_density};
pub use sampling::{PriceSampler, box_muller};
pub use special::error_function;
