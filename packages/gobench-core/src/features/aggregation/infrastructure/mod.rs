mod aggregator;
mod median;

pub use aggregator::aggregate;
pub use median::{median_f64, median_u64};
