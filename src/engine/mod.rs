mod aggregator;
mod errors;

pub use aggregator::Aggregator;
