//! Statistics engine

pub mod aggregator;

pub use aggregator::compute_summary;
