pub mod error;
pub mod metrics;
pub mod transaction;

// Dataset analysis module
pub mod dataset;
