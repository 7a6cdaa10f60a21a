//! Classification API adapters. Implement ClassifierPort.
//!
//! Provides the reqwest-backed adapter and a mock adapter for running
//! without a backend.

pub mod http_classifier;
pub mod mock_classifier;

pub use http_classifier::HttpClassifierAdapter;
pub use mock_classifier::MockClassifierAdapter;
