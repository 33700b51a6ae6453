//! Report projection and derived metrics
//!
//! Maps a dataset snapshot into the tabular intermediates the serializers
//! consume, plus growth calculations and rule-based key insights.

pub mod growth;
pub mod insights;
pub mod projector;
pub mod provider;

pub use growth::*;
pub use insights::*;
pub use projector::*;
pub use provider::*;
