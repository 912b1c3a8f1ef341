// Principal component analysis with an interpretation layer

#![doc = include_str!("../README.md")]

pub mod contrib;
pub mod dataset;
pub mod decompose;
pub mod error;
pub mod loadings;
pub mod pipeline;
pub mod report;
pub mod standardize;

pub use contrib::{individual_contributions, variable_contributions};
pub use dataset::Dataset;
pub use decompose::Decomposition;
pub use error::{PcaError, Result};
pub use loadings::correlation_loadings;
pub use pipeline::{analyze, PcaConfig, PcaResults};
pub use report::{LabeledTable, PcaReport};
pub use standardize::StandardScaler;
