pub mod error;
pub mod series;
pub mod stats;
pub mod trial;

pub use error::AnalysisError;
pub use series::Series;
pub use trial::TrialSet;
