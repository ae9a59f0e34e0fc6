mod clock;
mod data_source;
mod similarity;

pub use clock::{Clock, ManualClock, SystemClock};
pub use data_source::ReferenceDataSource;
pub use similarity::SimilarityScorer;
