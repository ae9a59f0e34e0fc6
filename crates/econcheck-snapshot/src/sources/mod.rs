//! `ReferenceDataSource` implementations.

pub mod fixed;
pub mod http;

pub use fixed::FixedSnapshotSource;
pub use http::HttpReferenceSource;
