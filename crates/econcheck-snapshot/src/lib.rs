//! # econcheck-snapshot
//!
//! Read-through cache of reference payloads, one immutable snapshot per
//! category with a category-specific TTL. Refresh failures never surface as
//! errors: the store falls back to the last good snapshot, then to the
//! built-in defaults, and flags the category as degraded.

pub mod cache;
pub mod defaults;
pub mod sources;
pub mod store;

pub use cache::{CacheLookup, SnapshotCache};
pub use sources::{FixedSnapshotSource, HttpReferenceSource};
pub use store::{ReferenceStore, Resolved};
