//! Storage layer
//!
//! Process-local collections only; nothing survives a restart.
//! The product listing is served from a serialized snapshot kept next to them.

pub mod memory;
pub mod snapshot;

pub use memory::EntityStore;
pub use snapshot::SnapshotCache;
