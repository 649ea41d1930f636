//! In-memory triple store with set semantics, graph file serialization
//! and the canned read-only queries.

pub mod codec;
pub mod query;
pub mod store;

pub use codec::{load_from_file, save_to_file, GraphFormat, StoreError};
pub use store::GraphStore;
