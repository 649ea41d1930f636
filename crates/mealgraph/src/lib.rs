//! # mealgraph - Recipe Knowledge Graph Pipeline
//!
//! mealgraph fetches meal records from TheMealDB API, maps each record
//! into RDF triples following a fixed recipe schema, accumulates the
//! triples in an in-memory set-semantics store, and serializes the result
//! to a Turtle (or N-Triples) file. Canned pattern queries run against a
//! previously serialized graph, and the entity graph can optionally be
//! exported as Graphviz DOT.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mealgraph::prelude::*;
//! use std::path::Path;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MealDbClient::new(ClientConfig::default());
//!     let report = fetch_random_meals(&client, 50, Duration::from_millis(500)).await;
//!
//!     let mut store = GraphStore::new();
//!     for record in &report.meals {
//!         store.insert_all(map_meal(record)?);
//!     }
//!
//!     save_to_file(&store, Path::new("recipe_knowledge_graph.ttl"), GraphFormat::Turtle)?;
//!     println!("Total triples: {}", store.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`mealgraph-core`**: record model, vocabulary and the
//!   record-to-triple mapper
//! - **`mealgraph-store`**: in-memory triple store, graph file codec and
//!   canned queries
//! - **`mealgraph-client`**: TheMealDB HTTP client with rate-limited
//!   batch fetching
//! - **`mealgraph-viz`**: Graphviz DOT export of the entity graph
//! - **`mealgraph-cli`**: command-line interface
//!
//! ## Feature Flags
//!
//! - `full` (default): all library crates
//! - `core`: data model and mapper only
//! - `store`: triple store and serialization
//! - `client`: HTTP client
//! - `viz`: DOT export

// Re-export public APIs from member crates (feature-gated)

#[cfg(feature = "core")]
pub use mealgraph_core as core;

#[cfg(feature = "store")]
pub use mealgraph_store as store;

#[cfg(feature = "client")]
pub use mealgraph_client as client;

#[cfg(feature = "viz")]
pub use mealgraph_viz as viz;

// Convenience re-exports for common types (feature-gated)
#[cfg(feature = "core")]
pub use mealgraph_core::{map_meal, MapError, MealRecord, Term, Triple, INGREDIENT_SLOTS};

#[cfg(feature = "store")]
pub use mealgraph_store::{load_from_file, save_to_file, GraphFormat, GraphStore, StoreError};

#[cfg(feature = "client")]
pub use mealgraph_client::{
    fetch_random_meals, ClientConfig, ClientError, FetchReport, MealDbClient, RecordSource,
};

// Commonly used external dependencies
pub use anyhow;
pub use serde;
pub use serde_json;
pub use tokio;

/// Prelude module for convenient imports
///
/// ```rust
/// use mealgraph::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "core")]
    pub use crate::{map_meal, MealRecord, Term, Triple};

    #[cfg(feature = "store")]
    pub use crate::{load_from_file, save_to_file, GraphFormat, GraphStore};

    #[cfg(feature = "client")]
    pub use crate::{fetch_random_meals, ClientConfig, MealDbClient, RecordSource};

    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}

/// Current version of mealgraph
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    #[cfg(all(feature = "core", feature = "store"))]
    #[test]
    fn test_facade_pipeline_smoke() {
        let record = MealRecord::new("52874")
            .with_name("Beef Stew")
            .with_category("Beef");

        let mut store = GraphStore::new();
        store.insert_all(map_meal(&record).unwrap());
        assert_eq!(store.len(), 5);
    }
}
