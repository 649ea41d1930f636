//! # mealgraph core
//!
//! Data model and record-to-triple mapping for the recipe knowledge graph.
//! Everything in this crate is pure: fetching records and persisting the
//! accumulated graph live in the `mealgraph-client` and `mealgraph-store`
//! crates.

pub mod mapper;
pub mod model;
pub mod record;
pub mod vocab;

pub use mapper::{map_meal, MapError, INGREDIENT_SLOTS};
pub use model::{Term, Triple};
pub use record::MealRecord;
