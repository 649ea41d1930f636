//! Entity graph visualization export
//!
//! Renders the knowledge graph's entity relationships to Graphviz DOT.
//! Only relation triples appear: `rdf:type` and `rdfs:label` statements
//! and literal objects are skipped, so the picture shows meals connected
//! to their categories, cuisines and ingredients. Presentational only;
//! the data pipeline does not depend on this crate succeeding.

use mealgraph_core::model::Term;
use mealgraph_core::vocab;
use mealgraph_store::GraphStore;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Maximum characters of a node display label.
const LABEL_WIDTH: usize = 20;

fn relation_label(predicate: &str) -> Option<&'static str> {
    match predicate {
        vocab::prop::BELONGS_TO_CATEGORY => Some("belongsToCategory"),
        vocab::prop::BELONGS_TO_CUISINE => Some("belongsToCuisine"),
        vocab::prop::HAS_INGREDIENT => Some("hasIngredient"),
        _ => None,
    }
}

fn display_label(store: &GraphStore, uri: &str) -> String {
    let labelled = store
        .find_triples(Some(uri), Some(vocab::prop::HAS_NAME), None)
        .into_iter()
        .chain(store.find_triples(Some(uri), Some(vocab::rdfs::LABEL), None))
        .chain(store.find_triples(Some(uri), Some(vocab::prop::INGREDIENT_NAME), None))
        .find_map(|triple| triple.object.as_literal());

    let text = match labelled {
        Some(label) => label,
        None => uri.rsplit('/').next().unwrap_or(uri),
    };
    text.chars().take(LABEL_WIDTH).collect()
}

fn node(
    graph: &mut DiGraph<String, &'static str>,
    nodes: &mut HashMap<String, NodeIndex>,
    store: &GraphStore,
    uri: String,
) -> NodeIndex {
    if let Some(&index) = nodes.get(&uri) {
        return index;
    }
    let label = display_label(store, &uri);
    let index = graph.add_node(label);
    nodes.insert(uri, index);
    index
}

/// Build the entity graph: one node per entity URI, one labeled edge per
/// relation triple.
pub fn entity_graph(store: &GraphStore) -> DiGraph<String, &'static str> {
    let mut graph = DiGraph::new();
    let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

    for triple in store.iter() {
        let label = match relation_label(&triple.predicate) {
            Some(label) => label,
            None => continue,
        };
        let target = match &triple.object {
            Term::Iri(iri) => iri.clone(),
            Term::Literal(_) => continue,
        };
        let source = node(&mut graph, &mut nodes, store, triple.subject.clone());
        let target = node(&mut graph, &mut nodes, store, target);
        graph.add_edge(source, target, label);
    }

    graph
}

/// Write the entity graph to `path` in Graphviz DOT syntax.
pub fn export_dot(store: &GraphStore, path: &Path) -> Result<(), VizError> {
    let graph = entity_graph(store);
    fs::write(path, format!("{}", Dot::new(&graph)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealgraph_core::mapper::map_meal;
    use mealgraph_core::record::MealRecord;

    fn sample_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.insert_all(
            map_meal(
                &MealRecord::new("52874")
                    .with_name("Beef Stew")
                    .with_category("Beef")
                    .with_area("Italian")
                    .with_ingredient(1, "Beef", Some("1kg")),
            )
            .unwrap(),
        );
        store
    }

    #[test]
    fn test_entity_graph_shape() {
        let graph = entity_graph(&sample_store());

        // Meal, category, cuisine, one ingredient.
        assert_eq!(graph.node_count(), 4);
        // One relation edge to each.
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_type_and_label_triples_are_skipped() {
        let mut store = GraphStore::new();
        store.insert_all(map_meal(&MealRecord::new("1").with_name("Plain")).unwrap());

        // Only type and name triples exist, so the picture is empty.
        let graph = entity_graph(&store);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_node_labels_are_truncated_display_names() {
        let mut store = GraphStore::new();
        store.insert_all(
            map_meal(
                &MealRecord::new("9")
                    .with_name("A very long meal name indeed")
                    .with_category("Beef"),
            )
            .unwrap(),
        );

        let graph = entity_graph(&store);
        let labels: Vec<&str> = graph.node_weights().map(String::as_str).collect();
        assert!(labels.contains(&"A very long meal nam"));
        assert!(labels.contains(&"Beef"));
    }

    #[test]
    fn test_export_dot_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");

        export_dot(&sample_store(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        assert!(text.starts_with("digraph"));
        assert!(text.contains("Beef Stew"));
        assert!(text.contains("hasIngredient"));
    }
}
