//! Canned read-only queries over a loaded graph
//!
//! Fixed pattern matches mirroring the questions the downstream query tool
//! asks of a serialized graph: list meals, filter by cuisine, list a
//! meal's ingredients, count meals per category, and substring-search
//! ingredient names. No query language is involved.

use crate::store::GraphStore;
use itertools::Itertools;
use mealgraph_core::model::Term;
use mealgraph_core::vocab;
use serde::Serialize;

/// One ingredient of a meal: name plus optional measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRow {
    pub name: String,
    pub measure: Option<String>,
}

/// Category label with its distinct meal count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub meals: usize,
}

fn meal_name(store: &GraphStore, meal: &str) -> Option<String> {
    store
        .find_triples(Some(meal), Some(vocab::prop::HAS_NAME), None)
        .first()
        .and_then(|triple| triple.object.as_literal())
        .map(str::to_string)
}

/// Names of all meals, sorted.
pub fn meal_names(store: &GraphStore) -> Vec<String> {
    let meal_class = Term::Iri(vocab::class::MEAL.to_string());
    store
        .find_triples(None, Some(vocab::rdf::TYPE), Some(&meal_class))
        .into_iter()
        .filter_map(|triple| meal_name(store, &triple.subject))
        .sorted()
        .collect()
}

/// Names of meals whose cuisine carries exactly the given label.
pub fn meals_by_cuisine(store: &GraphStore, label: &str) -> Vec<String> {
    let wanted = Term::Literal(label.to_string());
    let cuisines: Vec<String> = store
        .find_triples(None, Some(vocab::rdfs::LABEL), Some(&wanted))
        .into_iter()
        .filter(|triple| triple.subject.starts_with(vocab::ns::CUISINE))
        .map(|triple| triple.subject.clone())
        .collect();

    let mut names = Vec::new();
    for cuisine in &cuisines {
        let target = Term::Iri(cuisine.clone());
        for relation in store.find_triples(None, Some(vocab::prop::BELONGS_TO_CUISINE), Some(&target)) {
            if let Some(name) = meal_name(store, &relation.subject) {
                names.push(name);
            }
        }
    }
    names.into_iter().sorted().dedup().collect()
}

/// Ingredients of the named meal, in slot order.
pub fn meal_ingredients(store: &GraphStore, name: &str) -> Vec<IngredientRow> {
    let wanted = Term::Literal(name.to_string());
    let mut rows = Vec::new();
    for named in store.find_triples(None, Some(vocab::prop::HAS_NAME), Some(&wanted)) {
        for relation in store.find_triples(Some(&named.subject), Some(vocab::prop::HAS_INGREDIENT), None) {
            let ingredient = match relation.object.as_iri() {
                Some(iri) => iri,
                None => continue,
            };
            let ingredient_name = store
                .find_triples(Some(ingredient), Some(vocab::prop::INGREDIENT_NAME), None)
                .first()
                .and_then(|triple| triple.object.as_literal())
                .map(str::to_string);
            let measure = store
                .find_triples(Some(ingredient), Some(vocab::prop::INGREDIENT_MEASURE), None)
                .first()
                .and_then(|triple| triple.object.as_literal())
                .map(str::to_string);
            if let Some(ingredient_name) = ingredient_name {
                rows.push(IngredientRow {
                    name: ingredient_name,
                    measure,
                });
            }
        }
    }
    rows
}

/// Distinct meal count per category label, ordered by count descending
/// and label ascending on ties.
pub fn category_counts(store: &GraphStore) -> Vec<CategoryCount> {
    let category_class = Term::Iri(vocab::class::CATEGORY.to_string());
    let mut counts = Vec::new();
    for typed in store.find_triples(None, Some(vocab::rdf::TYPE), Some(&category_class)) {
        let category = &typed.subject;
        let target = Term::Iri(category.clone());
        let meals = store
            .find_triples(None, Some(vocab::prop::BELONGS_TO_CATEGORY), Some(&target))
            .iter()
            .map(|triple| triple.subject.as_str())
            .unique()
            .count();
        for labelled in store.find_triples(Some(category), Some(vocab::rdfs::LABEL), None) {
            if let Some(label) = labelled.object.as_literal() {
                counts.push(CategoryCount {
                    label: label.to_string(),
                    meals,
                });
            }
        }
    }
    counts
        .into_iter()
        .sorted_by(|a, b| b.meals.cmp(&a.meals).then_with(|| a.label.cmp(&b.label)))
        .collect()
}

/// Distinct names of meals with an ingredient whose name contains the
/// needle, case-insensitively. Sorted.
pub fn meals_with_ingredient(store: &GraphStore, needle: &str) -> Vec<String> {
    let needle = needle.to_lowercase();
    let mut names = Vec::new();
    for named in store.find_triples(None, Some(vocab::prop::INGREDIENT_NAME), None) {
        let matched = named
            .object
            .as_literal()
            .map_or(false, |value| value.to_lowercase().contains(&needle));
        if !matched {
            continue;
        }
        let target = Term::Iri(named.subject.clone());
        for relation in store.find_triples(None, Some(vocab::prop::HAS_INGREDIENT), Some(&target)) {
            if let Some(name) = meal_name(store, &relation.subject) {
                names.push(name);
            }
        }
    }
    names.into_iter().sorted().dedup().collect()
}
