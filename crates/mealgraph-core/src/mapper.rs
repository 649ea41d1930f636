//! Record-to-triple mapping
//!
//! Deterministic transformation of one fetched meal record into its full
//! triple set. The mapper is a pure function: accumulating the output into
//! a store is the caller's concern.

use crate::model::Triple;
use crate::record::MealRecord;
use crate::vocab;
use thiserror::Error;

/// Number of ingredient slots TheMealDB exposes per meal record.
pub const INGREDIENT_SLOTS: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("record is missing the idMeal identifier")]
    MissingIdentifier,
}

/// Map one meal record into its triple set.
///
/// Scalar fields that are absent or empty produce no triple at all.
/// Category and cuisine values that normalize to an identifier produce the
/// entity's `rdf:type` and `rdfs:label` triples (redundant when the entity
/// was already emitted for another meal; the store's set semantics collapse
/// them) plus the meal's relation triple. Each of the twenty ingredient
/// slots with a non-empty trimmed name produces a meal-and-slot-scoped
/// ingredient entity.
///
/// Output order is fixed so tests can compare runs directly; the
/// accumulating store is order-insensitive.
pub fn map_meal(record: &MealRecord) -> Result<Vec<Triple>, MapError> {
    let id = record.id().ok_or(MapError::MissingIdentifier)?;
    let meal = vocab::meal_uri(id);

    let mut triples = Vec::new();
    triples.push(Triple::resource(&meal, vocab::rdf::TYPE, vocab::class::MEAL));

    if let Some(name) = record.name() {
        triples.push(Triple::literal(&meal, vocab::prop::HAS_NAME, name));
    }
    if let Some(instructions) = record.instructions() {
        triples.push(Triple::literal(&meal, vocab::prop::HAS_INSTRUCTIONS, instructions));
    }
    if let Some(thumbnail) = record.thumbnail() {
        triples.push(Triple::literal(&meal, vocab::prop::HAS_THUMBNAIL, thumbnail));
    }
    if let Some(youtube) = record.youtube() {
        triples.push(Triple::literal(&meal, vocab::prop::HAS_YOUTUBE_LINK, youtube));
    }

    if let Some(raw) = record.category() {
        if let Some(category) = vocab::category_uri(raw) {
            triples.push(Triple::resource(&category, vocab::rdf::TYPE, vocab::class::CATEGORY));
            triples.push(Triple::literal(&category, vocab::rdfs::LABEL, raw));
            triples.push(Triple::resource(&meal, vocab::prop::BELONGS_TO_CATEGORY, &category));
        }
    }

    if let Some(raw) = record.area() {
        if let Some(cuisine) = vocab::cuisine_uri(raw) {
            triples.push(Triple::resource(&cuisine, vocab::rdf::TYPE, vocab::class::CUISINE));
            triples.push(Triple::literal(&cuisine, vocab::rdfs::LABEL, raw));
            triples.push(Triple::resource(&meal, vocab::prop::BELONGS_TO_CUISINE, &cuisine));
        }
    }

    for slot in 1..=INGREDIENT_SLOTS {
        let name = match record.ingredient(slot).map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };
        let ingredient = vocab::ingredient_uri(id, slot);
        triples.push(Triple::resource(&ingredient, vocab::rdf::TYPE, vocab::class::INGREDIENT));
        triples.push(Triple::literal(&ingredient, vocab::prop::INGREDIENT_NAME, name));
        if let Some(measure) = record.measure(slot).map(str::trim) {
            if !measure.is_empty() {
                triples.push(Triple::literal(&ingredient, vocab::prop::INGREDIENT_MEASURE, measure));
            }
        }
        triples.push(Triple::resource(&meal, vocab::prop::HAS_INGREDIENT, &ingredient));
    }

    Ok(triples)
}
