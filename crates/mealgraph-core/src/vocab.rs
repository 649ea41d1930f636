//! Vocabulary constants and URI construction
//!
//! The schema is hand-designed: five namespaces (one schema namespace for
//! classes and predicates, one resource namespace per entity kind) plus the
//! standard `rdf:type` and `rdfs:label` predicates.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Namespace IRIs bound as prefixes in serialized graph files.
pub mod ns {
    pub const RECIPE: &str = "http://example.org/recipe/";
    pub const MEAL: &str = "http://example.org/meal/";
    pub const INGREDIENT: &str = "http://example.org/ingredient/";
    pub const CATEGORY: &str = "http://example.org/category/";
    pub const CUISINE: &str = "http://example.org/cuisine/";
}

pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

pub mod rdfs {
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// Entity classes.
pub mod class {
    pub const MEAL: &str = "http://example.org/recipe/Meal";
    pub const CATEGORY: &str = "http://example.org/recipe/Category";
    pub const CUISINE: &str = "http://example.org/recipe/Cuisine";
    pub const INGREDIENT: &str = "http://example.org/recipe/Ingredient";
}

/// Recipe schema predicates.
pub mod prop {
    pub const HAS_NAME: &str = "http://example.org/recipe/hasName";
    pub const HAS_INSTRUCTIONS: &str = "http://example.org/recipe/hasInstructions";
    pub const HAS_THUMBNAIL: &str = "http://example.org/recipe/hasThumbnail";
    pub const HAS_YOUTUBE_LINK: &str = "http://example.org/recipe/hasYoutubeLink";
    pub const BELONGS_TO_CATEGORY: &str = "http://example.org/recipe/belongsToCategory";
    pub const BELONGS_TO_CUISINE: &str = "http://example.org/recipe/belongsToCuisine";
    pub const HAS_INGREDIENT: &str = "http://example.org/recipe/hasIngredient";
    pub const INGREDIENT_NAME: &str = "http://example.org/recipe/ingredientName";
    pub const INGREDIENT_MEASURE: &str = "http://example.org/recipe/ingredientMeasure";
}

/// Percent-encode everything except ASCII alphanumerics, `_`, `.`, `-`,
/// `~` and `/` (the URL path-segment scheme).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Turn a raw display string into a stable identifier suffix.
///
/// Trims surrounding whitespace, replaces internal spaces with `_`, then
/// percent-encodes the rest. Returns `None` when the trimmed input is
/// empty: the caller skips entity creation entirely in that case.
///
/// Strings differing only by case, or by internal whitespace beyond single
/// spaces, yield distinct identifiers.
pub fn local_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let underscored = trimmed.replace(' ', "_");
    Some(utf8_percent_encode(&underscored, PATH_SEGMENT).to_string())
}

/// Meal URI: the source-assigned id is used verbatim as the suffix.
pub fn meal_uri(id: &str) -> String {
    format!("{}{}", ns::MEAL, id)
}

/// Ingredient URI, scoped to one meal and one slot index so that
/// ingredients are never shared between meals.
pub fn ingredient_uri(meal_id: &str, slot: usize) -> String {
    format!("{}{}_ingredient_{}", ns::INGREDIENT, meal_id, slot)
}

pub fn category_uri(raw: &str) -> Option<String> {
    local_name(raw).map(|name| format!("{}{}", ns::CATEGORY, name))
}

pub fn cuisine_uri(raw: &str) -> Option<String> {
    local_name(raw).map(|name| format!("{}{}", ns::CUISINE, name))
}
