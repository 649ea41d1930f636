//! TheMealDB record model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One meal record as returned by TheMealDB API.
///
/// The API reports missing values either by omitting the key, returning
/// `null`, or returning an empty string; the accessor methods treat all
/// three as "not provided". The twenty `strIngredientN`/`strMeasureN`
/// slot pairs are kept in the flattened `extra` map and read through
/// [`MealRecord::ingredient`] and [`MealRecord::measure`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    /// Remaining fields, including the ingredient/measure slots.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

impl MealRecord {
    pub fn new<S: Into<String>>(id: S) -> Self {
        MealRecord {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn id(&self) -> Option<&str> {
        present(&self.id)
    }

    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn instructions(&self) -> Option<&str> {
        present(&self.instructions)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        present(&self.thumbnail)
    }

    pub fn youtube(&self) -> Option<&str> {
        present(&self.youtube)
    }

    pub fn category(&self) -> Option<&str> {
        present(&self.category)
    }

    pub fn area(&self) -> Option<&str> {
        present(&self.area)
    }

    fn slot(&self, key: String) -> Option<&str> {
        self.extra
            .get(&key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Ingredient name in the given 1-based slot, if provided.
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot(format!("strIngredient{}", slot))
    }

    /// Measure paired with the given 1-based ingredient slot, if provided.
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot(format!("strMeasure{}", slot))
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_instructions<S: Into<String>>(mut self, instructions: S) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_thumbnail<S: Into<String>>(mut self, thumbnail: S) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_youtube<S: Into<String>>(mut self, youtube: S) -> Self {
        self.youtube = Some(youtube.into());
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_area<S: Into<String>>(mut self, area: S) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_ingredient(mut self, slot: usize, name: &str, measure: Option<&str>) -> Self {
        self.extra
            .insert(format!("strIngredient{}", slot), Value::String(name.to_string()));
        if let Some(measure) = measure {
            self.extra
                .insert(format!("strMeasure{}", slot), Value::String(measure.to_string()));
        }
        self
    }
}
