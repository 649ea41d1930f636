use mealgraph_core::mapper::map_meal;
use mealgraph_core::record::MealRecord;
use mealgraph_store::query::{self, CategoryCount, IngredientRow};
use mealgraph_store::GraphStore;

/// Three beef meals, one seafood meal, spread over two cuisines.
fn sample_store() -> GraphStore {
    let records = vec![
        MealRecord::new("1")
            .with_name("Beef Stew")
            .with_category("Beef")
            .with_area("Italian")
            .with_ingredient(1, "Beef", Some("1kg"))
            .with_ingredient(2, "Carrots", Some("3 chopped")),
        MealRecord::new("2")
            .with_name("Beef Wellington")
            .with_category("Beef")
            .with_area("British")
            .with_ingredient(1, "Beef fillet", Some("750g"))
            .with_ingredient(2, "Mushrooms", None),
        MealRecord::new("3")
            .with_name("Meatballs")
            .with_category("Beef")
            .with_area("Italian")
            .with_ingredient(1, "Minced beef", Some("500g")),
        MealRecord::new("4")
            .with_name("Grilled Salmon")
            .with_category("Seafood")
            .with_area("Japanese")
            .with_ingredient(1, "Salmon", Some("2 fillets"))
            .with_ingredient(2, "Soy sauce", Some("2 tbsp")),
    ];
    let mut store = GraphStore::new();
    for record in &records {
        store.insert_all(map_meal(record).unwrap());
    }
    store
}

#[test]
fn test_meal_names() {
    let names = query::meal_names(&sample_store());
    assert_eq!(
        names,
        vec!["Beef Stew", "Beef Wellington", "Grilled Salmon", "Meatballs"]
    );
}

#[test]
fn test_meals_by_cuisine() {
    let store = sample_store();

    assert_eq!(
        query::meals_by_cuisine(&store, "Italian"),
        vec!["Beef Stew", "Meatballs"]
    );
    assert_eq!(
        query::meals_by_cuisine(&store, "Japanese"),
        vec!["Grilled Salmon"]
    );
    assert!(query::meals_by_cuisine(&store, "French").is_empty());
    // Exact label match, like the original filter.
    assert!(query::meals_by_cuisine(&store, "italian").is_empty());
}

#[test]
fn test_meal_ingredients() {
    let rows = query::meal_ingredients(&sample_store(), "Beef Wellington");
    assert_eq!(
        rows,
        vec![
            IngredientRow {
                name: "Beef fillet".to_string(),
                measure: Some("750g".to_string()),
            },
            IngredientRow {
                name: "Mushrooms".to_string(),
                measure: None,
            },
        ]
    );

    assert!(query::meal_ingredients(&sample_store(), "Unknown Meal").is_empty());
}

#[test]
fn test_category_counts_ordered_descending() {
    let counts = query::category_counts(&sample_store());
    assert_eq!(
        counts,
        vec![
            CategoryCount {
                label: "Beef".to_string(),
                meals: 3,
            },
            CategoryCount {
                label: "Seafood".to_string(),
                meals: 1,
            },
        ]
    );
}

#[test]
fn test_category_counts_are_distinct_per_meal() {
    // Re-accumulating the same record must not inflate the count.
    let mut store = sample_store();
    store.insert_all(
        map_meal(
            &MealRecord::new("1")
                .with_name("Beef Stew")
                .with_category("Beef")
                .with_area("Italian")
                .with_ingredient(1, "Beef", Some("1kg"))
                .with_ingredient(2, "Carrots", Some("3 chopped")),
        )
        .unwrap(),
    );

    let counts = query::category_counts(&store);
    assert_eq!(counts[0].meals, 3);
}

#[test]
fn test_meals_with_ingredient_substring() {
    let store = sample_store();

    // Case-insensitive substring across all ingredient names.
    assert_eq!(
        query::meals_with_ingredient(&store, "beef"),
        vec!["Beef Stew", "Beef Wellington", "Meatballs"]
    );
    assert_eq!(
        query::meals_with_ingredient(&store, "SALMON"),
        vec!["Grilled Salmon"]
    );
    assert!(query::meals_with_ingredient(&store, "tofu").is_empty());
}
