use mealgraph_core::mapper::map_meal;
use mealgraph_core::record::MealRecord;
use mealgraph_core::vocab;
use proptest::prelude::*;

proptest! {
    #[test]
    fn local_name_is_deterministic(raw in ".{0,64}") {
        prop_assert_eq!(vocab::local_name(&raw), vocab::local_name(&raw));
    }

    #[test]
    fn local_name_output_is_uri_safe(raw in ".{1,64}") {
        if let Some(name) = vocab::local_name(&raw) {
            let all_uri_safe = name.bytes().all(|b| {
                b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-' | b'~' | b'/' | b'%')
            });
            prop_assert!(all_uri_safe);
        }
    }

    #[test]
    fn local_name_ignores_surrounding_whitespace(core in "[a-zA-Z ]{1,32}", pad in "[ \t]{0,8}") {
        let padded = format!("{}{}{}", pad, core, pad);
        prop_assert_eq!(vocab::local_name(&padded), vocab::local_name(&core));
    }

    #[test]
    fn mapping_twice_yields_identical_triples(
        name in "[a-zA-Z ]{0,24}",
        category in "[a-zA-Z ]{0,16}",
        area in "[a-zA-Z ]{0,16}",
        ingredient in "[a-zA-Z ]{0,16}",
        measure in "[a-zA-Z0-9/ ]{0,12}",
    ) {
        let record = MealRecord::new("52874")
            .with_name(name)
            .with_category(category)
            .with_area(area)
            .with_ingredient(1, &ingredient, Some(&measure));

        prop_assert_eq!(map_meal(&record).unwrap(), map_meal(&record).unwrap());
    }
}
