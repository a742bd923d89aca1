//! Extraction and validation never panic, whatever the input.

use census_analysis::extract::{
    extract_from_bibliography, extract_from_footnote, extract_from_name,
    extract_from_short_footnote,
};
use census_analysis::rules::RuleRegistry;
use census_analysis::validate::{check_bibliography, check_footnote, check_name, check_short_footnote};
use proptest::prelude::*;

proptest! {
    #[test]
    fn extractors_keep_raw_text(text in "\\PC{0,200}") {
        prop_assert_eq!(extract_from_name(&text).raw, text.clone());
        prop_assert_eq!(extract_from_footnote(&text).raw, text.clone());
        prop_assert_eq!(extract_from_short_footnote(&text).raw, text.clone());
        prop_assert_eq!(extract_from_bibliography(&text).raw, text);
    }

    #[test]
    fn citation_shaped_noise_never_panics(
        year in prop::sample::select(vec![1790u16, 1850, 1880, 1940, 1950]),
        ed in "[0-9]{1,3}[A-Za-z]?(-[0-9]{1,3}[A-Za-z]?)?",
        tail in "[A-Za-z0-9 ,.;\\[\\]()\"&]{0,60}",
    ) {
        let name = format!("Fed Census: {year}, Ohio, Stark [ED {ed}, sheet {tail}");
        let components = extract_from_name(&name);
        prop_assert_eq!(components.year, Some(year));
        prop_assert_eq!(components.enumeration_district, Some(ed));

        let registry = RuleRegistry::new();
        for (_, rule) in registry.iter() {
            let _ = check_name(1, &name, rule);
            let _ = check_footnote(1, &tail, rule);
            let _ = check_short_footnote(1, &tail, rule);
            let _ = check_bibliography(1, &tail, rule);
        }
    }
}
