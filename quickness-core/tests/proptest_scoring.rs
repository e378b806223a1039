//! Property-based tests for capture-target scoring
//!
//! Checks the visibility veto, size monotonicity and the selection rules
//! (strict maximum, earliest wins ties) over generated element snapshots.

use proptest::prelude::*;
use quickness::{score_element, select_best_candidate, ElementDescriptor, TargetScorer};

const TAGS: &[&str] = &[
    "IMG", "SVG", "VIDEO", "CANVAS", "H1", "H3", "H6", "P", "ARTICLE", "SECTION", "DIV", "SPAN",
    "UL", "A", "img", "div",
];

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(TAGS).prop_map(str::to_string)
}

prop_compose! {
    fn descriptor_strategy()(
        tag in tag_strategy(),
        width in 0.0..2000.0f64,
        height in 0.0..2000.0f64,
        text_length in 0usize..500,
        font_size in 0.0..48.0f64,
        has_background_image in any::<bool>(),
    ) -> ElementDescriptor {
        let descriptor = ElementDescriptor::new(tag, width, height)
            .with_text_length(text_length)
            .with_font_size(font_size);
        if has_background_image {
            descriptor.with_background_image()
        } else {
            descriptor
        }
    }
}

proptest! {
    #[test]
    fn test_hidden_elements_score_zero(descriptor in descriptor_strategy()) {
        prop_assert_eq!(score_element(&descriptor.hidden()), 0);
    }

    #[test]
    fn test_score_is_never_negative(descriptor in descriptor_strategy()) {
        prop_assert!(score_element(&descriptor) >= 0);
    }

    #[test]
    fn test_score_is_monotonic_in_size(
        descriptor in descriptor_strategy(),
        grow_width in 0.0..500.0f64,
        grow_height in 0.0..500.0f64,
    ) {
        let mut larger = descriptor.clone();
        larger.width += grow_width;
        larger.height += grow_height;

        prop_assert!(score_element(&larger) >= score_element(&descriptor));
    }

    #[test]
    fn test_negative_dimensions_score_like_zero(descriptor in descriptor_strategy()) {
        let mut negative = descriptor.clone();
        negative.width = -negative.width - 1.0;
        negative.height = -negative.height - 1.0;

        let mut zero = descriptor;
        zero.width = 0.0;
        zero.height = 0.0;

        prop_assert_eq!(score_element(&negative), score_element(&zero));
    }

    #[test]
    fn test_strictly_decreasing_chain_picks_first(
        descriptors in prop::collection::vec(descriptor_strategy(), 1..12),
    ) {
        let mut scored: Vec<(i32, ElementDescriptor)> = descriptors
            .into_iter()
            .map(|d| (score_element(&d), d))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.dedup_by_key(|(score, _)| *score);
        prop_assume!(!scored.is_empty());

        let chain: Vec<ElementDescriptor> = scored.into_iter().map(|(_, d)| d).collect();
        let best = select_best_candidate(&chain, chain.len());
        prop_assert!(best.is_some_and(|best| std::ptr::eq(best, &chain[0])));
    }

    #[test]
    fn test_all_zero_chain_selects_nothing(
        descriptors in prop::collection::vec(descriptor_strategy(), 0..8),
    ) {
        let chain: Vec<ElementDescriptor> = descriptors.into_iter().map(|d| d.hidden()).collect();
        prop_assert!(select_best_candidate(&chain, chain.len()).is_none());
    }

    #[test]
    fn test_ties_go_to_the_earlier_candidate(
        descriptor in descriptor_strategy(),
        filler in prop::collection::vec(descriptor_strategy(), 0..3),
    ) {
        prop_assume!(score_element(&descriptor) > 0);

        let mut chain = vec![descriptor.clone(), descriptor];
        chain.extend(filler.into_iter().map(|d| d.hidden()));

        let best = select_best_candidate(&chain, chain.len());
        prop_assert!(best.is_some_and(|best| std::ptr::eq(best, &chain[0])));
    }

    #[test]
    fn test_best_is_the_maximum_within_depth(
        descriptors in prop::collection::vec(descriptor_strategy(), 1..10),
        max_depth in 1usize..10,
    ) {
        let scorer = TargetScorer::new();
        let reachable_max = descriptors
            .iter()
            .take(max_depth)
            .map(|d| scorer.score(d))
            .max()
            .unwrap_or(0);

        match scorer.best_candidate(&descriptors, max_depth) {
            Some(best) => {
                prop_assert_eq!(best.score, reachable_max);
                prop_assert!(best.depth < max_depth);
            }
            None => prop_assert_eq!(reachable_max, 0),
        }
    }

    #[test]
    fn test_rank_agrees_with_best_candidate(
        descriptors in prop::collection::vec(descriptor_strategy(), 0..10),
    ) {
        let scorer = TargetScorer::new();
        let ranked = scorer.rank(&descriptors, descriptors.len());
        let best = scorer.best_candidate(&descriptors, descriptors.len());

        prop_assert_eq!(ranked.first().map(|c| c.depth), best.map(|c| c.depth));
        prop_assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
}

#[test]
fn test_document_root_ends_the_chain() {
    let chain = vec![
        ElementDescriptor::new("SPAN", 10.0, 10.0),
        ElementDescriptor::new("HTML", 1280.0, 4000.0),
        ElementDescriptor::new("IMG", 300.0, 150.0),
    ];
    assert!(select_best_candidate(&chain, 5).is_none());
}
