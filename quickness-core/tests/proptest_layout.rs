//! Property-based tests for page planning
//!
//! Image fitting, link overlay scaling, text wrapping and pagination.

use proptest::prelude::*;
use quickness::{
    plan_image_placement, plan_link_overlays, plan_text_block, plan_text_block_with,
    FontMeasurer, ImagePlacement, LinkRef, TextMeasurer,
};
use std::collections::BTreeSet;

/// Every character is 1 mm wide.
struct UnitMeasurer;

impl TextMeasurer for UnitMeasurer {
    fn measure_mm(&self, text: &str) -> f64 {
        text.chars().count() as f64
    }
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,14}"
}

prop_compose! {
    fn text_strategy()(
        words in prop::collection::vec(word_strategy(), 0..80),
        separators in prop::collection::vec(prop::sample::select(vec![" ", "  ", "\t", "\n", " \n "]), 80),
    ) -> String {
        words
            .iter()
            .zip(separators.iter())
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    }
}

prop_compose! {
    fn link_strategy()(
        x in 0.0..1200.0f64,
        y in 0.0..800.0f64,
        width in 1.0..300.0f64,
        height in 1.0..60.0f64,
    ) -> LinkRef {
        LinkRef::new("link", "https://example.com").at(x, y, width, height)
    }
}

fn placed_image() -> ImagePlacement {
    ImagePlacement {
        x: 20.0,
        y: 50.0,
        width: 170.0,
        height: 95.625,
        page_index: 0,
    }
}

proptest! {
    #[test]
    fn test_image_keeps_aspect_ratio(
        img_width in 1.0..6000.0f64,
        img_height in 1.0..6000.0f64,
        reserve in 0.0..100.0f64,
    ) {
        let placed = plan_image_placement(210.0, 297.0, 20.0, 50.0, img_width, img_height, reserve);

        let expected = img_width / img_height;
        let actual = placed.width / placed.height;
        prop_assert!(((actual - expected) / expected).abs() < 1e-6);
    }

    #[test]
    fn test_image_stays_inside_available_box(
        img_width in 1.0..6000.0f64,
        img_height in 1.0..6000.0f64,
        reserve in 0.0..100.0f64,
    ) {
        let placed = plan_image_placement(210.0, 297.0, 20.0, 50.0, img_width, img_height, reserve);

        prop_assert!(placed.x >= 20.0 - 1e-9);
        prop_assert!(placed.x + placed.width <= 190.0 + 1e-9);
        prop_assert_eq!(placed.y, 50.0);
        prop_assert!(placed.y + placed.height <= 297.0 - 20.0 - reserve + 1e-9);
    }

    #[test]
    fn test_missing_dimension_gives_empty_placement(img_height in -100.0..6000.0f64) {
        let placed = plan_image_placement(210.0, 297.0, 20.0, 50.0, 0.0, img_height, 0.0);
        prop_assert!(placed.is_empty());
        prop_assert_eq!((placed.x, placed.y), (20.0, 50.0));
    }

    #[test]
    fn test_link_scaling_is_linear(link in link_strategy()) {
        let image = placed_image();
        let single = plan_link_overlays(&[link.clone()], 1280.0, 720.0, &image);

        // same relative position in a viewport twice as large
        let doubled = link.clone().at(link.x * 2.0, link.y * 2.0, link.width * 2.0, link.height * 2.0);
        let scaled = plan_link_overlays(&[doubled], 2560.0, 1440.0, &image);

        prop_assert_eq!(single.len(), 1);
        prop_assert_eq!(scaled.len(), 1);
        prop_assert!((single[0].x - scaled[0].x).abs() < 1e-9);
        prop_assert!((single[0].y - scaled[0].y).abs() < 1e-9);
        prop_assert!((single[0].width - scaled[0].width).abs() < 1e-9);
        prop_assert!((single[0].height - scaled[0].height).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_link_is_dropped(
        links in prop::collection::vec(link_strategy(), 1..10),
        index in any::<prop::sample::Index>(),
    ) {
        let image = placed_image();
        let before = plan_link_overlays(&links, 1280.0, 720.0, &image);

        let mut with_degenerate = links.clone();
        let i = index.index(links.len());
        with_degenerate[i].width = 0.0;
        let after = plan_link_overlays(&with_degenerate, 1280.0, 720.0, &image);

        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert!(after.iter().all(|overlay| overlay.page_index == image.page_index));
    }

    #[test]
    fn test_wrapped_words_round_trip(text in text_strategy(), max_width in 5.0..60.0f64) {
        let lines = plan_text_block_with(
            &UnitMeasurer, &text, 20.0, 50.0, max_width, 5.0, 210.0, 297.0, 20.0,
        );

        let original: Vec<&str> = text.split_whitespace().collect();
        let rebuilt: Vec<&str> = lines.iter().flat_map(|l| l.text.split(' ')).collect();
        prop_assert_eq!(rebuilt, original);

        for line in &lines {
            let fits = UnitMeasurer.measure_mm(&line.text) <= max_width;
            let lone_word = !line.text.contains(' ');
            prop_assert!(fits || lone_word, "line {:?} is too wide", line.text);
        }
    }

    #[test]
    fn test_font_metric_lines_fit(text in text_strategy()) {
        let lines = plan_text_block(&text, 20.0, 50.0, 120.0, 5.0, 210.0, 297.0, 20.0);
        let measurer = FontMeasurer::default();

        for line in &lines {
            prop_assert!(measurer.measure_mm(&line.text) <= 120.0 || !line.text.contains(' '));
        }
    }

    #[test]
    fn test_pagination_uses_ceiling_of_pages(line_count in 1usize..200) {
        // 100 mm page, 10 mm margin, 10 mm lines: tops at 10, 20, ..., 90
        const LINES_PER_PAGE: usize = 9;
        let text = vec!["w"; line_count].join(" ");

        let lines = plan_text_block_with(
            &UnitMeasurer, &text, 10.0, 10.0, 1.0, 10.0, 100.0, 100.0, 10.0,
        );
        prop_assert_eq!(lines.len(), line_count);

        let pages: BTreeSet<usize> = lines.iter().map(|l| l.page_index).collect();
        prop_assert_eq!(pages.len(), line_count.div_ceil(LINES_PER_PAGE));
        prop_assert!(lines.iter().all(|l| l.y <= 90.0 && l.y >= 10.0));
        prop_assert!(lines.iter().all(|l| l.x == 10.0));
    }
}
