use proptest::prelude::*;

use facecut_core::recommendations::{apply_tier, generate_recommendations, score_style};
use facecut_core::{FaceShape, HaircutStyle, LengthCategory, StyleCatalog, StyleLevel};

fn shape_strategy() -> impl Strategy<Value = FaceShape> {
    prop::sample::select(FaceShape::ALL.to_vec())
}

fn length_strategy() -> impl Strategy<Value = LengthCategory> {
    prop::sample::select(vec![LengthCategory::Short, LengthCategory::Medium, LengthCategory::Long])
}

fn level_strategy() -> impl Strategy<Value = Option<StyleLevel>> {
    prop::option::of(prop::sample::select(vec![
        StyleLevel::None,
        StyleLevel::Low,
        StyleLevel::Medium,
        StyleLevel::High,
    ]))
}

fn style_strategy() -> impl Strategy<Value = HaircutStyle> {
    (
        prop::sample::subsequence(FaceShape::ALL.to_vec(), 1..=FaceShape::ALL.len()),
        length_strategy(),
        1_u8..=5,
        level_strategy(),
        level_strategy(),
    )
        .prop_map(|(shapes, length, maintenance, volume, texture)| {
            let mut style = HaircutStyle::new("generated", "Generated", length, maintenance)
                .unwrap()
                .with_face_shapes(shapes);
            style.attributes.volume = volume;
            style.attributes.texture = texture;
            style
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<HaircutStyle>> {
    prop::collection::vec(style_strategy(), 0..12).prop_map(|styles| {
        styles
            .into_iter()
            .enumerate()
            .map(|(index, mut style)| {
                style.id = format!("style-{index}").as_str().into();
                style
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn pt_scores_stay_between_base_and_cap(style in style_strategy(), shape in shape_strategy()) {
        let score = score_style(&style, shape);
        prop_assert!((70.0..=100.0).contains(&score));
    }

    #[test]
    fn pt_ranking_is_sorted_with_contiguous_positions(
        catalog in catalog_strategy(),
        shape in shape_strategy(),
    ) {
        let eligible = catalog.iter().filter(|style| style.suits(shape)).count();

        match generate_recommendations(shape, &catalog) {
            Ok(ranked) => {
                prop_assert_eq!(ranked.len(), eligible);
                prop_assert!(ranked
                    .windows(2)
                    .all(|pair| pair[0].relevance_score >= pair[1].relevance_score));
                let positions: Vec<usize> = ranked.iter().map(|entry| entry.position).collect();
                prop_assert_eq!(positions, (1..=eligible).collect::<Vec<_>>());
            }
            Err(_) => {
                prop_assert_eq!(eligible, 0);
            }
        }
    }

    #[test]
    fn pt_equal_scores_keep_catalog_order(
        catalog in catalog_strategy(),
        shape in shape_strategy(),
    ) {
        if let Ok(ranked) = generate_recommendations(shape, &catalog) {
            let catalog_index = |id: &str| catalog.iter().position(|style| style.id.as_str() == id);
            for pair in ranked.windows(2) {
                if pair[0].relevance_score == pair[1].relevance_score {
                    prop_assert!(
                        catalog_index(pair[0].style_id.as_str())
                            < catalog_index(pair[1].style_id.as_str())
                    );
                }
            }
        }
    }

    #[test]
    fn pt_free_tier_is_a_prefix_of_premium(
        catalog in catalog_strategy(),
        shape in shape_strategy(),
    ) {
        if let Ok(ranked) = generate_recommendations(shape, &catalog) {
            let free = apply_tier(&ranked, false);
            let premium = apply_tier(&ranked, true);

            prop_assert_eq!(free.len(), ranked.len().min(3));
            prop_assert_eq!(premium.len(), ranked.len());
            prop_assert_eq!(&premium[..free.len()], &free[..]);
        }
    }
}

#[test]
fn builtin_catalog_ranks_every_shape() {
    let catalog = StyleCatalog::builtin().expect("builtin catalog");

    for shape in FaceShape::ALL {
        let ranked = generate_recommendations(shape, catalog.styles()).unwrap();
        assert!(!ranked.is_empty(), "{shape} has no ranked styles");
        assert_eq!(ranked[0].position, 1);
    }
}
