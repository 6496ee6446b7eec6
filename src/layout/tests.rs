use proptest::prelude::*;

use crate::{
    estimator::{EstimateHeight, EstimatorConfig, HeightEstimator},
    item::{Item, ItemKind},
    layout::{column_width_for, layout_columns, ColumnBalancer, Side},
};

fn uniform_estimator(height: f32) -> HeightEstimator {
    HeightEstimator::new(EstimatorConfig {
        compact_height: height,
        ..EstimatorConfig::default()
    })
}

fn cards(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::status_card(format!("s{i}"), 1_000 - i as i64))
        .collect()
}

/// Reads the height straight off `created_at`, for hand-built scenarios.
struct HeightFromTimestamp;

impl EstimateHeight for HeightFromTimestamp {
    fn estimate(&self, item: &Item, _column_width: f32) -> f32 {
        item.created_at as f32
    }
}

#[test]
fn equal_heights_alternate_starting_left() {
    let items = cards(5);
    let balancer = ColumnBalancer::new(uniform_estimator(100.0));
    let columns = balancer.layout(&items, 150.0);

    assert_eq!(columns.left_indices(), vec![0, 2, 4]);
    assert_eq!(columns.right_indices(), vec![1, 3]);
    assert_eq!(columns.left_height(), 300.0);
    assert_eq!(columns.right_height(), 200.0);
}

#[test]
fn taller_item_pushes_next_items_right() {
    let items = vec![
        Item::status_card("a", 300),
        Item::status_card("b", 100),
        Item::status_card("c", 100),
        Item::status_card("d", 50),
    ];
    let columns = ColumnBalancer::new(HeightFromTimestamp).layout(&items, 200.0);
    // a:L(300) b:R(100) c:R(200) d:R(250)
    assert_eq!(columns.left_indices(), vec![0]);
    assert_eq!(columns.right_indices(), vec![1, 2, 3]);
    assert_eq!(columns.right.placements[2].top, 200.0);
}

#[test]
fn gap_is_added_below_every_card() {
    let items = cards(3);
    let columns = ColumnBalancer::new(uniform_estimator(100.0))
        .with_gap(8.0)
        .layout(&items, 150.0);
    assert_eq!(columns.left_height(), 216.0);
    assert_eq!(columns.right_height(), 108.0);
    assert_eq!(columns.left.placements[1].top, 108.0);
    assert_eq!(columns.left.placements[1].height, 100.0);
}

#[test]
fn unmeasured_width_yields_empty_columns() {
    let items = cards(3);
    for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        let columns = layout_columns(&items, width);
        assert!(columns.is_empty(), "width {width} should not lay out");
        assert_eq!(columns.left_height(), 0.0);
        assert_eq!(columns.right_height(), 0.0);
    }
}

#[test]
fn empty_list_yields_empty_columns() {
    let columns = layout_columns(&[], 300.0);
    assert!(columns.is_empty());
}

#[test]
fn invalid_gap_is_ignored() {
    let balancer = ColumnBalancer::new(uniform_estimator(10.0)).with_gap(-4.0);
    assert_eq!(balancer.gap(), 0.0);
    let balancer = ColumnBalancer::new(uniform_estimator(10.0)).with_gap(f32::NAN);
    assert_eq!(balancer.gap(), 0.0);
}

#[test]
fn inserting_before_an_item_can_move_it() {
    let balancer = ColumnBalancer::new(uniform_estimator(100.0));
    let mut items = cards(4);
    let before = balancer.layout(&items, 150.0).side_of(3);
    assert_eq!(before, Some(Side::Right));

    items.insert(0, Item::status_card("new", 2_000));
    let after = balancer.layout(&items, 150.0).side_of(4);
    assert_eq!(after, Some(Side::Left));
}

#[test]
fn column_width_splits_container() {
    assert_eq!(column_width_for(368.0, 8.0), 180.0);
    assert_eq!(column_width_for(4.0, 8.0), 0.0);
    assert_eq!(column_width_for(f32::NAN, 8.0), 0.0);
    assert_eq!(column_width_for(100.0, -5.0), 50.0);
}

#[test]
fn layout_serializes_for_renderers() {
    let items = cards(2);
    let columns = ColumnBalancer::new(uniform_estimator(50.0)).layout(&items, 100.0);
    let json = serde_json::to_value(&columns).expect("serialize");
    assert_eq!(json["left"]["placements"][0]["item"]["id"], "s0");
    assert_eq!(json["right"]["placements"][0]["index"], 1);
    assert_eq!(json["columnWidth"], 100.0);
}

fn any_kind() -> impl Strategy<Value = ItemKind> {
    prop_oneof![
        (prop::option::of(0.2f32..3.0), any::<bool>()).prop_map(|(aspect_ratio, has_caption)| {
            ItemKind::Image {
                aspect_ratio,
                has_caption,
            }
        }),
        any::<bool>().prop_map(|has_secondary_media| ItemKind::Link {
            has_secondary_media
        }),
        Just(ItemKind::StatusCard),
        Just(ItemKind::Resource),
    ]
}

fn any_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(any_kind(), 0..80).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Item::new(format!("i{i}"), 10_000 - i as i64, kind))
            .collect()
    })
}

proptest! {
    #[test]
    fn columns_stay_within_one_card_of_each_other(
        items in any_items(),
        width in 1.0f32..800.0,
        gap in 0.0f32..24.0,
    ) {
        let estimator = HeightEstimator::default();
        let columns = ColumnBalancer::new(estimator.clone()).with_gap(gap).layout(&items, width);

        let tallest = items
            .iter()
            .map(|item| estimator.estimate(item, width))
            .fold(0.0f32, f32::max);
        let total = columns.left_height() + columns.right_height();
        let tolerance = 1e-4 * total + 1e-3;
        prop_assert!(
            columns.imbalance() <= tallest + gap + tolerance,
            "imbalance {} exceeds tallest {} + gap {}", columns.imbalance(), tallest, gap
        );
        prop_assert_eq!(columns.len(), items.len());
    }

    #[test]
    fn relayout_is_idempotent(items in any_items(), width in 1.0f32..800.0) {
        let first = layout_columns(&items, width);
        let second = layout_columns(&items, width);
        prop_assert_eq!(first, second);
    }
}
