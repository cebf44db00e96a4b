//! Property tests for the box layout engine.
//!
//! Invariants:
//! 1. Every distributed extent is non-negative.
//! 2. When the static children fit, the extents never sum past the available
//!    cells, and with any positive weight they use all of them.
//! 3. Dynamic children get nothing once the static children overflow.
//! 4. Partitioned siblings tile their parent without gaps or overlap.
//! 5. Distribution is deterministic: the same input always yields the same split.

use lazynginx::layout::{distribute, partition, presets, Bounds, LayoutBox};
use proptest::prelude::*;

/// A child that is either static (fixed > 0) or dynamic with a weight.
fn child_strategy() -> impl Strategy<Value = LayoutBox> {
    prop_oneof![
        (1..30i32).prop_map(|fixed| LayoutBox::empty().fixed(fixed)),
        (0..6i32).prop_map(|weight| LayoutBox::empty().weight(weight)),
    ]
}

fn children_strategy() -> impl Strategy<Value = Vec<LayoutBox>> {
    prop::collection::vec(child_strategy(), 1..8)
}

fn labelled(children: Vec<LayoutBox>) -> Vec<LayoutBox> {
    children
        .into_iter()
        .enumerate()
        .map(|(i, child)| LayoutBox {
            label: format!("c{i}"),
            ..child
        })
        .collect()
}

fn reserved(children: &[LayoutBox]) -> i32 {
    children
        .iter()
        .filter(|child| child.fixed_extent > 0)
        .map(|child| child.fixed_extent)
        .sum()
}

fn total_weight(children: &[LayoutBox]) -> i32 {
    children
        .iter()
        .filter(|child| child.fixed_extent == 0)
        .map(|child| child.weight)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]
    #[test]
    fn extents_are_never_negative(children in children_strategy(), available in -50..300i32) {
        for extent in distribute(&children, available) {
            prop_assert!(extent >= 0, "negative extent {extent}");
        }
    }

    #[test]
    fn extents_conserve_available_cells(children in children_strategy(), available in 0..300i32) {
        let reserved = reserved(&children);
        prop_assume!(reserved <= available);

        let sum: i32 = distribute(&children, available).iter().sum();
        prop_assert!(sum <= available, "sum {sum} exceeds {available}");
        if total_weight(&children) > 0 {
            prop_assert_eq!(sum, available);
        } else {
            prop_assert_eq!(sum, reserved);
        }
    }

    #[test]
    fn overflowing_statics_starve_dynamic_children(children in children_strategy(), available in 0..300i32) {
        prop_assume!(reserved(&children) > available);

        let extents = distribute(&children, available);
        for (child, extent) in children.iter().zip(extents) {
            if child.fixed_extent == 0 {
                prop_assert_eq!(extent, 0);
            } else {
                prop_assert_eq!(extent, child.fixed_extent.min(available));
            }
        }
    }

    #[test]
    fn distribution_is_deterministic(children in children_strategy(), available in -50..300i32) {
        prop_assert_eq!(distribute(&children, available), distribute(&children, available));
    }

    #[test]
    fn stacked_siblings_tile_parent(
        children in children_strategy(),
        width in 1..200i32,
        height in 1..200i32,
    ) {
        let count = children.len();
        prop_assume!(reserved(&children) <= height);
        let root = LayoutBox::stack(labelled(children));
        let outer = Bounds::from_origin(3, 2, width, height);
        let panels = partition(&root, outer);

        let mut next_top = outer.top;
        for i in 0..count {
            let bounds = panels[&format!("c{i}")];
            prop_assert!(bounds.bottom >= bounds.top - 1, "child {} inverted", i);
            prop_assert_eq!(bounds.left, outer.left);
            prop_assert_eq!(bounds.width(), width);
            prop_assert_eq!(bounds.top, next_top, "child {} does not follow its sibling", i);
            next_top += bounds.height();
        }
        prop_assert!(next_top <= outer.bottom + 1);
    }

    #[test]
    fn dashboard_panels_stay_inside_screen(width in 0..400u16, height in 0..200u16) {
        let outer = Bounds::from_origin(0, 0, i32::from(width), i32::from(height));
        let panels = partition(&presets::dashboard_layout(1), outer);

        for (label, bounds) in &panels {
            prop_assert!(bounds.right >= bounds.left - 1, "{label} inverted horizontally");
            prop_assert!(bounds.bottom >= bounds.top - 1, "{label} inverted vertically");
            if !bounds.is_empty() {
                prop_assert!(outer.contains(bounds.left, bounds.top), "{label} outside");
                prop_assert!(outer.contains(bounds.right, bounds.bottom), "{label} outside");
            }
        }
    }
}

#[test]
fn test_equal_weights_split_remainder_forward() {
    let children = [
        LayoutBox::empty().weight(1),
        LayoutBox::empty().weight(1),
        LayoutBox::empty().weight(1),
    ];
    assert_eq!(distribute(&children, 10), vec![4, 3, 3]);
}

#[test]
fn test_weights_one_three_over_twenty() {
    let root = LayoutBox::spread(vec![
        LayoutBox::leaf("narrow").weight(1),
        LayoutBox::leaf("wide").weight(3),
    ]);
    let panels = partition(&root, Bounds::from_origin(0, 0, 20, 4));

    assert_eq!(panels["narrow"], Bounds::new(0, 0, 4, 3));
    assert_eq!(panels["wide"], Bounds::new(5, 0, 19, 3));
}

#[test]
fn test_footer_keeps_fixed_height() {
    let panels = partition(
        &presets::dashboard_layout(1),
        Bounds::from_origin(0, 0, 120, 30),
    );

    assert_eq!(panels[presets::FOOTER].height(), 1);
    assert_eq!(panels[presets::FOOTER].top, 29);
    assert_eq!(panels[presets::DETAILS].height(), 29);
}

#[test]
fn test_fixed_header_over_weighted_body() {
    let root = LayoutBox::stack(vec![
        LayoutBox::leaf("header").fixed(3),
        LayoutBox::leaf("list").weight(1),
        LayoutBox::leaf("preview").weight(2),
    ]);
    assert_eq!(distribute(&root.children, 21), vec![3, 6, 12]);

    let panels = partition(&root, Bounds::from_origin(0, 0, 10, 21));
    assert_eq!(panels["header"], Bounds::new(0, 0, 9, 2));
    assert_eq!(panels["list"], Bounds::new(0, 3, 9, 8));
    assert_eq!(panels["preview"], Bounds::new(0, 9, 9, 20));
}
