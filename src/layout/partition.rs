//! Recursive box partitioning with static and weighted extents.

use std::collections::HashMap;

use super::Bounds;

/// How a box lays out its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    /// Children arranged top to bottom.
    #[default]
    Stack,
    /// Children arranged left to right.
    Spread,
}

/// Node of a layout tree. A box without children is a leaf bound to `label`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutBox {
    pub axis: Axis,
    pub children: Vec<LayoutBox>,
    /// Target panel of a leaf. Empty means render nothing.
    pub label: String,
    /// Cells claimed along the parent's axis. `0` means dynamic.
    pub fixed_extent: i32,
    /// Share of the leftover space. Ignored when `fixed_extent > 0`.
    pub weight: i32,
}

impl LayoutBox {
    /// Leaf box for a panel.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Unlabelled leaf, used as a spacer.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stack(children: Vec<Self>) -> Self {
        Self::container(Axis::Stack, children)
    }

    #[must_use]
    pub const fn spread(children: Vec<Self>) -> Self {
        Self::container(Axis::Spread, children)
    }

    const fn container(axis: Axis, children: Vec<Self>) -> Self {
        Self {
            axis,
            children,
            label: String::new(),
            fixed_extent: 0,
            weight: 0,
        }
    }

    /// Claim exactly `extent` cells along the parent's axis.
    #[must_use]
    pub const fn fixed(mut self, extent: i32) -> Self {
        self.fixed_extent = extent;
        self
    }

    #[must_use]
    pub const fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    const fn is_static(&self) -> bool {
        self.fixed_extent > 0
    }
}

/// Split `available` cells among `children` along their parent's axis.
///
/// Static children get their fixed extent (never more than `available`).
/// Dynamic children share what is left in proportion to their weight; the
/// cells lost to integer division go one each to the earliest dynamic
/// children in order.
#[must_use]
pub fn distribute(children: &[LayoutBox], available: i32) -> Vec<i32> {
    let reserved: i32 = children
        .iter()
        .filter(|child| child.is_static())
        .map(|child| child.fixed_extent)
        .fold(0, i32::saturating_add);
    let total_weight: i32 = children
        .iter()
        .filter(|child| !child.is_static())
        .map(|child| child.weight.max(0))
        .fold(0, i32::saturating_add);

    let dynamic_pool = available.saturating_sub(reserved).max(0);
    let (unit, mut remainder) = if total_weight > 0 {
        (dynamic_pool / total_weight, dynamic_pool % total_weight)
    } else {
        (0, 0)
    };

    let mut extents: Vec<i32> = children
        .iter()
        .map(|child| {
            if child.is_static() {
                child.fixed_extent.min(available).max(0)
            } else {
                unit.saturating_mul(child.weight.max(0))
            }
        })
        .collect();

    for (extent, child) in extents.iter_mut().zip(children) {
        if remainder == 0 {
            break;
        }
        if !child.is_static() {
            *extent += 1;
            remainder -= 1;
        }
    }

    extents
}

/// Compute the absolute rectangle of every labelled leaf under `root`.
///
/// Labels missing from the result were not part of the tree and should be
/// treated as "render nothing". A label that appears twice keeps the rectangle
/// of its last occurrence.
#[must_use]
pub fn partition(root: &LayoutBox, outer: Bounds) -> HashMap<String, Bounds> {
    let mut result = HashMap::new();
    partition_into(root, outer, &mut result);
    result
}

fn partition_into(node: &LayoutBox, outer: Bounds, accum: &mut HashMap<String, Bounds>) {
    if node.children.is_empty() {
        if !node.label.is_empty() {
            accum.insert(node.label.clone(), outer);
        }
        return;
    }

    let available = match node.axis {
        Axis::Spread => outer.width(),
        Axis::Stack => outer.height(),
    };
    let extents = distribute(&node.children, available);

    let mut offset = 0;
    for (child, extent) in node.children.iter().zip(extents) {
        let child_bounds = match node.axis {
            Axis::Spread => Bounds::from_origin(
                outer.left + offset,
                outer.top,
                extent,
                outer.height(),
            ),
            Axis::Stack => Bounds::from_origin(
                outer.left,
                outer.top + offset,
                outer.width(),
                extent,
            ),
        };
        partition_into(child, child_bounds, accum);
        offset += extent;
    }
}
