//! Box trees the dashboard builds every frame.

use super::LayoutBox;

pub const MAIN_MENU: &str = "mainmenu";
pub const OPTIONS: &str = "submenu";
pub const DETAILS: &str = "details";
pub const FOOTER: &str = "footer";
pub const OVERLAY: &str = "overlay";

/// Three side-by-side panels (weights 1, 1, 2) above a fixed-height footer.
#[must_use]
pub fn dashboard_layout(footer_height: i32) -> LayoutBox {
    LayoutBox::stack(vec![
        LayoutBox::spread(vec![
            LayoutBox::leaf(MAIN_MENU).weight(1),
            LayoutBox::leaf(OPTIONS).weight(1),
            LayoutBox::leaf(DETAILS).weight(2),
        ])
        .weight(1),
        LayoutBox::leaf(FOOTER).fixed(footer_height),
    ])
}

/// A `width` by `height` overlay centered between weighted spacers.
#[must_use]
pub fn centered(width: i32, height: i32) -> LayoutBox {
    LayoutBox::stack(vec![
        LayoutBox::empty().weight(1),
        LayoutBox::spread(vec![
            LayoutBox::empty().weight(1),
            LayoutBox::leaf(OVERLAY).fixed(width),
            LayoutBox::empty().weight(1),
        ])
        .fixed(height),
        LayoutBox::empty().weight(1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{partition, Bounds};

    #[test]
    fn test_dashboard_splits_quarter_quarter_half() {
        let panels = partition(&dashboard_layout(1), Bounds::from_origin(0, 0, 120, 30));

        assert_eq!(panels[MAIN_MENU], Bounds::new(0, 0, 29, 28));
        assert_eq!(panels[OPTIONS], Bounds::new(30, 0, 59, 28));
        assert_eq!(panels[DETAILS], Bounds::new(60, 0, 119, 28));
        assert_eq!(panels[FOOTER], Bounds::new(0, 29, 119, 29));
    }

    #[test]
    fn test_dashboard_odd_width_feeds_main_menu_first() {
        let panels = partition(&dashboard_layout(1), Bounds::from_origin(0, 0, 43, 12));

        assert_eq!(panels[MAIN_MENU].width(), 11);
        assert_eq!(panels[OPTIONS].width(), 11);
        assert_eq!(panels[DETAILS].width(), 21);
    }

    #[test]
    fn test_centered_overlay() {
        let placed = partition(&centered(50, 10), Bounds::from_origin(0, 0, 120, 30));
        assert_eq!(placed[OVERLAY], Bounds::from_origin(35, 10, 50, 10));
        assert_eq!(placed.len(), 1, "spacers carry no label");
    }

    #[test]
    fn test_centered_overlay_larger_than_screen() {
        let placed = partition(&centered(50, 10), Bounds::from_origin(0, 0, 30, 6));
        let overlay = placed[OVERLAY];
        assert_eq!(overlay.width(), 30);
        assert_eq!(overlay.height(), 6);
        assert_eq!((overlay.left, overlay.top), (0, 0));
    }
}
