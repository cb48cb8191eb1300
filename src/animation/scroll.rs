/// Scroll position past which the nav bar switches to its solid style.
pub const NAV_SCROLLED_AFTER_PX: f64 = 80.0;

/// Where reveal-on-scroll elements start animating, as a fraction of the
/// viewport height measured from the top.
pub const REVEAL_START: f64 = 0.85;
pub const SLIDE_REVEAL_START: f64 = 0.8;

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// True once an element whose top edge sits at `element_top` (relative to
/// the viewport) has crossed `start * viewport_height`.
pub fn crosses_start(element_top: f64, viewport_height: f64, start: f64) -> bool {
    element_top <= viewport_height * start
}

/// Absolute document offset to scroll to so the element lands just below
/// the fixed header.
pub fn anchor_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_switches_after_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(80.0));
        assert!(nav_is_scrolled(81.0));
    }

    #[test]
    fn reveal_triggers_at_start_line() {
        assert!(!crosses_start(900.0, 1000.0, REVEAL_START));
        assert!(crosses_start(850.0, 1000.0, REVEAL_START));
        assert!(crosses_start(-200.0, 1000.0, REVEAL_START));
    }

    #[test]
    fn anchor_target_accounts_for_header_and_current_scroll() {
        assert_eq!(anchor_target(400.0, 1000.0, 80.0), 1320.0);
        assert_eq!(anchor_target(20.0, 0.0, 80.0), 0.0);
    }
}
