/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Whether the drawer is showing.
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Open a closed drawer or close an open one.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called whenever a link inside the menu is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Whether the header switches to its compact style.
pub fn is_compact(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_compact_threshold_is_exclusive() {
        assert!(!is_compact(20.0, 20.0));
        assert!(is_compact(20.5, 20.0));
    }
}
