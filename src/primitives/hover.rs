/// Tracks whether the pointer rests over an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Records the new hover state. Returns true only when the pointer
    /// enters, i.e. on a transition from not hovered to hovered.
    pub fn set(&mut self, hovered: bool) -> bool {
        let entered = hovered && !self.hovered;
        self.hovered = hovered;
        entered
    }

    pub fn reset(&mut self) {
        self.hovered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_reports_once() {
        let mut hover = HoverTracker::default();

        assert!(hover.set(true));
        assert!(!hover.set(true));
        assert!(hover.is_hovered());
    }

    #[test]
    fn test_leave_does_not_report() {
        let mut hover = HoverTracker::default();

        assert!(!hover.set(false));
        hover.set(true);
        assert!(!hover.set(false));
        assert!(!hover.is_hovered());
    }

    #[test]
    fn test_reenter_reports_again() {
        let mut hover = HoverTracker::default();

        assert!(hover.set(true));
        hover.set(false);
        assert!(hover.set(true));
    }
}
