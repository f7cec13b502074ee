//! Keyboard navigation for `ratatui` list state.

use crate::keymap::Action;
use ratatui::widgets::ListState;

/// Rows moved by PageUp / PageDown
pub const PAGE_SIZE: usize = 5;

/// Navigation helpers on top of [`ListState`].
///
/// Movement clamps at the ends; an empty list always ends up with no
/// selection.
pub trait ListStateExt {
    fn move_by(&mut self, delta: isize, total_items: usize);

    /// Keep the selection valid after the list changed length
    fn clamp_to(&mut self, total_items: usize);

    /// Apply a navigation action. Returns whether it was one.
    fn apply_action(&mut self, action: Action, total_items: usize) -> bool;
}

impl ListStateExt for ListState {
    fn move_by(&mut self, delta: isize, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let current = self.selected().unwrap_or(0) as isize;
        let last = total_items as isize - 1;
        self.select(Some((current + delta).clamp(0, last) as usize));
    }

    fn clamp_to(&mut self, total_items: usize) {
        match (self.selected(), total_items) {
            (_, 0) => self.select(None),
            (None, _) => self.select(Some(0)),
            (Some(i), n) if i >= n => self.select(Some(n - 1)),
            _ => {}
        }
    }

    fn apply_action(&mut self, action: Action, total_items: usize) -> bool {
        match action {
            Action::MoveUp => self.move_by(-1, total_items),
            Action::MoveDown => self.move_by(1, total_items),
            Action::PageUp => self.move_by(-(PAGE_SIZE as isize), total_items),
            Action::PageDown => self.move_by(PAGE_SIZE as isize, total_items),
            Action::GoToTop => self.move_by(isize::MIN / 2, total_items),
            Action::GoToEnd => self.move_by(isize::MAX / 2, total_items),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_clamp() {
        let mut state = ListState::default();
        state.move_by(-1, 3);
        assert_eq!(state.selected(), Some(0));
        state.move_by(10, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_apply_action() {
        let mut state = ListState::default();
        assert!(state.apply_action(Action::GoToEnd, 8));
        assert_eq!(state.selected(), Some(7));
        assert!(state.apply_action(Action::PageUp, 8));
        assert_eq!(state.selected(), Some(2));
        assert!(state.apply_action(Action::GoToTop, 8));
        assert_eq!(state.selected(), Some(0));
        assert!(!state.apply_action(Action::Confirm, 8));
    }

    #[test]
    fn test_clamp_after_filtering() {
        let mut state = ListState::default().with_selected(Some(4));
        state.clamp_to(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp_to(0);
        assert_eq!(state.selected(), None);
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(0));
    }
}
