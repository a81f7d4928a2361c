//! The navigation stack.
//!
//! An ordered stack of screen references encoding which screen is logically
//! active. Invariants:
//! - the top entry is the only screen that should be open among those ever
//!   pushed
//! - pushing closes the current top first, unless the incoming screen is
//!   that same top
//! - a screen already on the stack is never pushed twice
//! - entries whose instance the host destroyed are pruned from the top
//!   before any peek or pop is trusted

use std::rc::{Rc, Weak};

use log::trace;

use crate::surface::traits::{ScreenHandle, ScreenRef};

/// LIFO stack of weak screen references.
#[derive(Default)]
pub struct ViewStack {
    entries: Vec<ScreenRef>,
}

impl ViewStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a screen, closing the current top first.
    ///
    /// The close is skipped when the incoming screen already is the top;
    /// membership is checked over the whole stack, so a screen that is
    /// stacked lower down is not pushed a second time.
    pub fn push(&mut self, screen: &ScreenHandle) {
        self.prune_top();

        if let Some(top) = self.peek() {
            if !Rc::ptr_eq(&top, screen) {
                top.borrow_mut().close();
            }
        }

        if !self.contains(screen) {
            self.entries.push(Rc::downgrade(screen));
        }
    }

    /// Pop the top screen.
    ///
    /// Stale top entries are skipped first; `None` means the stack is
    /// empty once the stale tail is gone.
    pub fn pop(&mut self) -> Option<ScreenHandle> {
        self.prune_top();
        self.entries.pop().and_then(|entry| entry.upgrade())
    }

    /// Current top screen without popping it.
    pub fn top(&mut self) -> Option<ScreenHandle> {
        self.prune_top();
        self.peek()
    }

    /// Whether this screen is anywhere on the stack.
    pub fn contains(&self, screen: &ScreenHandle) -> bool {
        self.entries
            .iter()
            .filter_map(Weak::upgrade)
            .any(|entry| Rc::ptr_eq(&entry, screen))
    }

    /// All live stacked screens, bottom first.
    pub fn live(&self) -> Vec<ScreenHandle> {
        self.entries.iter().filter_map(Weak::upgrade).collect()
    }

    /// Number of live entries.
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Drop every entry without closing anything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn peek(&self) -> Option<ScreenHandle> {
        self.entries.last().and_then(Weak::upgrade)
    }

    fn prune_top(&mut self) {
        while let Some(last) = self.entries.last() {
            if last.strong_count() > 0 {
                break;
            }
            trace!("dropping stale stack top");
            self.entries.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::dock::Dock;
    use crate::surface::error::SurfaceError;
    use crate::surface::tag::SurfaceTag;
    use crate::surface::traits::{Screen, Surface};
    use std::any::Any;
    use std::cell::RefCell;

    struct TestScreen {
        tag: SurfaceTag,
        open: bool,
        close_calls: u32,
        dock: Dock,
    }

    impl TestScreen {
        fn handle(tag: &'static str) -> ScreenHandle {
            Rc::new(RefCell::new(TestScreen {
                tag: SurfaceTag::new(tag),
                open: false,
                close_calls: 0,
                dock: Dock::new(),
            }))
        }
    }

    impl Surface for TestScreen {
        fn tag(&self) -> SurfaceTag {
            self.tag
        }

        fn initialize(&mut self) -> Result<(), SurfaceError> {
            Ok(())
        }

        fn open(&mut self, _payload: Option<&dyn Any>) {
            self.open = true;
        }

        fn close(&mut self) {
            self.open = false;
            self.close_calls += 1;
        }

        fn refresh(&mut self, _payload: &dyn Any) {}

        fn is_initialized(&self) -> bool {
            true
        }

        fn is_open(&self) -> bool {
            self.open
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    impl Screen for TestScreen {
        fn dock(&self) -> &Dock {
            &self.dock
        }

        fn dock_mut(&mut self) -> &mut Dock {
            &mut self.dock
        }
    }

    fn close_calls(screen: &ScreenHandle) -> u32 {
        screen
            .borrow()
            .as_any()
            .downcast_ref::<TestScreen>()
            .unwrap()
            .close_calls
    }

    #[test]
    fn test_push_closes_the_previous_top() {
        let mut stack = ViewStack::new();
        let first = TestScreen::handle("first");
        let second = TestScreen::handle("second");
        first.borrow_mut().open(None);

        stack.push(&first);
        stack.push(&second);

        assert_eq!(stack.depth(), 2);
        assert!(!first.borrow().is_open());
        assert!(Rc::ptr_eq(&stack.top().unwrap(), &second));
    }

    #[test]
    fn test_pushing_the_current_top_is_idempotent() {
        let mut stack = ViewStack::new();
        let screen = TestScreen::handle("only");
        screen.borrow_mut().open(None);

        stack.push(&screen);
        stack.push(&screen);

        assert_eq!(stack.depth(), 1);
        // The top was not closed on re-push.
        assert!(screen.borrow().is_open());
        assert_eq!(close_calls(&screen), 0);
    }

    #[test]
    fn test_lower_entries_are_not_pushed_twice() {
        let mut stack = ViewStack::new();
        let first = TestScreen::handle("first");
        let second = TestScreen::handle("second");
        stack.push(&first);
        stack.push(&second);

        // Membership is suppressed, but the old top still closes.
        stack.push(&first);
        assert_eq!(stack.depth(), 2);
        assert_eq!(close_calls(&second), 1);
    }

    #[test]
    fn test_stale_entries_are_skipped_on_pop() {
        let mut stack = ViewStack::new();
        let survivor = TestScreen::handle("survivor");
        stack.push(&survivor);
        {
            let doomed = TestScreen::handle("doomed");
            stack.push(&doomed);
        }

        // The destroyed top is skipped, the live entry below pops.
        let popped = stack.pop().unwrap();
        assert!(Rc::ptr_eq(&popped, &survivor));
        assert!(stack.pop().is_none());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_top_prunes_stale_entries_before_peeking() {
        let mut stack = ViewStack::new();
        {
            let doomed = TestScreen::handle("doomed");
            stack.push(&doomed);
        }

        assert!(stack.top().is_none());
        assert_eq!(stack.depth(), 0);
    }
}
