//! The navigation facade.
//!
//! [`ViewManager`] is the single entry point application code talks to. It
//! owns the host [`Stage`], the screen and popup registries, and the
//! [`ViewStack`], and implements the open/close/fallback protocol on top
//! of them. Every operation resolves surfaces by symbolic tag, registers
//! unknown ones lazily, degrades to a logged no-op on failure, and runs to
//! completion synchronously inside the caller's invocation.

use std::any::Any;

use log::{debug, error, trace, warn};

use super::registry::Registry;
use super::stack::ViewStack;
use super::stage::Stage;
use crate::surface::error::SurfaceError;
use crate::surface::tag::{SurfaceTag, Tagged};
use crate::surface::traits::{Screen, ScreenHandle, Surface, SurfaceHandle};

use std::cell::RefCell;
use std::rc::Rc;

/// Coordinates which host surfaces are visible and when they are told so.
///
/// The manager is an explicitly owned context: construct one per process
/// (or per UI root), call [`reinitialize`](ViewManager::reinitialize) at
/// startup and again whenever the host reloads its environment, and route
/// every open/close/refresh through it. No global state is involved.
pub struct ViewManager {
    stage: Box<dyn Stage>,
    screens: Registry<dyn Screen>,
    popups: Registry<dyn Surface>,
    stack: ViewStack,
}

impl ViewManager {
    /// Create a manager bound to the given host stage.
    pub fn new(stage: Box<dyn Stage>) -> Self {
        Self {
            stage,
            screens: Registry::new(),
            popups: Registry::new(),
            stack: ViewStack::new(),
        }
    }

    // ------------------------------------------------------------------
    // Discovery & registration
    // ------------------------------------------------------------------

    /// Scan the stage and bring every live surface under management.
    ///
    /// Prunes entries whose instance the host destroyed, registers any
    /// instance not already known, and initializes each newly added entry.
    /// Idempotent: already-known live entries are neither duplicated nor
    /// re-initialized, so the host can call this once at startup and again
    /// on every environment reload.
    pub fn reinitialize(&mut self) {
        let pruned = self.screens.prune() + self.popups.prune();
        if pruned > 0 {
            debug!("pruned {pruned} stale surface entries");
        }

        for screen in self.stage.screens() {
            let tag = screen.borrow().tag();
            if self.screens.contains(tag.as_str()) {
                continue;
            }
            Self::initialize_entry(&screen);
            self.screens.insert(tag, &screen);
        }

        for popup in self.stage.popups() {
            let tag = popup.borrow().tag();
            if self.popups.contains(tag.as_str()) {
                continue;
            }
            Self::initialize_entry(&popup);
            self.popups.insert(tag, &popup);
        }
    }

    /// Drop all engine state: both registries and the stack.
    ///
    /// Host instances are untouched; nothing is closed. Pair with
    /// [`reinitialize`](ViewManager::reinitialize) to rebuild from the
    /// stage.
    pub fn reset(&mut self) {
        self.screens.clear();
        self.popups.clear();
        self.stack.clear();
    }

    /// Adopt a screen instance the host already holds.
    ///
    /// Initializes the screen if needed and registers it under its own
    /// tag. An existing live entry under that tag wins.
    pub fn register_screen(&mut self, screen: &ScreenHandle) {
        Self::initialize_entry(screen);
        let tag = screen.borrow().tag();
        self.screens.insert(tag, screen);
    }

    /// Adopt a popup instance the host already holds.
    pub fn register_popup(&mut self, popup: &SurfaceHandle) {
        Self::initialize_entry(popup);
        let tag = popup.borrow().tag();
        self.popups.insert(tag, popup);
    }

    /// Resolve a screen by name, registering it lazily on first access.
    ///
    /// # Returns
    /// The live handle, or `None` when the name matches nothing known or
    /// discoverable (logged, never fatal)
    pub fn screen_named(&mut self, name: &str) -> Option<ScreenHandle> {
        if let Some(screen) = self.screens.get(name) {
            return Some(screen);
        }
        match self.stage.find_screen(name) {
            Some(screen) => {
                Self::initialize_entry(&screen);
                let tag = screen.borrow().tag();
                self.screens.insert(tag, &screen);
                Some(screen)
            }
            None => {
                warn!("no screen named `{name}` is registered or discoverable");
                None
            }
        }
    }

    /// Resolve a popup by name, registering it lazily on first access.
    pub fn popup_named(&mut self, name: &str) -> Option<SurfaceHandle> {
        if let Some(popup) = self.popups.get(name) {
            return Some(popup);
        }
        match self.stage.find_popup(name) {
            Some(popup) => {
                Self::initialize_entry(&popup);
                let tag = popup.borrow().tag();
                self.popups.insert(tag, &popup);
                Some(popup)
            }
            None => {
                warn!("no popup named `{name}` is registered or discoverable");
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // View stack operations
    // ------------------------------------------------------------------

    /// Open a view and make it the active stack top.
    ///
    /// Closes every screen currently on the stack (the full sweep is
    /// intentional and runs even when the target is already open), opens
    /// the target with the payload, then pushes it. The previous top is
    /// closed again before the push; a screen already on the stack is not
    /// pushed twice.
    pub fn open_view_named(&mut self, name: &str, payload: Option<&dyn Any>) {
        let Some(screen) = self.screen_named(name) else {
            return;
        };

        for stacked in self.stack.live() {
            stacked.borrow_mut().close();
        }

        screen.borrow_mut().open(payload);
        self.stack.push(&screen);
    }

    /// Typed form of [`open_view_named`](ViewManager::open_view_named).
    pub fn open_view<T: Tagged>(&mut self, payload: Option<&dyn Any>) {
        self.open_view_named(T::TAG.as_str(), payload);
    }

    /// Open a view without touching the stack.
    ///
    /// The caller owns the matching close; no fallback will fire for an
    /// overlay.
    pub fn overlay_view_named(&mut self, name: &str, payload: Option<&dyn Any>) {
        if let Some(screen) = self.screen_named(name) {
            screen.borrow_mut().open(payload);
        }
    }

    /// Typed form of [`overlay_view_named`](ViewManager::overlay_view_named).
    pub fn overlay_view<T: Tagged>(&mut self, payload: Option<&dyn Any>) {
        self.overlay_view_named(T::TAG.as_str(), payload);
    }

    /// Close a view and fall back to the previous one.
    ///
    /// Pops the screen when it is the current top, closes it, then opens
    /// whatever is now the top of the stack (stale entries pruned first).
    pub fn close_view_named(&mut self, name: &str) {
        let Some(screen) = self.screen_named(name) else {
            return;
        };

        if let Some(top) = self.stack.top() {
            if Rc::ptr_eq(&top, &screen) {
                self.stack.pop();
            }
        }

        screen.borrow_mut().close();

        if let Some(next) = self.stack.top() {
            next.borrow_mut().open(None);
        }
    }

    /// Typed form of [`close_view_named`](ViewManager::close_view_named).
    pub fn close_view<T: Tagged>(&mut self) {
        self.close_view_named(T::TAG.as_str());
    }

    /// Pop and close the current top, then fall back.
    ///
    /// Stale top entries are skipped without error; an empty stack is a
    /// no-op.
    pub fn close_top(&mut self) {
        let Some(popped) = self.stack.pop() else {
            trace!("close_top on an empty stack");
            return;
        };

        popped.borrow_mut().close();

        if let Some(next) = self.stack.top() {
            next.borrow_mut().open(None);
        }
    }

    /// Close every registered screen and clear the stack.
    ///
    /// Bulk teardown: no per-screen fallback fires.
    pub fn close_all(&mut self) {
        for screen in self.screens.handles() {
            screen.borrow_mut().close();
        }
        self.stack.clear();
    }

    /// Current top of the stack without popping it.
    pub fn top(&mut self) -> Option<ScreenHandle> {
        self.stack.top()
    }

    /// Number of live screens on the stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Push new host data into a view without touching its open state.
    pub fn refresh_named(&mut self, name: &str, payload: &dyn Any) {
        if let Some(screen) = self.screen_named(name) {
            screen.borrow_mut().refresh(payload);
        }
    }

    /// Typed form of [`refresh_named`](ViewManager::refresh_named).
    pub fn refresh<T: Tagged>(&mut self, payload: &dyn Any) {
        self.refresh_named(T::TAG.as_str(), payload);
    }

    // ------------------------------------------------------------------
    // Popups
    // ------------------------------------------------------------------

    /// Open a popup. Popups never join the stack.
    pub fn open_popup_named(&mut self, name: &str, payload: Option<&dyn Any>) {
        if let Some(popup) = self.popup_named(name) {
            popup.borrow_mut().open(payload);
        }
    }

    /// Typed form of [`open_popup_named`](ViewManager::open_popup_named).
    pub fn open_popup<T: Tagged>(&mut self, payload: Option<&dyn Any>) {
        self.open_popup_named(T::TAG.as_str(), payload);
    }

    /// Close a popup. No fallback fires.
    pub fn close_popup_named(&mut self, name: &str) {
        if let Some(popup) = self.popup_named(name) {
            popup.borrow_mut().close();
        }
    }

    /// Typed form of [`close_popup_named`](ViewManager::close_popup_named).
    pub fn close_popup<T: Tagged>(&mut self) {
        self.close_popup_named(T::TAG.as_str());
    }

    // ------------------------------------------------------------------
    // Part views & panels
    // ------------------------------------------------------------------

    /// Dock an untracked part view onto a screen via its lazy child hook.
    ///
    /// A tag the dock already tracks is left alone; a child the screen
    /// cannot find is logged and skipped.
    pub fn add_part_view_named(&mut self, screen_tag: &str, part_tag: &str) {
        let Some(screen) = self.screen_named(screen_tag) else {
            return;
        };
        if screen.borrow().dock().contains_part_view(part_tag) {
            return;
        }
        let child = screen.borrow().find_child(part_tag);
        match child {
            Some(part) => screen.borrow_mut().dock_mut().add_part_view(part),
            None => warn!("screen `{screen_tag}` has no child surface `{part_tag}` to dock"),
        }
    }

    /// Typed form of [`add_part_view_named`](ViewManager::add_part_view_named).
    pub fn add_part_view<S: Tagged, P: Tagged>(&mut self) {
        self.add_part_view_named(S::TAG.as_str(), P::TAG.as_str());
    }

    /// Open a part view, bringing its owning screen to the front first.
    ///
    /// The owning screen is found by scanning every registered screen's
    /// dock. A closed owner is opened and pushed onto the stack. All
    /// sibling part views close before the target opens; a payload is
    /// pushed through the target's refresh hook.
    pub fn open_part_view_named(&mut self, part_tag: &str, payload: Option<&dyn Any>) {
        self.screens.prune();
        let Some(owner) = self.part_view_owner(part_tag) else {
            warn!("no registered screen owns a part view `{part_tag}`");
            return;
        };

        if !owner.borrow().is_open() {
            owner.borrow_mut().open(None);
            self.stack.push(&owner);
        }

        owner.borrow().dock().open_part_view(part_tag, payload);
    }

    /// Typed form of [`open_part_view_named`](ViewManager::open_part_view_named).
    pub fn open_part_view<T: Tagged>(&mut self, payload: Option<&dyn Any>) {
        self.open_part_view_named(T::TAG.as_str(), payload);
    }

    /// Close a part view and its owning screen.
    ///
    /// The owning screen closes as well; the original system couples the
    /// two and callers rely on it.
    pub fn close_part_view_named(&mut self, part_tag: &str) {
        let Some(owner) = self.part_view_owner(part_tag) else {
            warn!("no registered screen owns a part view `{part_tag}`");
            return;
        };

        owner.borrow_mut().close();
        owner.borrow().dock().close_part_view(part_tag);
    }

    /// Typed form of [`close_part_view_named`](ViewManager::close_part_view_named).
    pub fn close_part_view<T: Tagged>(&mut self) {
        self.close_part_view_named(T::TAG.as_str());
    }

    /// First part view of a screen reporting open, `None` when none is.
    pub fn visible_part_view_named(&mut self, screen_tag: &str) -> Option<SurfaceHandle> {
        let screen = self.screen_named(screen_tag)?;
        let visible = screen.borrow().dock().visible_part_view();
        visible
    }

    /// Typed form of [`visible_part_view_named`](ViewManager::visible_part_view_named).
    pub fn visible_part_view<S: Tagged>(&mut self) -> Option<SurfaceHandle> {
        self.visible_part_view_named(S::TAG.as_str())
    }

    /// Dock an untracked panel onto a screen via its lazy child hook.
    pub fn add_panel_named(&mut self, screen_tag: &str, panel_tag: &str) {
        let Some(screen) = self.screen_named(screen_tag) else {
            return;
        };
        if screen.borrow().dock().contains_panel(panel_tag) {
            return;
        }
        let child = screen.borrow().find_child(panel_tag);
        match child {
            Some(panel) => screen.borrow_mut().dock_mut().add_panel(panel),
            None => warn!("screen `{screen_tag}` has no child surface `{panel_tag}` to dock"),
        }
    }

    /// Typed form of [`add_panel_named`](ViewManager::add_panel_named).
    pub fn add_panel<S: Tagged, P: Tagged>(&mut self) {
        self.add_panel_named(S::TAG.as_str(), P::TAG.as_str());
    }

    /// Open a panel. Sibling panels are untouched.
    pub fn open_panel_named(&mut self, panel_tag: &str) {
        let Some(owner) = self.panel_owner(panel_tag) else {
            warn!("no registered screen owns a panel `{panel_tag}`");
            return;
        };
        owner.borrow().dock().open_panel(panel_tag);
    }

    /// Typed form of [`open_panel_named`](ViewManager::open_panel_named).
    pub fn open_panel<T: Tagged>(&mut self) {
        self.open_panel_named(T::TAG.as_str());
    }

    /// Close a panel. Sibling panels are untouched.
    pub fn close_panel_named(&mut self, panel_tag: &str) {
        let Some(owner) = self.panel_owner(panel_tag) else {
            warn!("no registered screen owns a panel `{panel_tag}`");
            return;
        };
        owner.borrow().dock().close_panel(panel_tag);
    }

    /// Typed form of [`close_panel_named`](ViewManager::close_panel_named).
    pub fn close_panel<T: Tagged>(&mut self) {
        self.close_panel_named(T::TAG.as_str());
    }

    /// Handle of a tracked panel, `None` when no registered screen owns it.
    pub fn panel_named(&mut self, panel_tag: &str) -> Option<SurfaceHandle> {
        let owner = self.panel_owner(panel_tag)?;
        let panel = owner.borrow().dock().panel(panel_tag);
        panel
    }

    /// Typed form of [`panel_named`](ViewManager::panel_named).
    pub fn panel<T: Tagged>(&mut self) -> Option<SurfaceHandle> {
        self.panel_named(T::TAG.as_str())
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Whether a registered view reports open. Never registers lazily.
    pub fn is_view_open(&self, name: &str) -> bool {
        self.screens
            .get(name)
            .map_or(false, |screen| screen.borrow().is_open())
    }

    /// Whether a registered popup reports open. Never registers lazily.
    pub fn is_popup_open(&self, name: &str) -> bool {
        self.popups
            .get(name)
            .map_or(false, |popup| popup.borrow().is_open())
    }

    /// Number of live registered screens.
    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Number of live registered popups.
    pub fn popup_count(&self) -> usize {
        self.popups.len()
    }

    /// Tags of all live registered screens.
    pub fn screen_tags(&self) -> Vec<SurfaceTag> {
        self.screens.tags()
    }

    /// Tags of all live registered popups.
    pub fn popup_tags(&self) -> Vec<SurfaceTag> {
        self.popups.tags()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn part_view_owner(&self, part_tag: &str) -> Option<ScreenHandle> {
        self.screens
            .handles()
            .into_iter()
            .find(|screen| screen.borrow().dock().contains_part_view(part_tag))
    }

    fn panel_owner(&self, panel_tag: &str) -> Option<ScreenHandle> {
        self.screens
            .handles()
            .into_iter()
            .find(|screen| screen.borrow().dock().contains_panel(panel_tag))
    }

    fn initialize_entry<T>(handle: &Rc<RefCell<T>>)
    where
        T: ?Sized + Surface,
    {
        let mut surface = handle.borrow_mut();
        if surface.is_initialized() {
            return;
        }
        let tag = surface.tag();
        match surface.initialize() {
            Ok(()) => trace!("initialized surface `{tag}`"),
            Err(err @ SurfaceError::MissingRoot(_)) => {
                // Degrade, keep the batch going.
                warn!("surface `{tag}` skipped: {err}");
            }
            Err(err) => error!("surface `{tag}` failed to initialize: {err}"),
        }
    }
}
