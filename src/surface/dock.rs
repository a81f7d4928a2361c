//! Per-screen sub-registry for part views and panels.
//!
//! A [`Dock`] tracks two kinds of nested surfaces:
//! - **part views**: mutually exclusive sub-regions; opening one closes all
//!   of its siblings first
//! - **panels**: independently toggled overlays with no exclusivity rule
//!
//! Entries are tracked by tag. A screen usually fills its dock during its
//! own initialize hook; the facade's lazy `add_part_view`/`add_panel` path
//! feeds the same tracking methods.

use std::any::Any;

use log::{debug, error, warn};

use super::traits::{Surface, SurfaceHandle};

/// Sub-registry owned by a single screen.
#[derive(Default)]
pub struct Dock {
    part_views: Vec<SurfaceHandle>,
    panels: Vec<SurfaceHandle>,
}

impl Dock {
    /// Create an empty dock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a part view, initializing it if the host has not yet.
    ///
    /// A tag that is already tracked is skipped; the existing entry wins.
    pub fn add_part_view(&mut self, part: SurfaceHandle) {
        Self::track(&mut self.part_views, part, "part view");
    }

    /// Track a panel, initializing it if the host has not yet.
    pub fn add_panel(&mut self, panel: SurfaceHandle) {
        Self::track(&mut self.panels, panel, "panel");
    }

    /// Whether a part view with this tag is tracked.
    pub fn contains_part_view(&self, tag: &str) -> bool {
        Self::find(&self.part_views, tag).is_some()
    }

    /// Whether a panel with this tag is tracked.
    pub fn contains_panel(&self, tag: &str) -> bool {
        Self::find(&self.panels, tag).is_some()
    }

    /// Handle of a tracked part view, `None` when the tag is unknown.
    pub fn part_view(&self, tag: &str) -> Option<SurfaceHandle> {
        Self::find(&self.part_views, tag)
    }

    /// Handle of a tracked panel, `None` when the tag is unknown.
    pub fn panel(&self, tag: &str) -> Option<SurfaceHandle> {
        Self::find(&self.panels, tag)
    }

    /// Open the part view with this tag, closing every sibling first.
    ///
    /// The exclusivity sweep covers all tracked part views, the target
    /// included, before the target is opened. A supplied payload is pushed
    /// through the target's refresh hook after it opens.
    pub fn open_part_view(&self, tag: &str, payload: Option<&dyn Any>) {
        let Some(target) = Self::find(&self.part_views, tag) else {
            warn!("no part view `{tag}` is tracked by this screen");
            return;
        };

        for part in &self.part_views {
            part.borrow_mut().close();
        }

        target.borrow_mut().open(None);
        if let Some(payload) = payload {
            target.borrow_mut().refresh(payload);
        }
    }

    /// Close the part view with this tag.
    pub fn close_part_view(&self, tag: &str) {
        match Self::find(&self.part_views, tag) {
            Some(part) => part.borrow_mut().close(),
            None => warn!("no part view `{tag}` is tracked by this screen"),
        }
    }

    /// First tracked part view reporting open, `None` when none is.
    pub fn visible_part_view(&self) -> Option<SurfaceHandle> {
        self.part_views
            .iter()
            .find(|part| part.borrow().is_open())
            .cloned()
    }

    /// Open the panel with this tag. Sibling panels are untouched.
    pub fn open_panel(&self, tag: &str) {
        match Self::find(&self.panels, tag) {
            Some(panel) => panel.borrow_mut().open(None),
            None => warn!("no panel `{tag}` is tracked by this screen"),
        }
    }

    /// Close the panel with this tag. Sibling panels are untouched.
    pub fn close_panel(&self, tag: &str) {
        match Self::find(&self.panels, tag) {
            Some(panel) => panel.borrow_mut().close(),
            None => warn!("no panel `{tag}` is tracked by this screen"),
        }
    }

    /// Number of tracked part views.
    pub fn part_view_count(&self) -> usize {
        self.part_views.len()
    }

    /// Number of tracked panels.
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn find(list: &[SurfaceHandle], tag: &str) -> Option<SurfaceHandle> {
        list.iter()
            .find(|entry| entry.borrow().tag().as_str() == tag)
            .cloned()
    }

    fn track(list: &mut Vec<SurfaceHandle>, entry: SurfaceHandle, kind: &str) {
        let tag = entry.borrow().tag();
        if Self::find(list, tag.as_str()).is_some() {
            debug!("{kind} `{tag}` is already tracked; keeping the existing entry");
            return;
        }

        {
            let mut surface = entry.borrow_mut();
            if !surface.is_initialized() {
                if let Err(err) = surface.initialize() {
                    // Tracked anyway; the failure is the host's to fix.
                    error!("{kind} `{tag}` failed to initialize: {err}");
                }
            }
        }

        list.push(entry);
    }
}
