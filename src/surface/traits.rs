//! # Surface Traits
//!
//! This module defines the lifecycle contracts that host UI elements must
//! implement to be coordinated by the stagehand engine.
//!
//! ## Lifecycle
//!
//! A managed surface moves through this pattern:
//! 1. **Initialize** - called once when the surface is first brought under
//!    management (bulk discovery or lazy resolution)
//! 2. **Open/Close** - visibility transitions driven by the navigation
//!    stack, dock, or popup operations
//! 3. **Refresh** - new host data pushed into an already-open surface
//!
//! All presentation side effects (showing the visual tree, notification
//! fan-out, animations) belong to the implementation and must complete
//! synchronously inside each call. The engine only decides *which* surface
//! should be visible and *when* it is told so.
//!
//! ## Examples
//!
//! ```
//! use stagehand::surface::dock::Dock;
//! use stagehand::surface::error::SurfaceError;
//! use stagehand::surface::tag::{SurfaceTag, Tagged};
//! use stagehand::surface::traits::{Screen, Surface};
//! use std::any::Any;
//!
//! struct MainMenu {
//!     initialized: bool,
//!     shown: bool,
//!     dock: Dock,
//! }
//!
//! impl Tagged for MainMenu {
//!     const TAG: SurfaceTag = SurfaceTag::new("main_menu");
//! }
//!
//! impl Surface for MainMenu {
//!     fn tag(&self) -> SurfaceTag { Self::TAG }
//!     fn initialize(&mut self) -> Result<(), SurfaceError> {
//!         self.initialized = true;
//!         Ok(())
//!     }
//!     fn open(&mut self, _payload: Option<&dyn Any>) { self.shown = true; }
//!     fn close(&mut self) { self.shown = false; }
//!     fn refresh(&mut self, _payload: &dyn Any) {}
//!     fn is_initialized(&self) -> bool { self.initialized }
//!     fn is_open(&self) -> bool { self.shown }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//! }
//!
//! impl Screen for MainMenu {
//!     fn dock(&self) -> &Dock { &self.dock }
//!     fn dock_mut(&mut self) -> &mut Dock { &mut self.dock }
//! }
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::dock::Dock;
use super::error::SurfaceError;
use super::tag::SurfaceTag;

/// Shared handle to a host-owned surface.
///
/// The host keeps the owning `Rc`; the engine stores [`SurfaceRef`] weak
/// counterparts so a destroyed instance is detected instead of dereferenced.
pub type SurfaceHandle = Rc<RefCell<dyn Surface>>;

/// Weak counterpart of [`SurfaceHandle`].
pub type SurfaceRef = Weak<RefCell<dyn Surface>>;

/// Shared handle to a host-owned screen.
pub type ScreenHandle = Rc<RefCell<dyn Screen>>;

/// Weak counterpart of [`ScreenHandle`].
pub type ScreenRef = Weak<RefCell<dyn Screen>>;

/// Core lifecycle contract for anything the engine coordinates.
pub trait Surface {
    /// Stable identity of this surface.
    fn tag(&self) -> SurfaceTag;

    /// Bring the surface under management.
    ///
    /// Called at most once per instance; the engine checks
    /// [`is_initialized`](Surface::is_initialized) before calling. Failures
    /// are logged at the facade boundary and never abort the batch the
    /// surface was discovered in.
    fn initialize(&mut self) -> Result<(), SurfaceError>;

    /// Make the surface visible.
    ///
    /// Fires the implementation's open notification and triggers a refresh
    /// with the payload when one is supplied.
    fn open(&mut self, payload: Option<&dyn Any>);

    /// Hide the surface and fire its close notification.
    fn close(&mut self);

    /// Push new host data into an already-open surface.
    fn refresh(&mut self, payload: &dyn Any);

    /// Whether [`initialize`](Surface::initialize) has completed.
    fn is_initialized(&self) -> bool;

    /// Whether the presentation root is currently shown.
    fn is_open(&self) -> bool;

    /// Support for downcasting to concrete types
    fn as_any(&self) -> &dyn Any;

    /// Support for mutable downcasting to concrete types
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A full-size surface that participates in the navigation stack and owns
/// a [`Dock`] of part views and panels.
pub trait Screen: Surface {
    /// The screen's sub-registry.
    fn dock(&self) -> &Dock;

    /// Mutable access to the screen's sub-registry.
    fn dock_mut(&mut self) -> &mut Dock;

    /// Locate an untracked child surface by tag.
    ///
    /// This is the narrow lazy-discovery hook used by the facade's
    /// `add_part_view`/`add_panel` path when a tag is not already docked.
    /// Screens that register all children during
    /// [`initialize`](Surface::initialize) can keep the default.
    fn find_child(&self, tag: &str) -> Option<SurfaceHandle> {
        let _ = tag;
        None
    }
}
