//! The host environment contract.

use crate::surface::traits::{ScreenHandle, SurfaceHandle};

/// The host environment that owns the live surface instances.
///
/// The engine scans the stage during [`reinitialize`] and queries it for
/// single instances during lazy resolution. The stage keeps the owning
/// handles; destroying an instance on the host side is how a surface
/// leaves management.
///
/// [`reinitialize`]: super::manager::ViewManager::reinitialize
pub trait Stage {
    /// All live screen instances, in host order.
    fn screens(&self) -> Vec<ScreenHandle>;

    /// All live popup instances, in host order.
    fn popups(&self) -> Vec<SurfaceHandle>;

    /// Single live lookup of a screen by tag.
    ///
    /// The default scans [`screens`](Stage::screens); hosts with an index
    /// can override.
    fn find_screen(&self, tag: &str) -> Option<ScreenHandle> {
        self.screens()
            .into_iter()
            .find(|screen| screen.borrow().tag().as_str() == tag)
    }

    /// Single live lookup of a popup by tag.
    fn find_popup(&self, tag: &str) -> Option<SurfaceHandle> {
        self.popups()
            .into_iter()
            .find(|popup| popup.borrow().tag().as_str() == tag)
    }
}
