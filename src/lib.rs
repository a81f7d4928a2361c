// src/lib.rs
//! Stagehand UI navigation engine
//!
//! A registry and navigation-stack engine for host-owned UI surfaces:
//! screens, popups, part views and panels addressed by symbolic identity.
//! Stagehand decides which surface should be visible and when it is told
//! to open or close; all rendering belongs to the host.

pub mod nav;
pub mod prelude;
pub mod surface;

// Re-export main types for convenience
pub use nav::manager::ViewManager;
pub use nav::stage::Stage;
pub use surface::traits::{Screen, Surface};

/// Creates a view manager bound to the given host stage
pub fn manage(stage: Box<dyn Stage>) -> ViewManager {
    ViewManager::new(stage)
}
