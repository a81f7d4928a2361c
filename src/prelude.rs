//! # Stagehand Prelude
//!
//! This module provides a convenient way to import commonly used types and
//! traits from the stagehand engine. It's designed to reduce boilerplate
//! imports in typical host integrations.
//!
//! ## Usage
//!
//! ```rust
//! use stagehand::prelude::*;
//! ```

// Re-export the facade and host contract
pub use crate::nav::manager::ViewManager;
pub use crate::nav::stage::Stage;
pub use crate::manage;

// Re-export navigation internals for hosts that compose them directly
pub use crate::nav::registry::Registry;
pub use crate::nav::stack::ViewStack;

// Re-export surface contracts and identity types
pub use crate::surface::dock::Dock;
pub use crate::surface::error::SurfaceError;
pub use crate::surface::tag::{SurfaceTag, Tagged};
pub use crate::surface::traits::{
    Screen, ScreenHandle, ScreenRef, Surface, SurfaceHandle, SurfaceRef,
};

// Re-export common standard library types surfaces are built from
pub use std::any::Any;
pub use std::cell::RefCell;
pub use std::rc::Rc;
