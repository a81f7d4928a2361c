//! # Surface Module
//!
//! This module defines the contracts between the stagehand engine and the
//! host presentation framework. The engine never renders anything; it
//! drives the lifecycle hooks declared here and leaves every visual side
//! effect to the implementations.
//!
//! ## Key Components
//!
//! - [`Surface`] - lifecycle contract (initialize, open, close, refresh)
//! - [`Screen`] - a surface that owns a [`Dock`] and sits on the
//!   navigation stack
//! - [`Dock`] - per-screen sub-registry of part views and panels
//! - [`SurfaceTag`] / [`Tagged`] - stable symbolic identity
//! - [`SurfaceError`] - failure taxonomy for the initialize hook
//!
//! [`Surface`]: traits::Surface
//! [`Screen`]: traits::Screen
//! [`Dock`]: dock::Dock
//! [`SurfaceTag`]: tag::SurfaceTag
//! [`Tagged`]: tag::Tagged
//! [`SurfaceError`]: error::SurfaceError

pub mod dock;
pub mod error;
pub mod tag;
pub mod traits;

// Re-export main types
pub use dock::Dock;
pub use error::SurfaceError;
pub use tag::{SurfaceTag, Tagged};
pub use traits::{Screen, ScreenHandle, ScreenRef, Surface, SurfaceHandle, SurfaceRef};
