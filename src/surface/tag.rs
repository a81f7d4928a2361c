//! Surface identity tags.

use std::borrow::Borrow;
use std::fmt;

/// Stable identity tag for a surface type.
///
/// Semantics:
/// - Tags are declared once per surface type (usually through [`Tagged`])
///   and never change for the lifetime of the process.
/// - Registry maps are keyed by tag; runtime name strings borrow into the
///   same key space, so typed and dynamic resolution always agree.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SurfaceTag(&'static str);

impl SurfaceTag {
    /// Create a tag from a stable name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the tag's name.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SurfaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Lets tag-keyed maps answer lookups by plain name strings.
impl Borrow<str> for SurfaceTag {
    fn borrow(&self) -> &str {
        self.0
    }
}

/// Compile-time tag association for a surface type.
///
/// Implementing this next to a [`Surface`](super::traits::Surface) impl
/// enables the typed facade calls (`open_view::<MainMenu>()`), which resolve
/// to the same registry entry as the string form (`open_view_named("main_menu")`).
pub trait Tagged {
    /// The tag shared by every instance of this surface type.
    const TAG: SurfaceTag;
}
