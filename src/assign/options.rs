//! Assignment options.

/// Options for layout assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    /// Skip slot lookup and place every slide with a cookbook recipe
    pub use_cookbook: bool,

    /// Avoid the same slot or recipe on consecutive slides when an
    /// alternative exists
    pub variety: bool,
}

impl AssignOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force or stop forcing the cookbook path.
    pub fn with_cookbook(mut self, use_cookbook: bool) -> Self {
        self.use_cookbook = use_cookbook;
        self
    }

    /// Place every slide with a cookbook recipe.
    pub fn cookbook_only(mut self) -> Self {
        self.use_cookbook = true;
        self
    }

    /// Enable or disable the variety constraint.
    pub fn with_variety(mut self, variety: bool) -> Self {
        self.variety = variety;
        self
    }
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            use_cookbook: false,
            variety: true,
        }
    }
}
