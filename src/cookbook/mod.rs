//! Absolute-positioning layout recipes.
//!
//! The cookbook is the fallback used when a template slot lacks the
//! placeholders a slide needs, so content is never silently dropped.
//! The registry is built once on first access and is read-only afterwards;
//! there is no mutation API.
//!
//! # Example
//!
//! ```
//! use deckplan::cookbook;
//! use deckplan::model::ContentType;
//!
//! let recipe = cookbook::get_recipe(ContentType::BulletList).unwrap();
//! assert_eq!(recipe.name, "feature_default");
//! assert_eq!(cookbook::list_recipes().len(), 13);
//! ```

mod builtin;
mod recipe;

pub use recipe::{
    Alignment, BackgroundSpec, BoxPosition, BoxRole, ImageBoxSpec, LayoutRecipe, PlacedBox,
    TextBoxSpec, VerticalAnchor, DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH, EMU_PER_INCH,
    EMU_PER_PT,
};

use crate::error::{Error, Result};
use crate::model::ContentType;
use once_cell::sync::Lazy;

/// Read-only registry of layout recipes in insertion order.
#[derive(Debug)]
pub struct Cookbook {
    recipes: Vec<LayoutRecipe>,
}

static COOKBOOK: Lazy<Cookbook> = Lazy::new(|| Cookbook {
    recipes: builtin::build(),
});

/// The process-wide cookbook.
pub fn cookbook() -> &'static Cookbook {
    &COOKBOOK
}

impl Cookbook {
    /// The primary recipe for a content type: the first registered recipe
    /// designed for it.
    pub fn get_recipe(&self, content_type: ContentType) -> Result<&LayoutRecipe> {
        self.recipes
            .iter()
            .find(|r| r.supports(content_type))
            .ok_or_else(|| Error::RecipeNotFound(content_type.to_string()))
    }

    /// Every recipe designed for a content type, in registry order.
    pub fn recipes_for(&self, content_type: ContentType) -> Vec<&LayoutRecipe> {
        self.recipes
            .iter()
            .filter(|r| r.supports(content_type))
            .collect()
    }

    /// Look a recipe up by name.
    pub fn recipe_by_name(&self, name: &str) -> Result<&LayoutRecipe> {
        self.recipes
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| Error::RecipeNotFound(name.to_string()))
    }

    /// Recipe names in registry order.
    pub fn list_recipes(&self) -> Vec<&'static str> {
        self.recipes.iter().map(|r| r.name).collect()
    }

    /// All recipes in registry order.
    pub fn recipes(&self) -> &[LayoutRecipe] {
        &self.recipes
    }

    /// Check that every content type has at least one recipe.
    pub fn verify_complete(&self) -> Result<()> {
        for content_type in ContentType::ALL {
            self.get_recipe(content_type)?;
        }
        Ok(())
    }
}

/// The primary recipe for a content type.
pub fn get_recipe(content_type: ContentType) -> Result<&'static LayoutRecipe> {
    cookbook().get_recipe(content_type)
}

/// Look a recipe up by name.
pub fn recipe_by_name(name: &str) -> Result<&'static LayoutRecipe> {
    cookbook().recipe_by_name(name)
}

/// Every recipe designed for a content type, in registry order.
pub fn recipes_for(content_type: ContentType) -> Vec<&'static LayoutRecipe> {
    cookbook().recipes_for(content_type)
}

/// Recipe names in registry order.
pub fn list_recipes() -> Vec<&'static str> {
    cookbook().list_recipes()
}

/// Check registry completeness; call once at startup.
pub fn verify_complete() -> Result<()> {
    cookbook().verify_complete()
}
