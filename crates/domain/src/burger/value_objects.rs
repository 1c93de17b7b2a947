//! Value objects for the burger domain.

use serde::{Deserialize, Serialize};

use crate::menu::{BurgerIngredient, MenuEntry};

/// Classification of an ingredient, used for receipt labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IngredientCategory {
    /// Solid filling such as a cutlet or cheese.
    Filling,

    /// Sauce poured over the fillings.
    Sauce,
}

impl IngredientCategory {
    /// Returns the lowercase label printed on receipts.
    pub fn label(&self) -> &'static str {
        match self {
            IngredientCategory::Filling => "filling",
            IngredientCategory::Sauce => "sauce",
        }
    }
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two identical bread halves bounding a burger.
///
/// Immutable after construction. A bun contributes its price twice to the
/// burger total, once per half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bun {
    name: String,
    price: f32,
}

impl Bun {
    /// Creates a new bun.
    ///
    /// No validation is performed: empty names and zero or negative
    /// prices are stored as given.
    pub fn new(name: impl Into<String>, price: f32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl MenuEntry for Bun {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f32 {
        self.price
    }
}

/// A filling or sauce item added to a burger.
///
/// Immutable after construction. The same instance may appear in several
/// burgers, or several times in one; nothing ties an ingredient to a
/// single stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    category: IngredientCategory,
    name: String,
    price: f32,
}

impl Ingredient {
    /// Creates a new ingredient.
    ///
    /// As with [`Bun::new`], any name and any price are accepted.
    pub fn new(category: IngredientCategory, name: impl Into<String>, price: f32) -> Self {
        Self {
            category,
            name: name.into(),
            price,
        }
    }
}

impl MenuEntry for Ingredient {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f32 {
        self.price
    }
}

impl BurgerIngredient for Ingredient {
    fn category(&self) -> IngredientCategory {
        self.category
    }
}
