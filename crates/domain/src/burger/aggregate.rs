//! Burger aggregate implementation.

use serde::{Deserialize, Serialize};

use crate::menu::{BurgerIngredient, MenuEntry};

use super::{Bun, BurgerError, Ingredient, receipt};

/// Burger aggregate root.
///
/// Holds at most one bun and an ordered stack of ingredients. Insertion
/// order is significant and caller-visible: it determines receipt line
/// order. The stack is gapless, indices always run `0..len`, and
/// duplicate ingredients are permitted.
///
/// The type parameters default to the concrete [`Bun`] and [`Ingredient`]
/// value objects; tests substitute stand-ins through the [`MenuEntry`]
/// and [`BurgerIngredient`] traits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Burger<B = Bun, I = Ingredient> {
    bun: Option<B>,
    ingredients: Vec<I>,
}

impl<B, I> Default for Burger<B, I> {
    fn default() -> Self {
        Self {
            bun: None,
            ingredients: Vec::new(),
        }
    }
}

// Query methods
impl<B, I> Burger<B, I> {
    /// Creates an empty burger with no bun and no ingredients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bun, if one has been set.
    pub fn bun(&self) -> Option<&B> {
        self.bun.as_ref()
    }

    /// Returns the ingredient stack in insertion order.
    pub fn ingredients(&self) -> &[I] {
        &self.ingredients
    }

    /// Returns the number of stacked ingredients.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Returns true if at least one ingredient has been added.
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

// Mutating methods
impl<B, I> Burger<B, I> {
    /// Sets the bun, replacing any previously held one.
    ///
    /// Both bread halves come from the same bun, so its price counts
    /// twice in [`price`](Burger::price).
    pub fn set_buns(&mut self, bun: B) {
        self.bun = Some(bun);
        tracing::debug!("bun set");
    }

    /// Appends an ingredient to the end of the stack.
    pub fn add_ingredient(&mut self, ingredient: I) {
        self.ingredients.push(ingredient);
        tracing::debug!(len = self.ingredients.len(), "ingredient added");
    }

    /// Removes and returns the ingredient at the given zero-based index.
    ///
    /// Subsequent ingredients shift left by one to close the gap.
    pub fn remove_ingredient(&mut self, index: usize) -> Result<I, BurgerError> {
        if index >= self.ingredients.len() {
            return Err(BurgerError::IndexOutOfBounds {
                index,
                len: self.ingredients.len(),
            });
        }

        let removed = self.ingredients.remove(index);
        tracing::debug!(index, len = self.ingredients.len(), "ingredient removed");
        Ok(removed)
    }

    /// Relocates the ingredient at `from` to position `to`.
    ///
    /// This is a remove-then-insert splice, not a swap: intervening
    /// ingredients shift to fill the origin slot and make room at the
    /// destination. Both indices are validated against the current stack
    /// length before anything moves.
    pub fn move_ingredient(&mut self, from: usize, to: usize) -> Result<(), BurgerError> {
        let len = self.ingredients.len();
        if from >= len {
            return Err(BurgerError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(BurgerError::IndexOutOfBounds { index: to, len });
        }

        let ingredient = self.ingredients.remove(from);
        self.ingredients.insert(to, ingredient);
        tracing::debug!(from, to, "ingredient moved");
        Ok(())
    }
}

// Derived outputs
impl<B: MenuEntry, I: BurgerIngredient> Burger<B, I> {
    /// Returns the total price: twice the bun price plus the sum of all
    /// ingredient prices.
    ///
    /// Fails with [`BurgerError::BunNotSet`] if no bun has been set.
    pub fn price(&self) -> Result<f32, BurgerError> {
        let bun = self.bun.as_ref().ok_or(BurgerError::BunNotSet)?;
        let ingredients: f32 = self.ingredients.iter().map(MenuEntry::price).sum();
        Ok(bun.price() * 2.0 + ingredients)
    }

    /// Renders the textual receipt for the assembled burger.
    ///
    /// Fails with [`BurgerError::BunNotSet`] if no bun has been set.
    pub fn receipt(&self) -> Result<String, BurgerError> {
        let bun = self.bun.as_ref().ok_or(BurgerError::BunNotSet)?;
        Ok(receipt::render(bun, &self.ingredients))
    }
}
