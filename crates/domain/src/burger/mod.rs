//! Burger aggregate and related types.

mod aggregate;
mod receipt;
mod value_objects;

pub use aggregate::Burger;
pub use value_objects::{Bun, Ingredient, IngredientCategory};

use thiserror::Error;

/// Errors that can occur during burger operations.
#[derive(Debug, Error)]
pub enum BurgerError {
    /// An ingredient index fell outside the current stack bounds.
    #[error("Ingredient index out of bounds: {index} (stack holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A price or receipt was requested before any bun was set.
    #[error("No bun has been set")]
    BunNotSet,
}
