//! Receipt rendering for assembled burgers.

use std::fmt::Write;

use crate::menu::{BurgerIngredient, MenuEntry};

/// Renders the textual receipt: bun header, one line per ingredient in
/// stack order, bun footer, blank line, total price.
pub(crate) fn render<B, I>(bun: &B, ingredients: &[I]) -> String
where
    B: MenuEntry,
    I: BurgerIngredient,
{
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "(==== {} ====)", bun.name());
    for ingredient in ingredients {
        let _ = writeln!(
            out,
            "= {} {} =",
            ingredient.category().label(),
            ingredient.name()
        );
    }
    let _ = writeln!(out, "(==== {} ====)", bun.name());

    let total = bun.price() * 2.0 + ingredients.iter().map(MenuEntry::price).sum::<f32>();
    let _ = writeln!(out, "\nPrice: {}", format_price(total));

    out
}

/// Formats a price with exactly six fractional digits and a comma as the
/// decimal separator, e.g. `145,000000`.
fn format_price(price: f32) -> String {
    format!("{:.6}", price).replace('.', ",")
}
