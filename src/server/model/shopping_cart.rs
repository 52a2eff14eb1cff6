//! Aggregated shopping list built from the recipes in a user's cart.

use std::collections::BTreeMap;

pub const SHOPPING_LIST_FILENAME: &str = "shop_list.txt";

/// Ingredient totals keyed by `(name, measurement_unit)`.
///
/// The map ordering gives the rendered list its order: by name, then unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: BTreeMap<(String, String), i64>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, measurement_unit: &str, amount: i32) {
        *self
            .items
            .entry((name.to_string(), measurement_unit.to_string()))
            .or_insert(0) += i64::from(amount);
    }

    /// Renders one `"{name} – {total}{unit}."` line per item.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|((name, unit), total)| format!("{} – {}{}.\n", name, total, unit))
            .collect()
    }
}
