//! Derived views over the pantry: low stock, missing essentials, category groups.
//!
//! Each report is a plain value whose `Display` impl renders the console text.
//! Every rendered line ends with a newline, and each section header is preceded
//! by an empty line.

use serde::Serialize;

use crate::catalog::ESSENTIALS;
use crate::item::PantryItem;
use crate::pantry::Pantry;

/// Items sharing one stored category label, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<PantryItem>,
}

/// Restocking view: low-stock names and missing essentials, kept separate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    pub low_stock: Vec<String>,
    pub missing_essentials: Vec<String>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.low_stock.is_empty() && self.missing_essentials.is_empty()
    }
}

impl core::fmt::Display for ShoppingList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== SHOPPING LIST ===")?;

        if !self.low_stock.is_empty() {
            writeln!(f, "Low Stock Items:")?;
            for name in &self.low_stock {
                writeln!(f, "- {name}")?;
            }
        }

        if !self.missing_essentials.is_empty() {
            writeln!(f)?;
            writeln!(f, "Missing Essentials:")?;
            for name in &self.missing_essentials {
                writeln!(f, "- {name}")?;
            }
        }

        if self.is_empty() {
            writeln!(f, "Your pantry is well stocked!")?;
        }

        Ok(())
    }
}

/// Full inventory listing grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub groups: Vec<CategoryGroup>,
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== PANTRY INVENTORY ===")?;

        for group in &self.groups {
            writeln!(f)?;
            writeln!(f, "{}:", group.category.to_uppercase())?;
            for item in &group.items {
                let status = if item.is_low_stock() { " (LOW STOCK)" } else { "" };
                writeln!(f, "  {item}{status}")?;
            }
        }

        Ok(())
    }
}

impl Pantry {
    /// Display names of every low-stock item, in store order.
    pub fn low_stock_items(&self) -> Vec<String> {
        self.items()
            .filter(|item| item.is_low_stock())
            .map(|item| item.name().to_string())
            .collect()
    }

    /// Essentials never added or sitting at exactly zero, in table order and
    /// human-readable form.
    pub fn missing_essentials(&self) -> Vec<String> {
        ESSENTIALS
            .iter()
            .filter(|essential| {
                self.get_by_key(essential)
                    .is_none_or(|item| item.quantity() == 0)
            })
            .map(|essential| essential.replace('_', " "))
            .collect()
    }

    /// Group items by stored category. Groups appear in the order their first
    /// item was inserted.
    pub fn items_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for item in self.items() {
            match groups.iter_mut().find(|g| g.category == item.category()) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(CategoryGroup {
                    category: item.category().to_string(),
                    items: vec![item.clone()],
                }),
            }
        }

        groups
    }

    pub fn shopping_list(&self) -> ShoppingList {
        ShoppingList {
            low_stock: self.low_stock_items(),
            missing_essentials: self.missing_essentials(),
        }
    }

    pub fn inventory_report(&self) -> InventoryReport {
        InventoryReport {
            groups: self.items_by_category(),
        }
    }
}
