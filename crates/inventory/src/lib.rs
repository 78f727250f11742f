//! Pantry inventory domain.
//!
//! This crate contains the pantry bookkeeping rules: the reference tables, the
//! in-memory inventory store, the derived reports, the shopping analyzer and
//! the grocery shopping list.
//! Nothing here writes to stdout; callers decide where text goes.

pub mod analyzer;
pub mod catalog;
pub mod item;
pub mod pantry;
pub mod report;
pub mod shared;
pub mod shopping;

pub use analyzer::{
    InventoryTemplate, PurchaseRecord, ShoppingAnalysis, Suggestion, analyze_shopping_patterns,
    categorize_item, clean_item_name, find_missing_essentials, inventory_template,
    inventory_template_json, pantry_suggestions,
};
pub use catalog::{ANALYZER_CATEGORIES, CATEGORIES, ESSENTIALS, PRODUCTS, Product};
pub use item::{DEFAULT_LOW_STOCK_THRESHOLD, PantryItem};
pub use pantry::{Pantry, StockChange};
pub use report::{CategoryGroup, InventoryReport, ShoppingList};
pub use shared::SharedPantry;
pub use shopping::{
    GroceryGroup, GroceryItem, GroceryList, ParsedCommand, SearchQuery, item_price, parse_command,
    search_items, smart_suggestions,
};
