use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pantry_core::ItemKey;

use crate::item::PantryItem;

/// Outcome of a store mutation.
///
/// `Display` renders the confirmation line shown to the user. Amounts and names
/// are echoed as the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StockChange {
    /// Stock was added (new item or restock of an existing one).
    Added {
        key: ItemKey,
        name: String,
        quantity: i64,
        unit: String,
        created: bool,
    },
    /// Stock was removed; `remaining` is the clamped result.
    Removed {
        key: ItemKey,
        name: String,
        quantity: i64,
        remaining: i64,
    },
    /// Removal targeted a key that was never added. Nothing changed.
    NotFound { name: String },
}

impl StockChange {
    pub fn event_type(&self) -> &'static str {
        match self {
            StockChange::Added { created: true, .. } => "pantry.item.created",
            StockChange::Added { created: false, .. } => "pantry.item.restocked",
            StockChange::Removed { .. } => "pantry.item.removed",
            StockChange::NotFound { .. } => "pantry.item.not_found",
        }
    }

    /// Whether the store was mutated.
    pub fn is_applied(&self) -> bool {
        !matches!(self, StockChange::NotFound { .. })
    }
}

impl core::fmt::Display for StockChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockChange::Added {
                name, quantity, unit, ..
            } => write!(f, "Added: {name} ({quantity} {unit})"),
            StockChange::Removed {
                name,
                quantity,
                remaining,
                ..
            } => write!(f, "Removed: {quantity} {name} (Remaining: {remaining})"),
            StockChange::NotFound { name } => write!(f, "Item not found: {name}"),
        }
    }
}

/// In-memory inventory store: one item per normalized key.
///
/// Iteration follows first-insertion order. Items are never deleted; removal
/// only lowers the quantity.
#[derive(Debug, Clone, Default)]
pub struct Pantry {
    items: Vec<PantryItem>,
    index: HashMap<ItemKey, usize>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stock, restocking today.
    pub fn add_item(&mut self, name: &str, category: &str, quantity: i64, unit: &str) -> StockChange {
        self.add_item_on(name, category, quantity, unit, chrono::Local::now().date_naive())
    }

    /// Add stock. A new item records `restocked_on`; an existing item keeps its
    /// original name, category, unit and restock date and only gains quantity.
    pub fn add_item_on(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        unit: &str,
        restocked_on: NaiveDate,
    ) -> StockChange {
        let key = ItemKey::normalize(name);

        if quantity < 0 {
            tracing::warn!(key = %key, quantity, "negative addition; quantity is clamped at zero");
        }

        let created = match self.index.get(&key) {
            Some(&pos) => {
                let existing = &mut self.items[pos];
                existing.set_quantity(existing.quantity().saturating_add(quantity));
                false
            }
            None => {
                let item = PantryItem::new(name, category, quantity, unit, restocked_on);
                self.index.insert(key.clone(), self.items.len());
                self.items.push(item);
                true
            }
        };

        let change = StockChange::Added {
            key: key.clone(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            created,
        };
        tracing::debug!(
            event = change.event_type(),
            key = %key,
            category,
            quantity,
            "stock added"
        );
        change
    }

    /// Remove stock, clamping at zero. An unknown name is a no-op.
    pub fn remove_item(&mut self, name: &str, quantity: i64) -> StockChange {
        let key = ItemKey::normalize(name);

        let Some(&pos) = self.index.get(&key) else {
            let change = StockChange::NotFound {
                name: name.to_string(),
            };
            tracing::warn!(event = change.event_type(), key = %key, "removal requested for unknown item");
            return change;
        };

        let item = &mut self.items[pos];
        item.set_quantity(item.quantity().saturating_sub(quantity));
        let remaining = item.quantity();

        let change = StockChange::Removed {
            key: key.clone(),
            name: name.to_string(),
            quantity,
            remaining,
        };
        tracing::debug!(
            event = change.event_type(),
            key = %key,
            removed = quantity,
            remaining,
            "stock removed"
        );
        change
    }

    /// Look up by display name (normalized first).
    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        self.get_by_key(ItemKey::normalize(name).as_str())
    }

    /// Look up by already-normalized key.
    pub fn get_by_key(&self, key: &str) -> Option<&PantryItem> {
        self.index.get(key).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Items in first-insertion order.
    pub fn items(&self) -> impl Iterator<Item = &PantryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn first_addition_creates_item() {
        let mut pantry = Pantry::new();
        let change = pantry.add_item_on("Rice", "grains", 5, "lbs", test_date());

        assert_eq!(change.event_type(), "pantry.item.created");
        assert_eq!(change.to_string(), "Added: Rice (5 lbs)");

        let rice = pantry.get("Rice").unwrap();
        assert_eq!(rice.quantity(), 5);
        assert_eq!(rice.category(), "grains");
        assert_eq!(rice.unit(), "lbs");
        assert_eq!(rice.last_restocked(), test_date());
    }

    #[test]
    fn later_additions_keep_first_name_category_and_unit() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Olive Oil", "oils_vinegars", 1, "bottle", test_date());
        let later = test_date().succ_opt().unwrap();
        let change = pantry.add_item_on("OLIVE OIL", "condiments", 2, "liters", later);

        assert_eq!(change.event_type(), "pantry.item.restocked");
        assert_eq!(change.to_string(), "Added: OLIVE OIL (2 liters)");
        assert_eq!(pantry.len(), 1);

        let oil = pantry.get("olive oil").unwrap();
        assert_eq!(oil.name(), "Olive Oil");
        assert_eq!(oil.quantity(), 3);
        assert_eq!(oil.category(), "oils_vinegars");
        assert_eq!(oil.unit(), "bottle");
        assert_eq!(oil.last_restocked(), test_date());
    }

    #[test]
    fn remove_then_reports_remaining() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Rice", "grains", 5, "lbs", test_date());

        let change = pantry.remove_item("Rice", 2);
        assert_eq!(change.to_string(), "Removed: 2 Rice (Remaining: 3)");

        let rice = pantry.get("rice").unwrap();
        assert_eq!(rice.quantity(), 3);
        assert_eq!(rice.category(), "grains");
        assert_eq!(rice.unit(), "lbs");
    }

    #[test]
    fn remove_clamps_at_zero_and_keeps_item() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Pasta", "grains", 3, "boxes", test_date());

        let change = pantry.remove_item("Pasta", 10);
        assert_eq!(change.to_string(), "Removed: 10 Pasta (Remaining: 0)");
        assert_eq!(pantry.get("Pasta").unwrap().quantity(), 0);
        assert_eq!(pantry.len(), 1);
    }

    #[test]
    fn remove_unknown_item_is_a_no_op() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Rice", "grains", 5, "lbs", test_date());
        let before = pantry.items().cloned().collect::<Vec<_>>();

        let change = pantry.remove_item("Quinoa", 1);
        assert!(!change.is_applied());
        assert_eq!(change.to_string(), "Item not found: Quinoa");
        assert_eq!(pantry.items().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn negative_addition_is_clamped_at_zero() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Salt", "spices", 1, "container", test_date());
        let change = pantry.add_item_on("Salt", "spices", -5, "container", test_date());

        assert_eq!(change.to_string(), "Added: Salt (-5 container)");
        assert_eq!(pantry.get("Salt").unwrap().quantity(), 0);
    }

    #[test]
    fn negative_removal_grows_stock() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Cumin", "spices", 2, "jars", test_date());

        let change = pantry.remove_item("Cumin", -3);
        assert_eq!(change.to_string(), "Removed: -3 Cumin (Remaining: 5)");
        assert_eq!(pantry.get("cumin").unwrap().quantity(), 5);
    }

    #[test]
    fn zero_addition_leaves_quantity_unchanged() {
        let mut pantry = Pantry::new();
        pantry.add_item_on("Paprika", "spices", 2, "jars", test_date());
        let change = pantry.add_item_on("Paprika", "spices", 0, "jars", test_date());

        assert_eq!(change.event_type(), "pantry.item.restocked");
        assert_eq!(pantry.get("paprika").unwrap().quantity(), 2);
    }

    #[test]
    fn items_iterate_in_insertion_order() {
        let mut pantry = Pantry::new();
        for name in ["Salt", "Rice", "Honey"] {
            pantry.add_item_on(name, "misc", 2, "units", test_date());
        }
        pantry.add_item_on("rice", "misc", 1, "units", test_date());

        let names: Vec<_> = pantry.items().map(PantryItem::name).collect();
        assert_eq!(names, vec!["Salt", "Rice", "Honey"]);
    }

    #[test]
    fn stock_change_serializes_with_type_tag() {
        let change = StockChange::NotFound {
            name: "Quinoa".to_string(),
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["type"], "not_found");
        assert_eq!(json["name"], "Quinoa");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: additions under one key sum up; the first call's category
        /// and unit stick.
        #[test]
        fn additions_accumulate_under_one_key(
            amounts in prop::collection::vec(0i64..1_000, 1..20)
        ) {
            let mut pantry = Pantry::new();
            let spellings = ["Brown Sugar", "brown sugar", "BROWN SUGAR"];

            for (i, amount) in amounts.iter().enumerate() {
                let category = if i == 0 { "baking" } else { "other" };
                let unit = if i == 0 { "bags" } else { "grams" };
                pantry.add_item_on(spellings[i % spellings.len()], category, *amount, unit, test_date());
            }

            let item = pantry.get("brown sugar").unwrap();
            prop_assert_eq!(pantry.len(), 1);
            prop_assert_eq!(item.quantity(), amounts.iter().sum::<i64>());
            prop_assert_eq!(item.category(), "baking");
            prop_assert_eq!(item.unit(), "bags");
        }

        /// Property: removal never drives quantity below zero.
        #[test]
        fn removal_never_goes_negative(
            initial in 0i64..100,
            removals in prop::collection::vec(0i64..1_000, 1..10)
        ) {
            let mut pantry = Pantry::new();
            pantry.add_item_on("Flour", "baking", initial, "bags", test_date());

            let mut expected = initial;
            for q in removals {
                pantry.remove_item("Flour", q);
                expected = (expected - q).max(0);
                prop_assert!(pantry.get("Flour").unwrap().quantity() >= 0);
            }
            prop_assert_eq!(pantry.get("Flour").unwrap().quantity(), expected);
        }

        /// Property: removing a never-added name leaves the store unchanged.
        #[test]
        fn removal_of_unknown_name_changes_nothing(
            name in "[a-z]{1,12}",
            q in 0i64..1_000
        ) {
            let mut pantry = Pantry::new();
            pantry.add_item_on("Canned Beans", "canned_goods", 4, "cans", test_date());

            let before = pantry.items().cloned().collect::<Vec<_>>();
            let change = pantry.remove_item(&name, q);

            prop_assert!(!change.is_applied());
            prop_assert_eq!(pantry.items().cloned().collect::<Vec<_>>(), before);
            prop_assert!(!pantry.contains(&name));
        }
    }
}
