use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::pantry::{Pantry, StockChange};
use crate::report::{CategoryGroup, InventoryReport, ShoppingList};

/// Thread-safe handle for hosts that touch one pantry from several threads.
///
/// Every operation holds the single lock for its whole duration, so operations
/// never interleave. Clones share the same pantry.
#[derive(Debug, Clone, Default)]
pub struct SharedPantry {
    inner: Arc<Mutex<Pantry>>,
}

impl SharedPantry {
    pub fn new(pantry: Pantry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pantry)),
        }
    }

    // Mutations are single assignments; a poisoned lock still guards a consistent pantry.
    fn lock(&self) -> MutexGuard<'_, Pantry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the pantry.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pantry) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn add_item(&self, name: &str, category: &str, quantity: i64, unit: &str) -> StockChange {
        self.lock().add_item(name, category, quantity, unit)
    }

    pub fn remove_item(&self, name: &str, quantity: i64) -> StockChange {
        self.lock().remove_item(name, quantity)
    }

    pub fn low_stock_items(&self) -> Vec<String> {
        self.lock().low_stock_items()
    }

    pub fn missing_essentials(&self) -> Vec<String> {
        self.lock().missing_essentials()
    }

    pub fn items_by_category(&self) -> Vec<CategoryGroup> {
        self.lock().items_by_category()
    }

    pub fn shopping_list(&self) -> ShoppingList {
        self.lock().shopping_list()
    }

    pub fn inventory_report(&self) -> InventoryReport {
        self.lock().inventory_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_additions_are_not_lost() {
        let shared = SharedPantry::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.add_item("Rice", "grains", 1, "lbs");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let quantity = shared.with(|p| p.get("rice").map(|i| i.quantity()));
        assert_eq!(quantity, Some(800));
    }

    #[test]
    fn reports_read_through_the_lock() {
        let shared = SharedPantry::new(Pantry::new());
        shared.add_item("Pasta", "grains", 3, "boxes");
        shared.remove_item("Pasta", 3);

        assert_eq!(shared.low_stock_items(), vec!["Pasta".to_string()]);
        assert!(shared.missing_essentials().contains(&"pasta".to_string()));
        assert_eq!(shared.items_by_category().len(), 1);
        assert!(!shared.shopping_list().is_empty());
        assert_eq!(shared.inventory_report().groups[0].category, "grains");
    }
}
