use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pantry_core::{Entity, ItemKey};

/// Threshold assigned to every item at creation.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 1;

/// One tracked pantry item.
///
/// Created by the store on the first addition for its key; afterwards only the
/// quantity changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    key: ItemKey,
    name: String,
    category: String,
    quantity: i64,
    unit: String,
    last_restocked: NaiveDate,
    expiry_date: Option<NaiveDate>,
    low_stock_threshold: i64,
}

impl PantryItem {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        restocked_on: NaiveDate,
    ) -> Self {
        let name = name.into();
        Self {
            key: ItemKey::normalize(&name),
            name,
            category: category.into(),
            quantity: quantity.max(0),
            unit: unit.into(),
            last_restocked: restocked_on,
            expiry_date: None,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_expiry_date(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn last_restocked(&self) -> NaiveDate {
        self.last_restocked
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    /// At or below the threshold. Zero stock counts as low stock too.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(chrono::Local::now().date_naive())
    }

    /// Expired when an expiry date is set and lies strictly before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }

    /// Clamp-at-zero quantity update used by the store.
    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(0);
    }
}

impl Entity for PantryItem {
    type Id = ItemKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl core::fmt::Display for PantryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({} {}) - Category: {}",
            self.name, self.quantity, self.unit, self.category
        )
    }
}
