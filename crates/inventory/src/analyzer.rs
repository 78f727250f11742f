//! Shopping analysis: purchase-pattern statistics, restock suggestions and an
//! empty inventory template.
//!
//! Matching here is looser than the store's key normalization: names are
//! cleaned of punctuation, and catalog entries match as substrings
//! (`"brown_rice"` counts as rice).

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use pantry_core::{PantryError, PantryResult};

use crate::catalog::{ANALYZER_CATEGORIES, ESSENTIALS, complements_of};
use crate::item::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::pantry::Pantry;

const MOST_BOUGHT_LIMIT: usize = 10;
const SUGGESTION_LIMIT: usize = 8;
const TEMPLATE_UNIT: &str = "units";

/// One purchase from shopping history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl PurchaseRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingAnalysis {
    /// `(cleaned name, count)`, most frequent first; ties keep first-seen order.
    pub most_bought_items: Vec<(String, usize)>,
    pub category_distribution: BTreeMap<String, usize>,
    pub missing_essentials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub item: String,
    pub reason: String,
    pub category: String,
}

impl Suggestion {
    fn pantry(item: &str, reason: String) -> Self {
        Self {
            item: item.replace('_', " "),
            reason,
            category: "pantry".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTemplate {
    pub last_updated: NaiveDateTime,
    pub categories: BTreeMap<String, TemplateCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub items: BTreeMap<String, TemplateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub quantity: i64,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub last_restocked: Option<NaiveDate>,
    pub low_stock_threshold: i64,
}

/// Lowercase, trim, strip punctuation, then spaces to underscores.
pub fn clean_item_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .replace(' ', "_")
}

/// First analyzer category with an item contained in `cleaned_name`.
pub fn categorize_item(cleaned_name: &str) -> Option<&'static str> {
    ANALYZER_CATEGORIES
        .iter()
        .find(|(_, items)| items.iter().any(|item| cleaned_name.contains(item)))
        .map(|(category, _)| *category)
}

pub fn analyze_shopping_patterns(records: &[PurchaseRecord]) -> ShoppingAnalysis {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut category_distribution = BTreeMap::new();

    for record in records {
        let cleaned = clean_item_name(&record.name);

        if let Some(category) = categorize_item(&cleaned) {
            *category_distribution.entry(category.to_string()).or_insert(0) += 1;
        }

        match positions.get(&cleaned) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(cleaned.clone(), counts.len());
                counts.push((cleaned, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MOST_BOUGHT_LIMIT);

    tracing::debug!(
        records = records.len(),
        distinct = positions.len(),
        "analyzed shopping history"
    );

    ShoppingAnalysis {
        most_bought_items: counts,
        category_distribution,
        missing_essentials: find_missing_essentials(records),
    }
}

/// Essentials that no purchase name contains, in human-readable form.
pub fn find_missing_essentials(records: &[PurchaseRecord]) -> Vec<String> {
    let recent: Vec<String> = records.iter().map(|r| clean_item_name(&r.name)).collect();

    ESSENTIALS
        .iter()
        .filter(|essential| !recent.iter().any(|item| item.contains(*essential)))
        .map(|essential| essential.replace('_', " "))
        .collect()
}

/// Complements of what is on hand, then absent essentials; at most eight.
pub fn pantry_suggestions<S: AsRef<str>>(current_items: &[S]) -> Vec<Suggestion> {
    let current: Vec<String> = current_items
        .iter()
        .map(|item| clean_item_name(item.as_ref()))
        .collect();
    let has = |key: &str| current.iter().any(|c| c == key);

    let mut suggestions = Vec::new();

    for item in &current {
        for complement in complements_of(item) {
            if !has(complement) {
                suggestions.push(Suggestion::pantry(
                    complement,
                    format!("Great with {}", item.replace('_', " ")),
                ));
            }
        }
    }

    for essential in ESSENTIALS {
        if !has(essential) {
            suggestions.push(Suggestion::pantry(essential, "Pantry essential".to_string()));
        }
    }

    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}

/// Zeroed entry for every catalog item, grouped by category.
pub fn inventory_template(now: NaiveDateTime) -> InventoryTemplate {
    let categories = ANALYZER_CATEGORIES
        .iter()
        .map(|(category, items)| {
            let items = items
                .iter()
                .map(|item| {
                    (
                        item.replace('_', " "),
                        TemplateEntry {
                            quantity: 0,
                            unit: TEMPLATE_UNIT.to_string(),
                            expiry_date: None,
                            last_restocked: None,
                            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
                        },
                    )
                })
                .collect();
            (category.to_string(), TemplateCategory { items })
        })
        .collect();

    InventoryTemplate {
        last_updated: now,
        categories,
    }
}

pub fn inventory_template_json(now: NaiveDateTime) -> PantryResult<String> {
    serde_json::to_string_pretty(&inventory_template(now))
        .map_err(|e| PantryError::serialization(e.to_string()))
}

impl Pantry {
    /// Suggestions based on everything currently in stock.
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let on_hand: Vec<&str> = self
            .items()
            .filter(|item| item.quantity() > 0)
            .map(|item| item.name())
            .collect();
        pantry_suggestions(&on_hand)
    }
}
