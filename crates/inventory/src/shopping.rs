//! Grocery shopping list: spoken-style add commands, store prices, product
//! search and smart suggestions.
//!
//! Independent of the pantry store. Names here are free text compared
//! case-insensitively, not normalized keys.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use pantry_core::{GroceryItemId, PantryError, PantryResult};

use crate::catalog::{KEYWORD_CATEGORIES, PAIRINGS, PRODUCTS, Product, SEASONAL, SUBSTITUTES};

const OTHER_CATEGORY: &str = "Other";

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Quantity and name read from a command such as `"two apples"` or `"3 bananas"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub quantity: u32,
    pub name: String,
}

/// Lowercase and trim, then read a leading number word (`one`..`ten`) or
/// leading digits. Without either the quantity is 1 and the whole text is the
/// name.
pub fn parse_command(command: &str) -> ParsedCommand {
    let cleaned = command.trim().to_lowercase();
    let (first, rest) = cleaned.split_once(' ').unwrap_or((cleaned.as_str(), ""));

    if let Some(&(_, quantity)) = NUMBER_WORDS.iter().find(|(word, _)| *word == first) {
        return ParsedCommand {
            quantity,
            name: rest.trim().to_string(),
        };
    }

    let digits_end = cleaned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cleaned.len());
    if digits_end > 0 {
        if let Ok(quantity) = cleaned[..digits_end].parse() {
            return ParsedCommand {
                quantity,
                name: cleaned[digits_end..].trim().to_string(),
            };
        }
    }

    ParsedCommand {
        quantity: 1,
        name: cleaned,
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Display category for a list entry: the first keyword contained in the name.
pub fn keyword_category(name: &str) -> &'static str {
    let name = name.to_lowercase();
    KEYWORD_CATEGORIES
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(OTHER_CATEGORY, |(_, category)| *category)
}

/// Store price for an exact (case-insensitive) product name.
pub fn item_price(name: &str) -> Option<u64> {
    PRODUCTS
        .iter()
        .find(|product| same_name(product.name, name))
        .map(|product| product.price)
}

/// One entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    id: GroceryItemId,
    name: String,
    quantity: u32,
    category: String,
    /// `None` when the product is not in the price list.
    price: Option<u64>,
    added_at: DateTime<Utc>,
    completed: bool,
}

impl GroceryItem {
    pub fn id(&self) -> GroceryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Option<u64> {
        self.price
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Unit price times quantity; unpriced entries cost nothing.
    pub fn line_cost(&self) -> u64 {
        self.price
            .unwrap_or(0)
            .saturating_mul(u64::from(self.quantity))
    }
}

/// Entries sharing one display category, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroceryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a GroceryItem>,
}

/// Ordered shopping list. Names are unique ignoring case; adding a listed
/// name raises its quantity instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add from a command like `"two apples"`. Returns the affected entry, or
    /// `None` when the command names no item.
    pub fn add_command(&mut self, command: &str) -> Option<GroceryItemId> {
        let ParsedCommand { quantity, name } = parse_command(command);
        if name.is_empty() {
            tracing::debug!(command, "command names no item");
            return None;
        }

        if let Some(id) = self.find_by_name(&name).map(GroceryItem::id) {
            self.increase_quantity(id, quantity);
            return Some(id);
        }

        let category = keyword_category(&name).to_string();
        let price = item_price(&name);
        let id = GroceryItemId::new();
        tracing::debug!(id = %id, name = %name, quantity, category = %category, "grocery item added");
        self.items.push(GroceryItem {
            id,
            name,
            quantity,
            category,
            price,
            added_at: Utc::now(),
            completed: false,
        });
        Some(id)
    }

    /// Delete every entry with this name (ignoring case). False if none matched.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| !same_name(&item.name, name));
        let removed = self.items.len() != before;
        tracing::debug!(name, removed, "grocery removal");
        removed
    }

    pub fn increase_quantity(&mut self, id: GroceryItemId, amount: u32) -> bool {
        self.update(id, |item| item.quantity = item.quantity.saturating_add(amount))
    }

    /// Lower the quantity, never below 1.
    pub fn decrease_quantity(&mut self, id: GroceryItemId, amount: u32) -> bool {
        self.update(id, |item| item.quantity = item.quantity.saturating_sub(amount).max(1))
    }

    pub fn toggle(&mut self, id: GroceryItemId) -> bool {
        self.update(id, |item| item.completed = !item.completed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn update(&mut self, id: GroceryItemId, f: impl FnOnce(&mut GroceryItem)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                f(item);
                true
            }
            None => {
                tracing::warn!(id = %id, "unknown grocery item");
                false
            }
        }
    }

    pub fn get(&self, id: GroceryItemId) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| same_name(&item.name, name))
    }

    pub fn items(&self) -> impl Iterator<Item = &GroceryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries grouped by category, groups in first-seen order.
    pub fn grouped(&self) -> Vec<GroceryGroup<'_>> {
        let mut groups: Vec<GroceryGroup<'_>> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(GroceryGroup {
                    category: &item.category,
                    items: vec![item],
                }),
            }
        }
        groups
    }

    pub fn total_cost(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |total, item| total.saturating_add(item.line_cost()))
    }
}

/// Filters pulled out of a free-text product search.
///
/// A price bound of zero counts as no bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// What is left after removing price phrases and the brand.
    pub text: String,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    /// Lowercase brand name.
    pub brand: Option<String>,
}

impl SearchQuery {
    /// Recognizes `under N`, `over N`, `between N and M` and any known brand.
    pub fn parse(query: &str) -> PantryResult<Self> {
        let mut text = query.trim().to_lowercase();
        let mut parsed = Self::default();

        if let Some(prices) = take_phrase(&mut text, r"under\s*(\d+)")? {
            parsed.max_price = prices.first().copied();
        }
        if let Some(prices) = take_phrase(&mut text, r"over\s*(\d+)")? {
            parsed.min_price = prices.first().copied();
        }
        if let Some(prices) = take_phrase(&mut text, r"between\s*(\d+)\s*and\s*(\d+)")? {
            parsed.min_price = prices.first().copied();
            parsed.max_price = prices.get(1).copied();
        }
        parsed.min_price = parsed.min_price.filter(|&p| p > 0);
        parsed.max_price = parsed.max_price.filter(|&p| p > 0);

        // Later brands in the price list win when several appear.
        let mut seen: Vec<String> = Vec::new();
        for product in PRODUCTS {
            let brand = product.brand.to_lowercase();
            if seen.contains(&brand) {
                continue;
            }
            if text.contains(&brand) {
                text = text.replacen(&brand, "", 1).trim().to_string();
                parsed.brand = Some(brand.clone());
            }
            seen.push(brand);
        }

        parsed.text = text;
        Ok(parsed)
    }

    pub fn matches(&self, product: &Product) -> bool {
        let name = product.name.to_lowercase();
        let brand = product.brand.to_lowercase();

        (name.contains(&self.text) || brand.contains(&self.text))
            && self.max_price.is_none_or(|max| product.price <= max)
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.brand.as_ref().is_none_or(|wanted| *wanted == brand)
    }
}

/// Remove the first match of `pattern` from `text`, returning its numeric captures.
fn take_phrase(text: &mut String, pattern: &str) -> PantryResult<Option<Vec<u64>>> {
    let re = Regex::new(pattern)
        .map_err(|e| PantryError::validation(format!("invalid search pattern: {e}")))?;
    let (phrase, prices) = {
        let Some(caps) = re.captures(text.as_str()) else {
            return Ok(None);
        };
        let prices = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|e| PantryError::validation(format!("price {:?}: {e}", m.as_str())))
            })
            .collect::<PantryResult<Vec<_>>>()?;
        (caps[0].to_string(), prices)
    };

    *text = text.replacen(&phrase, "", 1).trim().to_string();
    Ok(Some(prices))
}

/// Products matching a query such as `"amul under 50"`, in price-list order.
pub fn search_items(query: &str) -> PantryResult<Vec<Product>> {
    let parsed = SearchQuery::parse(query)?;
    let results: Vec<Product> = PRODUCTS
        .iter()
        .filter(|product| parsed.matches(product))
        .copied()
        .collect();
    tracing::debug!(query, text = %parsed.text, results = results.len(), "product search");
    Ok(results)
}

/// Pairings for what was bought, then seasonal picks, then substitutes.
/// Duplicates and anything already in `history` are dropped.
pub fn smart_suggestions<S: AsRef<str>>(history: &[S]) -> Vec<String> {
    let history: Vec<&str> = history.iter().map(AsRef::as_ref).collect();

    let mut suggestions: Vec<&str> = PAIRINGS
        .iter()
        .filter(|(item, _)| history.contains(item))
        .map(|(_, pairing)| *pairing)
        .collect();
    suggestions.extend(SEASONAL.iter().copied());
    suggestions.extend(history.iter().filter_map(|bought| {
        SUBSTITUTES
            .iter()
            .find(|(item, _)| item == bought)
            .map(|(_, substitute)| *substitute)
    }));

    let mut seen = HashSet::new();
    suggestions
        .into_iter()
        .filter(|s| seen.insert(*s))
        .filter(|s| !history.contains(s))
        .map(str::to_string)
        .collect()
}
