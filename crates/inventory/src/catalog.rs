//! Built-in reference tables.
//!
//! The store never validates an item's category or name against these; the
//! reports, the analyzer and the shopping list read them.

use serde::Serialize;

/// Category name → canonical item keys, in a fixed order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "grains",
        &["rice", "pasta", "oats", "quinoa", "barley", "couscous", "bulgur"],
    ),
    (
        "spices",
        &[
            "salt",
            "black_pepper",
            "garlic_powder",
            "onion_powder",
            "paprika",
            "cumin",
            "oregano",
            "basil",
            "thyme",
            "rosemary",
            "cinnamon",
        ],
    ),
    (
        "oils_vinegars",
        &["olive_oil", "vegetable_oil", "coconut_oil", "vinegar", "balsamic_vinegar"],
    ),
    (
        "canned_goods",
        &[
            "canned_tomatoes",
            "tomato_sauce",
            "canned_beans",
            "chicken_broth",
            "coconut_milk",
            "canned_corn",
            "canned_tuna",
        ],
    ),
    (
        "baking",
        &[
            "flour",
            "sugar",
            "brown_sugar",
            "baking_powder",
            "baking_soda",
            "vanilla_extract",
            "cocoa_powder",
            "chocolate_chips",
        ],
    ),
    (
        "condiments",
        &[
            "soy_sauce",
            "hot_sauce",
            "ketchup",
            "mustard",
            "mayonnaise",
            "honey",
            "maple_syrup",
            "worcestershire_sauce",
        ],
    ),
    (
        "nuts_seeds",
        &[
            "almonds",
            "walnuts",
            "peanuts",
            "cashews",
            "chia_seeds",
            "sunflower_seeds",
            "pumpkin_seeds",
            "flax_seeds",
        ],
    ),
];

/// Items the missing-essentials report always checks for, already normalized.
pub const ESSENTIALS: &[&str] = &[
    "rice",
    "pasta",
    "olive_oil",
    "salt",
    "black_pepper",
    "garlic_powder",
    "flour",
    "sugar",
    "canned_tomatoes",
    "chicken_broth",
    "soy_sauce",
    "honey",
    "oats",
    "peanut_butter",
    "canned_beans",
];

/// The analyzer's own category table.
///
/// Broader than [`CATEGORIES`]: it has `dried_goods` (so `peanut_butter`
/// categorizes), a shorter spice list with plain `pepper`, and shorter
/// canned/baking/condiment/nut lists.
pub const ANALYZER_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "grains",
        &["rice", "pasta", "oats", "quinoa", "barley", "couscous", "bulgur"],
    ),
    (
        "spices",
        &[
            "salt",
            "pepper",
            "garlic_powder",
            "onion_powder",
            "paprika",
            "cumin",
            "oregano",
            "basil",
        ],
    ),
    (
        "oils_vinegars",
        &["olive_oil", "vegetable_oil", "coconut_oil", "vinegar", "balsamic_vinegar"],
    ),
    (
        "canned_goods",
        &[
            "canned_tomatoes",
            "tomato_sauce",
            "canned_beans",
            "chicken_broth",
            "coconut_milk",
        ],
    ),
    (
        "baking",
        &[
            "flour",
            "sugar",
            "baking_powder",
            "baking_soda",
            "vanilla_extract",
            "cocoa_powder",
        ],
    ),
    (
        "condiments",
        &["soy_sauce", "hot_sauce", "ketchup", "mustard", "mayonnaise", "honey"],
    ),
    (
        "nuts_seeds",
        &["almonds", "walnuts", "peanuts", "cashews", "chia_seeds", "sunflower_seeds"],
    ),
    (
        "dried_goods",
        &["raisins", "dates", "dried_cranberries", "peanut_butter", "jam"],
    ),
];

/// Items that go well with a given item (used by the suggestion engine).
pub const COMPLEMENTS: &[(&str, &[&str])] = &[
    ("pasta", &["tomato_sauce", "parmesan", "olive_oil"]),
    ("rice", &["soy_sauce", "sesame_oil", "garlic"]),
    ("oats", &["honey", "cinnamon", "dried_cranberries"]),
    ("flour", &["baking_powder", "vanilla_extract", "sugar"]),
    ("chicken_broth", &["rice", "pasta", "vegetables"]),
    ("canned_tomatoes", &["basil", "oregano", "garlic_powder"]),
];

pub fn complements_of(key: &str) -> &'static [&'static str] {
    COMPLEMENTS
        .iter()
        .find(|(item, _)| *item == key)
        .map(|(_, complements)| *complements)
        .unwrap_or(&[])
}

/// Shopping-list keyword → display category. The first keyword contained in
/// an item name wins; anything else is `Other`.
pub const KEYWORD_CATEGORIES: &[(&str, &str)] = &[
    ("apple", "Fruits"),
    ("banana", "Fruits"),
    ("orange", "Fruits"),
    ("grapes", "Fruits"),
    ("mango", "Fruits"),
    ("watermelon", "Fruits"),
    ("strawberries", "Fruits"),
    ("cherries", "Fruits"),
    ("pineapple", "Fruits"),
    ("potato", "Vegetables"),
    ("onion", "Vegetables"),
    ("tomato", "Vegetables"),
    ("carrot", "Vegetables"),
    ("spinach", "Vegetables"),
    ("broccoli", "Vegetables"),
    ("cucumber", "Vegetables"),
    ("milk", "Dairy"),
    ("cheese", "Dairy"),
    ("butter", "Dairy"),
    ("yogurt", "Dairy"),
    ("chips", "Snacks"),
    ("cookies", "Snacks"),
    ("nuts", "Snacks"),
    ("bread", "Bakery"),
    ("cake", "Bakery"),
    ("muffins", "Bakery"),
    ("rice", "Grains"),
    ("pasta", "Grains"),
    ("flour", "Grains"),
    ("sugar", "Pantry"),
    ("salt", "Pantry"),
    ("oil", "Pantry"),
    ("ketchup", "Pantry"),
    ("honey", "Pantry"),
    ("soap", "Household"),
    ("toothpaste", "Personal Care"),
    ("shampoo", "Personal Care"),
];

/// A priced store product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub brand: &'static str,
    /// Whole currency units.
    pub price: u64,
}

const fn product(name: &'static str, brand: &'static str, price: u64) -> Product {
    Product { name, brand, price }
}

/// Store price list used by search and by the shopping list's cost total.
pub const PRODUCTS: &[Product] = &[
    // Fruits
    product("Apple", "Organic", 100),
    product("Banana", "Fresh", 40),
    product("Mango", "Local", 120),
    product("Orange", "Imported", 90),
    product("Grapes", "Green", 80),
    product("Strawberries", "Fresh", 150),
    product("Cherries", "Organic", 200),
    product("Pineapple", "Queen", 110),
    product("Watermelon", "Sweet", 70),
    // Vegetables
    product("Potato", "Local", 30),
    product("Onion", "Nashik", 40),
    product("Tomato", "Desi", 50),
    product("Carrot", "Organic", 60),
    product("Broccoli", "Fresh", 80),
    product("Spinach", "Organic", 25),
    product("Cucumber", "Farm Fresh", 35),
    // Grains and staples
    product("Rice", "Basmati", 200),
    product("Brown Rice", "Organic", 250),
    product("Wheat Flour", "Aashirvaad", 220),
    product("Pasta", "Local", 90),
    product("Sugar", "Refined", 50),
    product("Jaggery", "Organic", 70),
    product("Salt", "Tata", 20),
    product("Olive Oil", "Figaro", 450),
    product("Vegetable Oil", "Fortune", 150),
    // Dairy
    product("Milk", "Amul", 30),
    product("Almond Milk", "So Good", 120),
    product("Butter", "Amul", 55),
    product("Margarine", "Nutralite", 60),
    product("Cheese", "Britannia", 80),
    product("Yogurt", "Nestle", 40),
    // Snacks
    product("Cookies", "Britannia", 50),
    product("Chips", "Lays", 20),
    product("Baked Chips", "Lays", 30),
    product("Salsa", "Doritos", 100),
    product("Nuts", "Happilo", 300),
    // Bakery
    product("Bread", "Modern", 40),
    product("Brown Bread", "Britannia", 50),
    // Condiments
    product("Pasta Sauce", "Barilla", 180),
    product("Ketchup", "Kissan", 90),
    product("Honey", "Dabur", 150),
    // Personal care
    product("Toothpaste", "Colgate", 40),
    product("Soap", "Dove", 45),
    product("Shampoo", "Head & Shoulders", 180),
];

/// History item → something usually bought with it.
pub const PAIRINGS: &[(&str, &str)] = &[
    ("bread", "butter"),
    ("milk", "cookies"),
    ("pasta", "pasta sauce"),
    ("chips", "salsa"),
];

pub const SEASONAL: &[&str] = &[
    "mango",
    "orange",
    "watermelon",
    "grapes",
    "apple",
    "strawberries",
    "cherries",
];

/// History item → healthier or cheaper alternative.
pub const SUBSTITUTES: &[(&str, &str)] = &[
    ("milk", "almond milk"),
    ("butter", "margarine"),
    ("bread", "brown bread"),
    ("sugar", "jaggery"),
    ("chips", "baked chips"),
    ("white rice", "brown rice"),
];
