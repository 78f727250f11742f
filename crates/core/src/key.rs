//! Normalized item keys.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::PantryError;

/// Identity of a pantry item: the display name lowercased, spaces replaced by
/// underscores.
///
/// `"Olive Oil"`, `"olive oil"` and `"OLIVE OIL"` all map to `olive_oil`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(String);

impl ItemKey {
    /// Derive the key for a display name. Never fails; any text is accepted.
    pub fn normalize(name: &str) -> Self {
        Self(name.to_lowercase().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form (underscores back to spaces), e.g. `peanut butter`.
    pub fn readable(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ItemKey> for String {
    fn from(value: ItemKey) -> Self {
        value.0
    }
}

/// Parse text that is *already* in normalized form (e.g. `"peanut_butter"`).
///
/// Use [`ItemKey::normalize`] for display names.
impl FromStr for ItemKey {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PantryError::validation("item key cannot be empty"));
        }
        if s.contains(' ') {
            return Err(PantryError::validation(format!(
                "item key must not contain spaces: {s:?}"
            )));
        }
        if s.chars().any(char::is_uppercase) {
            return Err(PantryError::validation(format!(
                "item key must be lowercase: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_lowercases_and_replaces_spaces() {
        assert_eq!(ItemKey::normalize("Olive Oil").as_str(), "olive_oil");
        assert_eq!(ItemKey::normalize("Canned Tomatoes").as_str(), "canned_tomatoes");
        assert_eq!(ItemKey::normalize("rice").as_str(), "rice");
    }

    #[test]
    fn equivalent_display_names_share_a_key() {
        assert_eq!(ItemKey::normalize("olive oil"), ItemKey::normalize("OLIVE OIL"));
    }

    #[test]
    fn readable_replaces_underscores() {
        let key: ItemKey = "peanut_butter".parse().unwrap();
        assert_eq!(key.readable(), "peanut butter");
    }

    #[test]
    fn parse_rejects_non_normalized_text() {
        assert!(matches!("".parse::<ItemKey>(), Err(PantryError::Validation(_))));
        assert!(matches!("olive oil".parse::<ItemKey>(), Err(PantryError::Validation(_))));
        assert!(matches!("Rice".parse::<ItemKey>(), Err(PantryError::Validation(_))));
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = ItemKey::normalize("Soy Sauce");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"soy_sauce\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: normalizing an already-normalized key is a no-op.
        #[test]
        fn normalize_is_idempotent(name in "[A-Za-z ]{0,24}") {
            let once = ItemKey::normalize(&name);
            let twice = ItemKey::normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }
    }
}
