//! Generated identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PantryError;

/// Identifier of a shopping-list entry.
///
/// Unlike [`ItemKey`](crate::ItemKey) this is not derived from the name; the
/// list matches names separately.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryItemId(Uuid);

impl GroceryItemId {
    /// Uses UUIDv7 (time-ordered). Prefer `from_uuid` in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GroceryItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for GroceryItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for GroceryItemId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for GroceryItemId {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid =
            Uuid::from_str(s).map_err(|e| PantryError::validation(format!("GroceryItemId: {e}")))?;
        Ok(Self(uuid))
    }
}
