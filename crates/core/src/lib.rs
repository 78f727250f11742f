//! `pantry-core`: shared building blocks for the pantry tracker.
//!
//! This crate contains **pure domain** primitives (no IO, no printing).

pub mod entity;
pub mod error;
pub mod id;
pub mod key;

pub use entity::Entity;
pub use error::{PantryError, PantryResult};
pub use id::GroceryItemId;
pub use key::ItemKey;
