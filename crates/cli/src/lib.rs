//! Console front end for the pantry tracker.

pub mod console;
pub mod demo;

pub use console::PantryConsole;
