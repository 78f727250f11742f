//! Fixed demonstration sequence: stock a few staples, report, use some, report again.

use std::io::{self, Write};

use crate::console::PantryConsole;

pub fn run<W: Write>(console: &mut PantryConsole<W>) -> io::Result<()> {
    console.add_item("Rice", "grains", 5, "lbs")?;
    console.add_item("Pasta", "grains", 3, "boxes")?;
    console.add_item("Olive Oil", "oils_vinegars", 1, "bottle")?;
    console.add_item("Salt", "spices", 1, "container")?;
    console.add_item("Canned Tomatoes", "canned_goods", 4, "cans")?;

    console.display_inventory()?;
    console.generate_shopping_list()?;

    console.remove_item("Rice", 2)?;
    console.remove_item("Pasta", 3)?;

    console.line("")?;
    console.line("After using some items:")?;
    console.generate_shopping_list()?;

    Ok(())
}
