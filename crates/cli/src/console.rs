use std::io::{self, Write};

use pantry_inventory::{InventoryReport, Pantry, ShoppingList, StockChange};

/// A pantry bound to an output stream.
///
/// Each operation performs the store call and writes its confirmation or report
/// text. Only write failures are returned; the store operations themselves
/// cannot fail.
#[derive(Debug)]
pub struct PantryConsole<W: Write> {
    pantry: Pantry,
    out: W,
}

impl<W: Write> PantryConsole<W> {
    pub fn new(out: W) -> Self {
        Self::with_pantry(Pantry::new(), out)
    }

    pub fn with_pantry(pantry: Pantry, out: W) -> Self {
        Self { pantry, out }
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn into_parts(self) -> (Pantry, W) {
        (self.pantry, self.out)
    }

    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        unit: &str,
    ) -> io::Result<StockChange> {
        let change = self.pantry.add_item(name, category, quantity, unit);
        writeln!(self.out, "{change}")?;
        Ok(change)
    }

    pub fn remove_item(&mut self, name: &str, quantity: i64) -> io::Result<StockChange> {
        let change = self.pantry.remove_item(name, quantity);
        writeln!(self.out, "{change}")?;
        Ok(change)
    }

    pub fn generate_shopping_list(&mut self) -> io::Result<ShoppingList> {
        let list = self.pantry.shopping_list();
        write!(self.out, "{list}")?;
        Ok(list)
    }

    pub fn display_inventory(&mut self) -> io::Result<InventoryReport> {
        let report = self.pantry.inventory_report();
        write!(self.out, "{report}")?;
        Ok(report)
    }

    /// Free-form line (headings between report sections).
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }
}
