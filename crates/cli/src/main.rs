use std::io;

use anyhow::Context;

use pantry_cli::{PantryConsole, demo};

fn main() -> anyhow::Result<()> {
    pantry_observability::init();

    let stdout = io::stdout();
    let mut console = PantryConsole::new(stdout.lock());

    demo::run(&mut console).context("failed to write demo output")?;

    tracing::info!(items = console.pantry().len(), "demo finished");
    Ok(())
}
