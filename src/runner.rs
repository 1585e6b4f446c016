use anyhow::Result;
use camino::Utf8Path;

use crate::cli::Cli;
use crate::layout;
use crate::materialize;

const BASE: &str = ".";

pub fn run(_cli: Cli) -> Result<()> {
    let layout = layout::default_layout()?;

    println!("📁 Running structure check in current repository...\n");
    let actions = materialize::materialize_with(Utf8Path::new(BASE), &layout, |action| {
        println!("{action}");
    })?;
    println!("\n✅ Structure creation complete.");

    let skipped = actions.iter().filter(|action| action.is_skipped()).count();
    tracing::info!(
        created = actions.len() - skipped,
        skipped,
        "layout materialized"
    );
    Ok(())
}
