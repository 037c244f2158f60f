//! Inject command: Plan documentation blocks, then preview or write them

use anyhow::Result;
use handoff_core::pipeline;
use handoff_core::report::{apply, render};
use tracing::info;

use super::types::InjectArgs;

/// Run the inject-docs command
///
/// # Errors
/// Returns an error if the pipeline fails or a file cannot be written.
pub async fn run(args: &InjectArgs) -> Result<()> {
    let options = args.to_options();
    info!("Injecting documentation under {}", options.root.display());

    let outcome = pipeline::run(&options).await?;

    if !outcome.unsaved.is_empty() {
        eprintln!("Some files appear to be unsaved or empty:");
        for path in &outcome.unsaved {
            eprintln!("  - {}", path.display());
        }
        eprintln!("Save your files in the editor before running inject-docs.");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    if outcome.is_empty() {
        if !args.json {
            println!("No documentation to inject; every element is already documented.");
        }
        return Ok(());
    }

    if options.dry_run {
        if !args.json {
            println!("{}", render(&outcome.results));
        }
        return Ok(());
    }

    let written = apply(&outcome.results).await?;
    if !args.json {
        println!(
            "Added {} documentation blocks to {} files",
            outcome.block_count(),
            written.len()
        );
    }

    Ok(())
}
