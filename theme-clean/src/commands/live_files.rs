// theme-clean/src/commands/live_files.rs
//
// USE CASE: Show which files a manifest keeps alive.

use std::path::PathBuf;

use anyhow::Context;
use theme_clean_core::{Manifest, compute_live_files};

pub fn execute(manifest_path: PathBuf, json: bool) -> anyhow::Result<()> {
    if let Err(e) = run(manifest_path, json) {
        eprintln!("❌ Live-files failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run(manifest_path: PathBuf, json: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read manifest at {:?}", manifest_path))?;
    let manifest = Manifest::from_json(&text, &manifest_path.display().to_string())?;

    let files = compute_live_files(&manifest);

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in files {
            println!("{}", file);
        }
    }
    Ok(())
}
