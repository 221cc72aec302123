// theme-clean/src/commands/reconcile.rs
//
// USE CASE: Reconcile the assets folder against a freshly built manifest.
// The manifest on disk is the previous build, `current` plays the bundle.

use std::path::PathBuf;

use anyhow::Context;
use theme_clean_core::CleanupCoordinator;
use theme_clean_core::application::BaselineLoad;
use theme_clean_core::domain::{HookContext, OutputArtifact, OutputBundle};

use super::resolve_options;
use crate::cli::OptionArgs;

pub async fn execute(current: PathBuf, options: OptionArgs) -> anyhow::Result<()> {
    if let Err(e) = run(current, options).await {
        eprintln!("❌ Reconcile failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(current: PathBuf, options: OptionArgs) -> anyhow::Result<()> {
    let options = resolve_options(options)?;
    let manifest_text = tokio::fs::read_to_string(&current)
        .await
        .with_context(|| format!("Failed to read manifest at {:?}", current))?;

    let mut coordinator = CleanupCoordinator::local(options);

    // Nothing to diff against: the warning has already been printed.
    if let BaselineLoad::Skipped(_) = coordinator.load_baseline().await? {
        return Ok(());
    }

    let manifest_file_name = coordinator.options().manifest_file_name.clone();
    let bundle = OutputBundle::from([(
        manifest_file_name.clone(),
        OutputArtifact::text_asset(manifest_file_name, manifest_text),
    )]);

    let report = coordinator
        .write_bundle(&HookContext::one_shot(), &bundle)
        .await?;

    for path in &report.deleted {
        println!("   🗑️  Stale asset removed: {}", path.display());
    }
    println!(
        "✨ Reconcile finished: {} removed, {} live",
        report.deleted.len(),
        coordinator.previous_live_files().len()
    );
    Ok(())
}
