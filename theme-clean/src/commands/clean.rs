// theme-clean/src/commands/clean.rs
//
// USE CASE: Delete the previous build's assets before a fresh build.

use theme_clean_core::CleanupCoordinator;
use theme_clean_core::domain::HookContext;

use super::resolve_options;
use crate::cli::OptionArgs;

pub async fn execute(options: OptionArgs) -> anyhow::Result<()> {
    if let Err(e) = run(options).await {
        eprintln!("❌ Clean failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(options: OptionArgs) -> anyhow::Result<()> {
    let options = resolve_options(options)?;
    let mut coordinator = CleanupCoordinator::local(options);

    let report = coordinator.build_start(&HookContext::one_shot()).await?;

    // Skipped runs have already printed their warning
    if report.skipped.is_some() {
        return Ok(());
    }

    for path in &report.deleted {
        println!("   🗑️  Asset removed: {}", path.display());
    }
    println!(
        "✨ Clean finished: {} removed, {} already gone, {} failed",
        report.deleted.len(),
        report.already_gone.len(),
        report.failed.len()
    );
    Ok(())
}
