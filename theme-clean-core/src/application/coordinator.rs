// theme-clean-core/src/application/coordinator.rs

use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::application::delete::{DeleteOutcome, remove_assets};
use crate::domain::bundle::{HookContext, OutputBundle};
use crate::domain::manifest::{LiveFileSet, Manifest, compute_live_files, live_basenames};
use crate::error::ThemeCleanError;
use crate::infrastructure::config::ResolvedOptions;
use crate::infrastructure::fs::LocalAssetStore;
use crate::infrastructure::reporter::ConsoleReporter;
use crate::ports::asset_store::AssetStore;
use crate::ports::reporter::{CleanWarning, Reporter};

/// Why a hook returned without deleting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingAssetsDir,
    MissingManifest,
    NoManifestInBundle,
    /// Build start ran before in this watch session.
    WatchModeRerun,
    /// First bundle of a watch session. Its live set becomes the baseline.
    WatchModeFirstBundle,
}

/// Summary of one hook invocation. Purely informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub deleted: Vec<PathBuf>,
    pub already_gone: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub skipped: Option<SkipReason>,
}

impl CleanReport {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }

    fn from_outcomes(outcomes: Vec<(PathBuf, DeleteOutcome)>) -> Self {
        let mut report = Self::default();
        for (location, outcome) in outcomes {
            match outcome {
                DeleteOutcome::Deleted => report.deleted.push(location),
                DeleteOutcome::AlreadyGone => report.already_gone.push(location),
                DeleteOutcome::Failed => report.failed.push(location),
            }
        }
        report.deleted.sort();
        report.already_gone.sort();
        report.failed.sort();
        report
    }
}

/// Result of reading the manifest left on disk by the previous build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaselineLoad {
    Loaded { assets_dir: PathBuf },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CoordinatorState {
    build_start_first_run: bool,
    write_bundle_first_run: bool,
    previous_live_files: LiveFileSet,
}

impl Default for CoordinatorState {
    fn default() -> Self {
        Self {
            build_start_first_run: true,
            write_bundle_first_run: true,
            previous_live_files: LiveFileSet::new(),
        }
    }
}

/// One plugin instance: owns the first-run flags and the previous live-file set.
///
/// The host calls [`build_start`](Self::build_start) before compiling and
/// [`write_bundle`](Self::write_bundle) once output is finalized. Both take
/// `&mut self`, so one instance never runs two hooks at once.
pub struct CleanupCoordinator {
    options: ResolvedOptions,
    store: Arc<dyn AssetStore>,
    reporter: Arc<dyn Reporter>,
    state: CoordinatorState,
}

impl CleanupCoordinator {
    pub fn new(
        options: ResolvedOptions,
        store: Arc<dyn AssetStore>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            options,
            store,
            reporter,
            state: CoordinatorState::default(),
        }
    }

    /// Local disk, warnings on stderr.
    pub fn local(options: ResolvedOptions) -> Self {
        Self::new(options, Arc::new(LocalAssetStore), Arc::new(ConsoleReporter))
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn previous_live_files(&self) -> &LiveFileSet {
        &self.state.previous_live_files
    }

    /// Reads the on-disk manifest and makes its live set the baseline.
    /// Missing prerequisites are warned about and reported as skipped.
    #[instrument(skip(self))]
    pub async fn load_baseline(&mut self) -> Result<BaselineLoad, ThemeCleanError> {
        let assets_dir = self.options.assets_dir()?;

        if !self.store.exists(&assets_dir).await {
            self.reporter
                .warn(CleanWarning::MissingAssetsDir { assets_dir });
            return Ok(BaselineLoad::Skipped(SkipReason::MissingAssetsDir));
        }

        let manifest_path = assets_dir.join(&self.options.manifest_file_name);
        if !self.store.exists(&manifest_path).await {
            self.reporter.warn(CleanWarning::MissingManifest {
                manifest_file_name: self.options.manifest_file_name.clone(),
                assets_dir,
            });
            return Ok(BaselineLoad::Skipped(SkipReason::MissingManifest));
        }

        let text = self.store.read_to_string(&manifest_path).await?;
        let manifest = Manifest::from_json(&text, &manifest_path.display().to_string())?;
        self.state.previous_live_files = live_basenames(compute_live_files(&manifest));

        debug!(
            path = ?manifest_path,
            live = self.state.previous_live_files.len(),
            "Baseline loaded from disk"
        );
        Ok(BaselineLoad::Loaded { assets_dir })
    }

    /// Deletes what the previous build's manifest listed, before new output lands.
    ///
    /// In watch mode only the first invocation deletes; later ones just
    /// refresh the baseline.
    #[instrument(skip(self), fields(watch = ctx.watch_mode))]
    pub async fn build_start(&mut self, ctx: &HookContext) -> Result<CleanReport, ThemeCleanError> {
        let assets_dir = match self.load_baseline().await? {
            BaselineLoad::Loaded { assets_dir } => assets_dir,
            BaselineLoad::Skipped(reason) => return Ok(CleanReport::skipped(reason)),
        };

        if ctx.watch_mode && !self.state.build_start_first_run {
            debug!("Watch rebuild, previous assets already cleaned");
            return Ok(CleanReport::skipped(SkipReason::WatchModeRerun));
        }

        let outcomes = remove_assets(
            self.store.as_ref(),
            self.reporter.as_ref(),
            &assets_dir,
            &self.state.previous_live_files,
        )
        .await;
        self.state.build_start_first_run = false;

        let report = CleanReport::from_outcomes(outcomes);
        info!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "🧹 Previous build assets cleaned"
        );
        Ok(report)
    }

    /// Deletes assets live in the previous build but absent from this bundle's manifest.
    #[instrument(skip(self, bundle), fields(watch = ctx.watch_mode))]
    pub async fn write_bundle(
        &mut self,
        ctx: &HookContext,
        bundle: &OutputBundle,
    ) -> Result<CleanReport, ThemeCleanError> {
        let Some(artifact) = bundle.get(&self.options.manifest_file_name) else {
            debug!(manifest = %self.options.manifest_file_name, "No manifest in bundle");
            return Ok(CleanReport::skipped(SkipReason::NoManifestInBundle));
        };
        let Some(source) = artifact.source() else {
            debug!(artifact = artifact.file_name(), "Manifest artifact has no source");
            return Ok(CleanReport::skipped(SkipReason::NoManifestInBundle));
        };

        let first_run = std::mem::replace(&mut self.state.write_bundle_first_run, false);
        let location = format!("bundle:{}", self.options.manifest_file_name);

        if ctx.watch_mode && first_run {
            let manifest = Manifest::from_json(&source.as_text(), &location)?;
            self.state.previous_live_files = live_basenames(compute_live_files(&manifest));
            debug!(
                live = self.state.previous_live_files.len(),
                "First watch bundle, baseline recorded"
            );
            return Ok(CleanReport::skipped(SkipReason::WatchModeFirstBundle));
        }

        let assets_dir = self.options.assets_dir()?;
        if !self.store.exists(&assets_dir).await {
            self.reporter
                .warn(CleanWarning::MissingAssetsDir { assets_dir });
            return Ok(CleanReport::skipped(SkipReason::MissingAssetsDir));
        }

        let manifest = Manifest::from_json(&source.as_text(), &location)?;
        let current = live_basenames(compute_live_files(&manifest));

        let outcomes = remove_assets(
            self.store.as_ref(),
            self.reporter.as_ref(),
            &assets_dir,
            self.state.previous_live_files.difference(&current),
        )
        .await;
        self.state.previous_live_files = current;

        let report = CleanReport::from_outcomes(outcomes);
        info!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            live = self.state.previous_live_files.len(),
            "♻️  Stale assets reconciled"
        );
        Ok(report)
    }
}
