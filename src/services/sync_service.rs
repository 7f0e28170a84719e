use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    config::settings::SyncSettings,
    models::locale_file::{LocaleFile, LocaleTree},
    repositories::locale_repository::{LocaleRepository, RepositoryError},
    services::translation_service::Translator,
    utils::{
        locale_utils::target_lang,
        tree_utils::{count_leaves, diff, leaf_text, merge},
    },
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FillStats {
    pub translated: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub locale: String,
    pub missing: usize,
    pub stats: FillStats,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub locale: String,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub files: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
}

impl SyncReport {
    pub fn translated(&self) -> usize {
        self.files.iter().map(|f| f.stats.translated).sum()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().map(|f| f.stats.failed).sum()
    }

    pub fn written(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }
}

pub struct SyncService<T: Translator> {
    pub repository: LocaleRepository,
    pub translator: Arc<T>,
    pub settings: SyncSettings,
}

impl<T: Translator> SyncService<T> {
    pub fn new(repository: LocaleRepository, translator: Arc<T>, settings: SyncSettings) -> Self {
        Self {
            repository,
            translator,
            settings,
        }
    }

    /// Processes every target file in the directory, one after the other.
    ///
    /// Fails only when the directory or the reference file cannot be used.
    /// A target that cannot be loaded or written is logged and recorded in
    /// [`SyncReport::skipped`].
    pub async fn run(&self) -> Result<SyncReport> {
        let set = self
            .repository
            .discover(&self.settings.reference_locale)
            .context("Failed to locate locale files")?;
        let reference = self
            .repository
            .load(&set.reference)
            .with_context(|| format!("Failed to load reference file {:?}", set.reference.path))?;

        info!(
            "Reference {} has {} keys, {} target file(s) to check",
            set.reference.file_name(),
            count_leaves(&reference),
            set.targets.len()
        );

        let mut report = SyncReport::default();
        for file in &set.targets {
            match self.sync_file(&reference, file).await {
                Ok(file_report) => report.files.push(file_report),
                Err(err) => {
                    error!("Skipping {}: {}", file.file_name(), err);
                    report.skipped.push(SkippedFile {
                        locale: file.locale.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Diff, fill, merge and save a single target file.
    pub async fn sync_file(
        &self,
        reference: &LocaleTree,
        file: &LocaleFile,
    ) -> Result<FileReport, RepositoryError> {
        let mut target = self.repository.load(file)?;
        let missing = diff(reference, &target);
        let missing_count = count_leaves(&missing);

        if missing.is_empty() {
            info!("{} is up to date", file.file_name());
            return Ok(FileReport {
                locale: file.locale.clone(),
                missing: 0,
                stats: FillStats::default(),
                written: false,
            });
        }

        info!("{}: {} missing key(s)", file.file_name(), missing_count);
        if self.settings.verbose {
            debug!("Missing in {}:\n{}", file.file_name(), pretty(&missing));
        }

        if self.settings.dry_run {
            return Ok(FileReport {
                locale: file.locale.clone(),
                missing: missing_count,
                stats: FillStats::default(),
                written: false,
            });
        }

        let (filled, stats) = self.fill(&missing, &file.locale).await;
        if self.settings.verbose {
            debug!("Translated for {}:\n{}", file.file_name(), pretty(&filled));
        }

        merge(&mut target, filled);
        self.repository.save(file, &target)?;

        info!(
            "Updated {}: {} translated, {} left untranslated",
            file.file_name(),
            stats.translated,
            stats.failed
        );

        Ok(FileReport {
            locale: file.locale.clone(),
            missing: missing_count,
            stats,
            written: true,
        })
    }

    /// Returns a copy of `missing` with every leaf translated into
    /// `target_locale`. Leaves whose translation fails keep their original
    /// value.
    pub async fn fill(
        &self,
        missing: &LocaleTree,
        target_locale: &str,
    ) -> (LocaleTree, FillStats) {
        let mut stats = FillStats::default();
        let filled = self
            .fill_tree(missing, target_lang(target_locale), &mut stats)
            .await;
        (filled, stats)
    }

    async fn fill_tree(
        &self,
        missing: &LocaleTree,
        lang: &str,
        stats: &mut FillStats,
    ) -> LocaleTree {
        let mut filled = LocaleTree::new();

        for (key, value) in missing {
            let new_value = match value {
                Value::Object(child) => {
                    Value::Object(Box::pin(self.fill_tree(child, lang, stats)).await)
                }
                leaf => self.translate_leaf(key, leaf, lang, stats).await,
            };
            filled.insert(key.clone(), new_value);
        }

        filled
    }

    async fn translate_leaf(
        &self,
        key: &str,
        leaf: &Value,
        lang: &str,
        stats: &mut FillStats,
    ) -> Value {
        let text = leaf_text(leaf);
        let result = self
            .translator
            .translate(&text, &self.settings.source_lang, lang)
            .await;

        let value = match result {
            Ok(translated) => {
                debug!("[{lang}] {key}: {text:?} -> {translated:?}");
                stats.translated += 1;
                Value::String(translated)
            }
            Err(err) => {
                warn!("[{lang}] {key}: keeping source text, translation failed: {err}");
                stats.failed += 1;
                leaf.clone()
            }
        };

        tokio::time::sleep(self.settings.throttle).await;
        value
    }
}

fn pretty(tree: &LocaleTree) -> String {
    serde_json::to_string_pretty(tree).unwrap_or_default()
}
