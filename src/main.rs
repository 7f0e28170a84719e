use anyhow::{Result, bail};
use clap::Parser;
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use std::sync::Arc;

use locale_sync::{
    config::settings::{Cli, Settings},
    repositories::locale_repository::LocaleRepository,
    services::{sync_service::SyncService, translation_service::LibreTranslateClient},
};

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let settings = Settings::from(cli);
    info!(
        "Syncing {:?} against '{}' using {}",
        settings.dir, settings.sync.reference_locale, settings.translator.endpoint
    );

    let service = SyncService::new(
        LocaleRepository::new(&settings.dir),
        Arc::new(LibreTranslateClient::new(settings.translator.clone())),
        settings.sync.clone(),
    );

    let report = service.run().await?;

    info!(
        "Done: {} file(s) updated, {} key(s) translated, {} left untranslated",
        report.written(),
        report.translated(),
        report.failed()
    );
    if settings.sync.dry_run {
        for file in report.files.iter().filter(|f| f.missing > 0) {
            info!("[dry run] {} would receive {} key(s)", file.locale, file.missing);
        }
    }

    if !report.skipped.is_empty() {
        for skipped in &report.skipped {
            warn!("{} was skipped: {}", skipped.locale, skipped.reason);
        }
        bail!("{} locale file(s) could not be processed", report.skipped.len());
    }

    Ok(())
}
