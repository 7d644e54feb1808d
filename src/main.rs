use std::fs;
use std::path::PathBuf;

use argh::FromArgs;
use color_eyre::Report;
use tracing::info;

use avito_notifier::catalog::CatalogStore;
use avito_notifier::configuration::get_configuration;
use avito_notifier::fetch::HttpFetcher;
use avito_notifier::notify::{ConsoleNotifier, EmailNotifier, Notifier};
use avito_notifier::pipeline::{Pipeline, SearchRequest};
use avito_notifier::telemetry::init_telemetry;

const CATALOG_FILE_NAME: &str = "avito-notifier.json";

#[derive(FromArgs)]
/// Watch a marketplace search and report new or discounted listings.
struct AppParams {
    /// region to search in
    #[argh(option, short = 'r', default = "String::from(\"moskva\")")]
    region: String,

    /// only report listings priced strictly below this value (0 = no limit)
    #[argh(option, short = 'p', default = "0")]
    price: i64,

    /// file to store the results
    #[argh(option, short = 'f')]
    file: Option<String>,

    /// search terms
    #[argh(positional)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    init_telemetry()?;

    // Read configuration
    let configuration = get_configuration().expect("Failed to read configuration file");

    // Argument parsing
    let params: AppParams = argh::from_env();

    let catalog_path = resolve_catalog_path(params.file)?;

    let mut notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(ConsoleNotifier)];
    if let Some(email) = configuration.email {
        notifiers.push(Box::new(EmailNotifier::new(email)));
    }

    let pipeline = Pipeline::new(
        configuration.marketplace.base_url,
        CatalogStore::new(catalog_path),
        Box::new(HttpFetcher::new()),
        notifiers,
    );

    let request = SearchRequest {
        region: params.region,
        query: params.query,
        max_price: params.price,
    };

    let result = pipeline.run(&request).await?;
    info!(
        "run finished: {} noteworthy, {} persisted",
        result.noteworthy.len(),
        result.persisted.len()
    );

    Ok(())
}

/// An explicit --file wins; otherwise the snapshot lives under
/// $HOME/.config/avito-notifier/ (created if needed), with /tmp as the last
/// resort when HOME is unset.
fn resolve_catalog_path(file: Option<String>) -> Result<PathBuf, Report> {
    if let Some(file) = file {
        return Ok(PathBuf::from(file));
    }

    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => {
            let dir = PathBuf::from(home).join(".config").join("avito-notifier");
            fs::create_dir_all(&dir)?;
            Ok(dir.join(CATALOG_FILE_NAME))
        }
        _ => Ok(PathBuf::from("/tmp").join(CATALOG_FILE_NAME)),
    }
}
