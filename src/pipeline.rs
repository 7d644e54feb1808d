//! Composes one full run: load catalog → fetch and extract → detect →
//! notify → persist.

use scraper::Html;
use tracing::{error, info, warn};

use crate::catalog::CatalogStore;
use crate::detect::select_noteworthy;
use crate::error::Error;
use crate::extract::extract;
use crate::fetch::{build_search_url, PageFetcher};
use crate::notify::Notifier;
use crate::types::Listing;

pub struct SearchRequest {
    pub region: String,
    pub query: Vec<String>,
    /// Strict price ceiling for notifications; 0 disables it.
    pub max_price: i64,
}

pub struct PipelineResult {
    pub noteworthy: Vec<Listing>,
    pub persisted: Vec<Listing>,
}

pub struct Pipeline {
    base_url: String,
    store: CatalogStore,
    fetcher: Box<dyn PageFetcher>,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl Pipeline {
    pub fn new(
        base_url: String,
        store: CatalogStore,
        fetcher: Box<dyn PageFetcher>,
        notifiers: Vec<Box<dyn Notifier>>,
    ) -> Self {
        Self {
            base_url,
            store,
            fetcher,
            notifiers,
        }
    }

    /// One synchronous run over the configured catalog location. Catalog and
    /// fetch failures abort before anything is persisted; per-node extraction
    /// problems and notifier failures do not.
    pub async fn run(&self, request: &SearchRequest) -> Result<PipelineResult, Error> {
        let previous = self.store.load()?;

        let url = build_search_url(&self.base_url, &request.region, &request.query);
        info!("fetching {}", url);
        let body = self.fetcher.fetch(&url).await?;

        // Html is not Send; keep it out of the await landscape below.
        let extraction = {
            let document = Html::parse_document(&body);
            extract(&document, &self.base_url)
        };
        for e in &extraction.errors {
            warn!("listing node skipped: {}", e);
        }
        info!(
            "extracted {} listings, {} nodes skipped",
            extraction.listings.len(),
            extraction.errors.len()
        );

        let noteworthy = select_noteworthy(&extraction.listings, &previous, request.max_price);

        if noteworthy.is_empty() {
            info!("no new offers");
        } else {
            for notifier in &self.notifiers {
                if let Err(e) = notifier.notify(&noteworthy).await {
                    error!("{}", e);
                }
            }
        }

        // Full replace, never a merge: ads gone from the page drop out of the
        // snapshot. Runs whether or not anything was noteworthy.
        self.store.save(&extraction.listings)?;

        Ok(PipelineResult {
            noteworthy,
            persisted: extraction.listings,
        })
    }
}
