use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::error::{Result, ScrapeError};
use crate::extract;
use crate::fetch::{Fetch, HttpFetcher};
use crate::fields::{build_candidate, ColumnMap};
use crate::registry::{self, Registry};
use crate::resolver::IdentityResolver;
use crate::sailor::Sailor;
use crate::source::Source;

/// Owns the two registries and the fetcher, and drives one worker task per
/// source. Lifecycle: create, add sources, run (spawns and joins all
/// workers), read the sailor registry, drop.
pub struct Pipeline {
    fetcher: Arc<dyn Fetch>,
    sources: Arc<Registry<Source>>,
    sailors: Arc<Registry<Sailor>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            sources: Arc::new(Registry::new()),
            sailors: Arc::new(Registry::new()),
        }
    }

    /// Registers a source, assigning the next sequential id.
    pub fn add_source(&self, url: &str) -> Source {
        self.sources.with_lock(|records| {
            let source = Source::new(records.len(), url);
            registry::reserve_for_push(records);
            records.push(source.clone());
            source
        })
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Runs one worker per source concurrently and waits for all of them.
    /// A worker that fails to fetch or parse contributes zero rows; the
    /// other workers are unaffected. The sailor registry is complete once
    /// this returns.
    pub async fn run(&self) {
        let mut workers = Vec::new();
        for index in 0..self.sources.len() {
            let Some(source) = self.sources.get(index) else {
                continue;
            };
            let fetcher = Arc::clone(&self.fetcher);
            let resolver = IdentityResolver::new(Arc::clone(&self.sailors));
            workers.push(tokio::spawn(run_source(fetcher, source, resolver)));
        }

        for worker in workers {
            match worker.await {
                Ok(Ok(rows)) => debug!(rows, "source worker finished"),
                Ok(Err(e)) => warn!("source worker failed: {e}"),
                Err(e) => error!("source worker panicked: {e}"),
            }
        }
    }

    /// The resolved sailor registry, for presentation after [`run`] returns.
    pub fn sailors(&self) -> Arc<Registry<Sailor>> {
        Arc::clone(&self.sailors)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// One worker: fetch the page, extract the single result table, then build
/// and resolve a candidate per data row.
async fn run_source(
    fetcher: Arc<dyn Fetch>,
    source: Source,
    resolver: IdentityResolver,
) -> Result<usize> {
    info!(id = source.id, url = %source.url, "fetching source");
    let body = fetcher.fetch(&source.url).await?;
    if body.trim().is_empty() {
        return Err(ScrapeError::Parse(format!("empty document from '{}'", source.url)));
    }

    let Some(table) = extract::result_table(&body) else {
        debug!(id = source.id, "no single result table, source contributes no rows");
        return Ok(0);
    };

    let map = ColumnMap::from_header(&table.header);
    debug!(id = source.id, bound = map.bound_count(), "column map built");

    let mut resolved = 0usize;
    for row in &table.rows {
        let candidate = build_candidate(row, &map);
        resolver.resolve(candidate);
        resolved += 1;
    }
    info!(id = source.id, rows = resolved, "source processed");
    Ok(resolved)
}
