//! carinfo-search
//!
//! Query → cache → generator → ingestion → fallback → cache.

use std::sync::Arc;

use tracing::{debug, info, warn};

use carinfo_core::traits::{CarInfoGenerator, CarStore};
use carinfo_core::{fallback_record, ingest, CarQuery, Ingested, RecordSource, Result, SearchResult};

/// Built once at startup and shared by reference with every request
/// handler. The store lives as long as the service.
pub struct CarSearchService<G, S> where G: CarInfoGenerator, S: CarStore {
    generator: G,
    store: Arc<S>,
}

impl<G, S> CarSearchService<G, S> where G: CarInfoGenerator, S: CarStore {
    pub fn new(generator: G, store: Arc<S>) -> Self { Self { generator, store } }

    pub fn store(&self) -> &S { &self.store }

    pub async fn search(&self, raw_query: &str) -> Result<SearchResult> {
        let query = CarQuery::parse(raw_query)?;
        let key = query.cache_key();
        if let Some(record) = self.store.lookup(&key) {
            debug!(%key, "cache hit");
            return Ok(SearchResult { record, source: RecordSource::Cached });
        }

        // Generator and parse errors propagate; nothing is cached for them.
        let raw = self.generator.generate(&query).await?;
        let (record, source) = match ingest(&raw) {
            Ok(Ingested::Valid(record)) => (record, RecordSource::Generated),
            Ok(Ingested::ShapeInvalid(failure)) => {
                warn!(%query, %failure, raw = %raw, "generated profile failed validation; using placeholder");
                (fallback_record(query.as_str()), RecordSource::Fallback)
            }
            Err(err) => {
                warn!(%query, error = %err, raw = %raw, "generated profile rejected");
                return Err(err);
            }
        };

        info!(%key, ?source, "caching car profile");
        self.store.insert(&key, record.clone());
        Ok(SearchResult { record, source })
    }
}
