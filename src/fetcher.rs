//! Paginated retrieval from the ETSI standards search.
//!
//! The endpoint returns one JSON array of [`RawRecord`]s per page. It has no
//! response-level page count: every record repeats the total result count, so
//! the number of pages is recomputed from each batch as it arrives.

use crate::config::{Config, SearchConfig};
use crate::error::{Error, Result};
use crate::record::RawRecord;
use crate::supersession;
use crate::types::Deliverable;
use tracing::{debug, info, warn};
use url::Url;

/// Client for the catalog search endpoint
#[derive(Clone, Debug)]
pub struct CatalogClient {
    /// HTTP client for search requests
    http_client: reqwest::Client,

    /// Search endpoint
    endpoint: Url,

    /// Base URL for file links
    deliver_base: Url,

    /// Search filter
    search: SearchConfig,

    /// Optional cap on pages fetched
    max_pages: Option<u32>,
}

impl CatalogClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint_url()?,
            deliver_base: config.deliver_base()?,
            search: config.search.clone(),
            max_pages: config.max_pages,
        })
    }

    /// Query parameters for one page, in the order the endpoint expects them
    pub fn query_params(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("page", page.to_string()),
            ("includeScope", "1".to_string()),
            ("option", "com_standardssearch".to_string()),
            ("view", "data".to_string()),
            ("format", "json".to_string()),
            ("search", self.search.keyword.clone()),
            ("etsiNumber", "0".to_string()),
            ("content", "0".to_string()),
            ("version", "0".to_string()),
            ("historical", "0".to_string()),
            // Not enforced by the server; superseded versions are removed afterwards.
            ("superseded", "0".to_string()),
            ("startDate", self.search.start_date.format("%Y-%m-%d").to_string()),
            ("harmonized", "0".to_string()),
            ("TB", self.search.technical_body.to_string()),
        ]
    }

    /// Fetch and decode a single result page
    ///
    /// # Errors
    /// Returns error if the request fails, the server answers with a non-success
    /// status, or the body is not a JSON record array
    pub async fn fetch_page(&self, page: u32) -> Result<Vec<RawRecord>> {
        debug!(page, endpoint = %self.endpoint, "Requesting search page");

        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&self.query_params(page))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                page,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode { page, source })
    }

    /// Fetch every page of the search, in page order
    ///
    /// Stops at the first failing page; no partial result is returned.
    pub async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        let mut records = Vec::new();
        let mut page_count = 1;
        let mut per_page = None;
        let mut capped = false;
        let mut page = 1;

        while page <= page_count {
            let batch = self.fetch_page(page).await?;
            info!(page, records = batch.len(), "Fetched search page");

            // The first non-empty batch fixes the page size; a short last page must
            // not inflate the count.
            if per_page.is_none() && !batch.is_empty() {
                per_page = Some(batch.len());
            }
            let computed = pages_needed(&batch, per_page.unwrap_or_default(), page_count);
            if computed != page_count {
                debug!(from = page_count, to = computed, "Recomputed search page count");
            }
            page_count = computed;

            if let Some(max) = self.max_pages
                && page_count > max
            {
                if !capped {
                    warn!(
                        pages = page_count,
                        max_pages = max,
                        "Search has more pages than allowed, stopping early"
                    );
                    capped = true;
                }
                page_count = max;
            }

            records.extend(batch);
            page += 1;
        }

        Ok(records)
    }

    /// Fetch, normalize and deduplicate the deliverables
    pub async fn deliverables(&self) -> Result<Vec<Deliverable>> {
        let records = self.fetch_all().await?;
        let total = records.len();

        let latest = supersession::latest_by_doc_id(
            records
                .iter()
                .map(|record| record.to_deliverable(&self.deliver_base)),
        );
        let deliverables = supersession::aggregate(latest);

        info!(
            records = total,
            deliverables = deliverables.len(),
            "Collected deliverables"
        );
        Ok(deliverables)
    }
}

/// Page count implied by one batch
///
/// Each record whose total count parses and exceeds `per_page` sets the count
/// to ceil(total / per_page); the last such record wins. Without one, or with
/// no known page size, `current` is returned unchanged.
pub fn pages_needed(batch: &[RawRecord], per_page: usize, current: u32) -> u32 {
    if per_page == 0 {
        return current;
    }
    batch
        .iter()
        .filter_map(RawRecord::total_count)
        .filter(|total| *total > per_page)
        .map(|total| u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX))
        .next_back()
        .unwrap_or(current)
}
