use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PapersError, Result};
use crate::pipeline::LiteratureSource;
use crate::pubmed::models::RecordEntry;
use crate::pubmed::parser::parse_records_from_xml;
use crate::pubmed::responses::ESearchResult;

/// ESearch cannot page past this many results
const MAX_RETRIEVABLE: usize = 9999;

/// Client for the two NCBI E-utilities endpoints the pipeline needs
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use get_papers_list::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use get_papers_list::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_tool("my-survey");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default HTTP client");
                Client::new()
            });

        Self::with_client_and_config(client, config)
    }

    /// Create a new PubMed client with a custom HTTP client and default configuration
    pub fn with_client(client: Client) -> Self {
        Self::with_client_and_config(client, ClientConfig::new())
    }

    fn with_client_and_config(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    /// Search PubMed for PMIDs matching `query`
    ///
    /// Returns at most `limit` identifiers in relevance order. A blank query
    /// returns an empty list without contacting the service.
    ///
    /// # Errors
    ///
    /// * `PapersError::SearchLimitExceeded` - If `limit` exceeds 9999
    /// * `PapersError::ApiError` - On non-success status, or an ESearch `ERROR` body
    /// * `PapersError::RequestError` - If the HTTP request fails or the body is not JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use get_papers_list::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("crispr therapeutics", 10).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit > MAX_RETRIEVABLE {
            return Err(PapersError::SearchLimitExceeded {
                requested: limit,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let search_result: ESearchResult = response.json().await?;

        // NCBI sometimes returns 200 OK with an ERROR field
        if let Some(error_msg) = search_result.esearchresult.error {
            return Err(PapersError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {}", error_msg),
            });
        }

        let pmids = search_result
            .esearchresult
            .idlist
            .ok_or_else(|| PapersError::ApiError {
                status: 200,
                message: "ESearch response has no idlist".to_string(),
            })?;

        info!(
            results_found = pmids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            "Search completed successfully"
        );

        Ok(pmids)
    }

    /// Fetch the raw records for `pmids` in a single EFetch request
    ///
    /// PMIDs absent from the response are simply absent from the result.
    /// Articles that are present but structurally incomplete are returned as
    /// `Err(MalformedRecord)` entries.
    #[instrument(skip(self, pmids), fields(pmids_count = pmids.len()))]
    pub async fn fetch_records(&self, pmids: &[String]) -> Result<Vec<RecordEntry>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml",
            self.base_url,
            pmids.join(",")
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        let xml_text = response.text().await?;

        if xml_text.trim().is_empty() {
            warn!("EFetch returned an empty body");
            return Ok(Vec::new());
        }

        let entries = parse_records_from_xml(&xml_text)?;
        info!(
            requested = pmids.len(),
            parsed = entries.len(),
            "Fetch completed"
        );

        Ok(entries)
    }

    /// Send a GET request, appending the configured API parameters
    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PapersError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LiteratureSource for PubMedClient {
    async fn search_ids(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        self.search_articles(query, limit).await
    }

    async fn fetch_records(&self, ids: &[String]) -> Result<Vec<RecordEntry>> {
        PubMedClient::fetch_records(self, ids).await
    }
}
