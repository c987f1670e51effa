//! Keyword place search (Kakao Local API) and the pickers that use it.
//!
//! The multi-result picker feeds the points of interest list; the single
//! picker is used for anchors and lodging and collapses into a "selected"
//! state until cleared.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::place::Place;
use crate::traits::{PlaceCandidate, PlaceSearchProvider};

pub const KAKAO_API_KEY_ENV: &str = "KAKAO_REST_API_KEY";
pub const KAKAO_BASE_URL_ENV: &str = "KAKAO_BASE_URL";

const KEYWORD_PATH: &str = "/v2/local/search/keyword.json";
const UNNAMED_PLACE: &str = "Unnamed";
const UNKNOWN_ADDRESS: &str = "No address";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSearchConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PlaceSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dapi.kakao.com".to_string(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl PlaceSearchConfig {
    /// Reads `KAKAO_BASE_URL` and `KAKAO_REST_API_KEY`. Blank values are
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = non_blank(KAKAO_BASE_URL_ENV) {
            config.base_url = url;
        }
        config.api_key = non_blank(KAKAO_API_KEY_ENV);
        config
    }
}

#[derive(Debug, Clone)]
pub struct KakaoSearchClient {
    config: PlaceSearchConfig,
    client: reqwest::blocking::Client,
}

impl KakaoSearchClient {
    pub fn new(config: PlaceSearchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl PlaceSearchProvider for KakaoSearchClient {
    fn search(&self, query: &str) -> Result<Vec<PlaceCandidate>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let api_key = self.config.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), KEYWORD_PATH);
        let response = self
            .client
            .get(url)
            .query(&[("query", query)])
            .header(reqwest::header::AUTHORIZATION, format!("KakaoAK {api_key}"))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.json::<KakaoKeywordResponse>()?;
        Ok(candidates_from(body.documents))
    }
}

#[derive(Debug, Deserialize)]
struct KakaoKeywordResponse {
    #[serde(default)]
    documents: Vec<KakaoDocument>,
}

#[derive(Debug, Deserialize)]
struct KakaoDocument {
    #[serde(default)]
    place_name: String,
    #[serde(default)]
    address_name: String,
    /// Longitude as a decimal string.
    #[serde(default)]
    x: String,
    /// Latitude as a decimal string.
    #[serde(default)]
    y: String,
}

fn candidates_from(documents: Vec<KakaoDocument>) -> Vec<PlaceCandidate> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let (Ok(lat), Ok(lng)) = (doc.y.trim().parse::<f64>(), doc.x.trim().parse::<f64>())
            else {
                warn!(
                    name = %doc.place_name,
                    x = %doc.x,
                    y = %doc.y,
                    "skipping candidate with bad coordinates"
                );
                return None;
            };
            Some(PlaceCandidate {
                name: non_blank_or(doc.place_name, UNNAMED_PLACE),
                address: non_blank_or(doc.address_name, UNKNOWN_ADDRESS),
                lat,
                lng,
            })
        })
        .collect()
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

impl PlaceCandidate {
    pub fn to_place(&self) -> Place {
        Place::new(self.name.clone(), self.lat, self.lng)
    }
}

/// Query text and the latest results of one search box.
#[derive(Debug, Clone, Default, PartialEq)]
struct SearchBox {
    query: String,
    results: Vec<PlaceCandidate>,
}

impl SearchBox {
    fn run<P: PlaceSearchProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&[PlaceCandidate], SearchError> {
        if self.query.trim().is_empty() {
            return Ok(&self.results);
        }

        match provider.search(&self.query) {
            Ok(results) => {
                debug!(query = %self.query, count = results.len(), "place search finished");
                self.results = results;
                Ok(&self.results)
            }
            Err(err) => {
                warn!(query = %self.query, error = %err, "place search failed");
                self.results.clear();
                Err(err)
            }
        }
    }

    fn take(&mut self, index: usize) -> Option<Place> {
        let place = self.results.get(index)?.to_place();
        self.query.clear();
        self.results.clear();
        Some(place)
    }
}

/// Search box whose selections are appended to a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPlacePicker {
    search: SearchBox,
}

impl MultiPlacePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
    }

    pub fn results(&self) -> &[PlaceCandidate] {
        &self.search.results
    }

    /// Runs the query. A blank query leaves results untouched; a failure
    /// clears them.
    pub fn search<P: PlaceSearchProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&[PlaceCandidate], SearchError> {
        self.search.run(provider)
    }

    /// Picks a result, clearing the query and the result list.
    pub fn select(&mut self, index: usize) -> Option<Place> {
        self.search.take(index)
    }
}

/// Search box for a single place (an anchor or a night's lodging).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinglePlacePicker {
    label: String,
    search: SearchBox,
    selected: Option<Place>,
}

impl SinglePlacePicker {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
    }

    pub fn results(&self) -> &[PlaceCandidate] {
        &self.search.results
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    /// Whether the picker shows only its confirmed selection.
    pub fn is_collapsed(&self) -> bool {
        self.selected.is_some()
    }

    /// Runs the query unless a place is already selected.
    pub fn search<P: PlaceSearchProvider>(
        &mut self,
        provider: &P,
    ) -> Result<&[PlaceCandidate], SearchError> {
        if self.is_collapsed() {
            return Ok(&[]);
        }
        self.search.run(provider)
    }

    pub fn select(&mut self, index: usize) -> Option<Place> {
        let place = self.search.take(index)?;
        self.selected = Some(place.clone());
        Some(place)
    }

    /// Reopens the search box.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
