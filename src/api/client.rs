// src/api/client.rs
//! Blocking HTTP client for the Notion API.
//!
//! This module is a thin wrapper around reqwest: it handles authentication,
//! endpoint URLs and request logging, and hands raw responses to
//! [`parser`](super::parser) for decoding.

use super::parser::{parse_api_response, ApiResponse};
use super::NotionRepository;
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::model::{Block, Comment, Page};
use crate::pagination::{PageBatch, PageRequest};
use crate::types::NotionId;
use reqwest::blocking::{Client, Response};
use reqwest::header;
use serde::Serialize;

/// A thin wrapper around a blocking reqwest client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(config)?)
            .timeout(config.timeout)
            .build()?;
        log::debug!(
            "Notion client ready for {} (version {})",
            config.base_url,
            config.notion_version
        );
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(config: &ClientConfig) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", config.api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_str(&config.notion_version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion version: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Makes a GET request with query parameters to `endpoint`.
    pub fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("GET {} {:?}", url, query);
        Ok(self.client.get(url).query(query).send()?)
    }

    /// Makes a POST request with JSON body to `endpoint`.
    pub fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send()?)
    }

    /// Makes a PATCH request with JSON body to `endpoint`.
    pub fn patch<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.url(endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send()?)
    }
}

impl NotionRepository for NotionHttpClient {
    fn retrieve_page(&self, id: &NotionId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        parse_api_response(extract_response_text(self.get(&endpoint, &[])?)?)
    }

    fn retrieve_block(&self, id: &NotionId) -> Result<Block, AppError> {
        let endpoint = format!("blocks/{}", id.to_hyphenated());
        parse_api_response(extract_response_text(self.get(&endpoint, &[])?)?)
    }

    fn list_block_children(
        &self,
        parent: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let response = self.get(&endpoint, &request.query_pairs())?;
        parse_api_response(extract_response_text(response)?)
    }

    fn query_database(
        &self,
        database: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Page>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let response = self.post(&endpoint, &request.to_body())?;
        parse_api_response(extract_response_text(response)?)
    }

    fn list_comments(
        &self,
        block: &NotionId,
        request: PageRequest,
    ) -> Result<PageBatch<Comment>, AppError> {
        let mut query = vec![("block_id", block.to_hyphenated())];
        query.extend(request.query_pairs());
        let response = self.get("comments", &query)?;
        parse_api_response(extract_response_text(response)?)
    }

    fn create_page(
        &self,
        database: &NotionId,
        properties: serde_json::Value,
    ) -> Result<Page, AppError> {
        let body = serde_json::json!({
            "parent": { "database_id": database.to_hyphenated() },
            "properties": properties,
        });
        let response = self.post("pages", &body)?;
        parse_api_response(extract_response_text(response)?)
    }

    fn append_children(
        &self,
        parent: &NotionId,
        children: Vec<serde_json::Value>,
    ) -> Result<PageBatch<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let body = serde_json::json!({ "children": children });
        let response = self.patch(&endpoint, &body)?;
        parse_api_response(extract_response_text(response)?)
    }
}

/// Reads the response body as text along with its status and URL.
pub fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let text = response.text()?;
    log::trace!("{} from {} ({} bytes)", status, url, text.len());

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
