// src/api/parser.rs
//! Turns raw Notion API responses into typed results.
//!
//! Successful bodies deserialize straight into the domain model; failed ones
//! are mapped onto [`AppError::NotionService`] using Notion's error body when
//! it can be read, and the HTTP status otherwise.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Body of an HTTP response together with its status and URL.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub url: String,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Notion's error object.
#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    status: Option<u16>,
    code: String,
    #[serde(default)]
    message: String,
}

/// Parses a Notion API response into `T`.
pub fn parse_api_response<T>(response: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if response.is_success() {
        parse_success(&response.data, &response.url)
    } else {
        Err(parse_error(&response.data, response.status, &response.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse {
            url: url.to_string(),
            message: format!("{} (body: {})", e, preview(body)),
        }
    })
}

fn parse_error(body: &str, status: u16, url: &str) -> AppError {
    match serde_json::from_str::<NotionErrorBody>(body) {
        Ok(error) => {
            log::debug!("Notion error {} from {}: {}", error.code, url, error.message);
            AppError::NotionService {
                code: NotionErrorCode::from_api_response(&error.code),
                message: error.message,
                status: error.status.unwrap_or(status),
            }
        }
        Err(_) => AppError::NotionService {
            code: NotionErrorCode::from_http_status(status),
            message: format!("HTTP {} from {}: {}", status, url, preview(body)),
            status,
        },
    }
}

/// First [`ERROR_BODY_PREVIEW_LENGTH`] characters of `body`.
fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((index, _)) => format!("{}...", &body[..index]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use crate::pagination::PageBatch;

    fn response(status: u16, body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status,
            url: "https://api.notion.com/v1/blocks/x/children".to_string(),
        }
    }

    #[test]
    fn parses_block_listing() {
        let body = r#"{
            "object": "list",
            "results": [{
                "object": "block",
                "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
                "type": "divider",
                "has_children": false,
                "divider": {}
            }],
            "next_cursor": "abc",
            "has_more": true
        }"#;
        let batch: PageBatch<Block> = parse_api_response(response(200, body)).unwrap();
        assert_eq!(batch.results.len(), 1);
        assert_eq!(batch.next_cursor.as_deref(), Some("abc"));
        assert!(batch.has_more);
    }

    #[test]
    fn maps_notion_error_body() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find block"}"#;
        let err = parse_api_response::<PageBatch<Block>>(response(404, body)).unwrap_err();
        match err {
            AppError::NotionService {
                code,
                message,
                status,
            } => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(message, "Could not find block");
                assert_eq!(status, 404);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_http_status() {
        let err = parse_api_response::<PageBatch<Block>>(response(502, "<html>bad gateway</html>"))
            .unwrap_err();
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
        assert!(err.notion_code().unwrap().is_retryable());
    }

    #[test]
    fn malformed_success_body_keeps_url_and_preview() {
        let long = "x".repeat(ERROR_BODY_PREVIEW_LENGTH + 50);
        match parse_api_response::<PageBatch<Block>>(response(200, &long)) {
            Err(AppError::MalformedResponse { url, message }) => {
                assert!(url.ends_with("/children"));
                assert!(message.ends_with("...)"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
