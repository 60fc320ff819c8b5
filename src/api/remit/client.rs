use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse};
use crate::models::{MobileWallet, Recipient};

/// Client for the remit catalog service: the read-only wallet and recipient
/// listings the wizard renders.
pub struct RemitClient {
    http_client: HttpClient,
    base_url: String,
}

impl RemitClient {
    const DEFAULT_BASE_URL: &'static str =
        "https://my-json-server.typicode.com/MonecoHQ/fake-api";

    /// Create a client against the default catalog service
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a non-success HTTP status to an error variant
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                if let Ok(err) = serde_json::from_str::<ErrorResponse>(&body_text) {
                    let message = err.message.or(err.error).unwrap_or(body_text);
                    ApiError::BadRequest(message)
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Catalog server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code as i32, body_text)
            }
            _ => ApiError::HttpError(status_code as i32, body_text),
        }
    }

    /// GET /wallets
    ///
    /// Retrieves the list of mobile-money providers available as transfer
    /// destinations.
    pub async fn get_mobile_wallets(&self) -> Result<Vec<MobileWallet>, ApiError> {
        let url = format!("{}/wallets", self.base_url);
        debug!("Fetching mobile wallets from {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<MobileWallet>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// GET /recipients
    ///
    /// Retrieves the sender's previous recipients.
    pub async fn get_previous_recipients(&self) -> Result<Vec<Recipient>, ApiError> {
        let url = format!("{}/recipients", self.base_url);
        debug!("Fetching previous recipients from {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<Recipient>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl Default for RemitClient {
    fn default() -> Self {
        Self::new()
    }
}
