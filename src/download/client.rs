//! HTTP client wrapper for downloading files.
//!
//! This module provides the `HttpClient` struct which issues the single GET
//! request of a download and enforces the status policy.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use url::Url;

use super::constants::CONNECT_TIMEOUT_SECS;
use super::error::TransferError;
use crate::user_agent::default_download_user_agent;

/// HTTP client for streaming downloads.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default connect timeout and no read timeout.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
    }

    /// Creates a client with an explicit connect timeout.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialised.
    pub fn with_connect_timeout(connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(default_download_user_agent())
            .build()?;
        Ok(Self { client })
    }

    /// Sends a GET request and returns the response if the server answered 200.
    ///
    /// # Errors
    ///
    /// - [`TransferError::Transport`] if the request cannot be sent
    /// - [`TransferError::BadStatus`] for any status other than 200, including
    ///   other 2xx codes
    pub async fn get(&self, url: &Url) -> Result<Response, TransferError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransferError::transport(url.as_str(), e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if status != StatusCode::OK {
            return Err(TransferError::bad_status(url.as_str(), status.as_u16()));
        }

        Ok(response)
    }
}
