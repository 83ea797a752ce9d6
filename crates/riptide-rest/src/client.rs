//! REST client
//!
//! Wraps `reqwest` with the platform's bot-token header and the three calls
//! handler hooks actually need.

use reqwest::multipart;
use riptide_common::ClientConfig;
use riptide_core::{Message, User};
use serde::Deserialize;

use crate::error::RestError;
use crate::requests::SendMessagePayload;

const BOT_TOKEN_HEADER: &str = "x-bot-token";

/// Authenticated REST client
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    api_url: String,
    autumn_url: String,
    token: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    id: String,
}

impl RestClient {
    /// Build a client from the shared configuration
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            autumn_url: config.autumn_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Fetch a user by ID
    pub async fn fetch_user(&self, user_id: &str) -> Result<User, RestError> {
        let endpoint = format!("{}/users/{user_id}", self.api_url);
        let response = self
            .http
            .get(&endpoint)
            .header(BOT_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RestError::Status {
                status: response.status(),
                endpoint,
            });
        }
        Ok(response.json().await?)
    }

    /// Post a message to a channel, returning the created message
    ///
    /// A missing nonce is filled in before sending.
    pub async fn send_message(
        &self,
        channel_id: &str,
        mut payload: SendMessagePayload,
    ) -> Result<Message, RestError> {
        payload.ensure_nonce();

        let endpoint = format!("{}/channels/{channel_id}/messages", self.api_url);
        tracing::debug!(channel_id = %channel_id, "Sending message");

        let response = self
            .http
            .post(&endpoint)
            .header(BOT_TOKEN_HEADER, &self.token)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RestError::Status {
                status: response.status(),
                endpoint,
            });
        }
        Ok(response.json().await?)
    }

    /// Upload a file to the attachment host, returning its attachment ID
    pub async fn upload_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<String, RestError> {
        let endpoint = format!("{}/attachments", self.autumn_url);
        let form = multipart::Form::new().part(
            "file",
            multipart::Part::bytes(contents).file_name(file_name.to_string()),
        );

        let response = self
            .http
            .post(&endpoint)
            .header(BOT_TOKEN_HEADER, &self.token)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RestError::Status {
                status: response.status(),
                endpoint,
            });
        }

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| RestError::Body(e.to_string()))?;
        Ok(upload.id)
    }
}
