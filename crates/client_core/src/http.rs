//! reqwest-backed implementation of the remote video service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Comment, UserProfile, VideoId},
    error::ApiFailure,
    protocol::{
        AddCommentRequest, CommentListResponse, ErrorBody, ErrorResponse, RegisterRequest,
        RegisterResponse,
    },
};
use tracing::debug;

use crate::VideoApi;

pub struct HttpVideoApi {
    http: Client,
    base_url: String,
}

impl HttpVideoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Maps non-2xx responses onto the service's error envelope when it is
    /// present, and onto a bare server failure otherwise.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiFailure> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| ApiFailure::Network(err.to_string()));
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => {
                debug!(status, message = %body.error, "request rejected by server");
                Err(ErrorResponse { status, data: body }.into())
            }
            Err(_) => Err(ApiFailure::Server {
                status,
                message: String::new(),
            }),
        }
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    async fn fetch_comments(&self, video_id: &VideoId) -> Result<CommentListResponse, ApiFailure> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/comments/{}", video_id.as_str())))
            .send()
            .await
            .map_err(|err| ApiFailure::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn add_comment(&self, video_id: &VideoId, content: &str) -> Result<Comment, ApiFailure> {
        let response = self
            .http
            .post(self.url(&format!("/api/v1/comments/{}", video_id.as_str())))
            .json(&AddCommentRequest {
                content: content.to_string(),
            })
            .send()
            .await
            .map_err(|err| ApiFailure::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn fetch_current_user(&self) -> Result<UserProfile, ApiFailure> {
        let response = self
            .http
            .get(self.url("/api/v1/users/current-user"))
            .send()
            .await
            .map_err(|err| ApiFailure::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn register_user(&self, request: RegisterRequest) -> Result<RegisterResponse, ApiFailure> {
        let response = self
            .http
            .post(self.url("/api/v1/users/register"))
            .json(&request)
            .send()
            .await
            .map_err(|err| ApiFailure::Network(err.to_string()))?;
        Self::decode(response).await
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
