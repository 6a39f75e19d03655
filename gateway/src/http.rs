//! HTTP persistence: `PUT` the JSON scene collection to the venue API.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{info, warn};
use venue_canvas::doc::SceneStore;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::{PersistenceGateway, SaveReceipt};

pub struct HttpGateway {
    http: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HttpGateway {
    /// # Errors
    ///
    /// Returns [`GatewayError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint(), api_token: config.api_token.clone() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PersistenceGateway for HttpGateway {
    async fn save(&self, store: &SceneStore) -> Result<SaveReceipt, GatewayError> {
        let body = serde_json::to_vec(store).map_err(|e| GatewayError::Encode(e.to_string()))?;
        let bytes = body.len();

        let mut request = self.http.put(&self.endpoint).header(CONTENT_TYPE, "application/json").body(body);
        if let Some(token) = &self.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| GatewayError::Request(e.to_string()))?;
            warn!(endpoint = %self.endpoint, status, "layout save rejected");
            return Err(GatewayError::Response { status, body: text });
        }

        info!(endpoint = %self.endpoint, status, bytes, scenes = store.len(), "layout saved");
        Ok(SaveReceipt { status, bytes })
    }
}
