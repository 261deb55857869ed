use std::{sync::Arc, time::Duration};

use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use userdesk_config::ServerConfig;
use userdesk_contracts::{GraphQlRequest, GraphQlResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid response body")]
    Decode(#[source] reqwest::Error),
    #[error("directory reported errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("empty response from directory")]
    EmptyData,
}

/// GraphQL client for the user directory
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    access_token: Option<Arc<str>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .field("has_token", &self.access_token.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a new API client
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        let endpoint = endpoint.into();

        info!("[ApiClient] Creating GraphQL client for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            access_token: None,
        })
    }

    pub fn from_config(server: &ServerConfig) -> Result<Self, ApiError> {
        let client =
            Self::new(server.graphql_endpoint(), server.request_timeout)?;
        Ok(match &server.access_token {
            Some(token) => client.with_access_token(token.as_str()),
            None => client,
        })
    }

    pub fn with_access_token(mut self, token: impl Into<Arc<str>>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one GraphQL operation and return its `data` payload.
    pub async fn execute<V, T>(
        &self,
        query: &str,
        operation_name: &str,
        variables: V,
    ) -> Result<T, ApiError>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        debug!("[ApiClient] {} -> {}", operation_name, self.endpoint);

        let body = GraphQlRequest::new(query, operation_name, variables);
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response =
            request.send().await.map_err(|source| ApiError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }

        let envelope: GraphQlResponse<T> =
            response.json().await.map_err(ApiError::Decode)?;

        match envelope.into_result() {
            Ok(Some(data)) => Ok(data),
            Ok(None) => Err(ApiError::EmptyData),
            Err(errors) => Err(ApiError::GraphQl(
                errors.iter().map(ToString::to_string).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_token() {
        let client =
            ApiClient::new("http://localhost:4000/graphql", Duration::from_secs(1))
                .unwrap()
                .with_access_token("super-secret");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("has_token: true"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn graphql_errors_are_joined() {
        let err = ApiError::GraphQl(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "directory reported errors: first; second");
    }
}
