pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

use url::Url;
use userdesk_model::SupportedLanguages;

/// Fully composed console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub server: ServerConfig,
    pub languages: SupportedLanguages,
    pub console: ConsoleSettings,
    pub metadata: ConfigMetadata,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub url: Url,
    pub graphql_path: String,
    pub request_timeout: Duration,
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Absolute URL of the GraphQL endpoint.
    pub fn graphql_endpoint(&self) -> String {
        let base = self.url.as_str().trim_end_matches('/');
        let path = self.graphql_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url.as_str())
            .field("graphql_path", &self.graphql_path)
            .field("request_timeout", &self.request_timeout)
            .field("has_access_token", &self.access_token.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    /// Maximum number of notices kept on screen at once.
    pub notice_capacity: usize,
    pub use_test_stubs: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigWarnings {
    items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push(&mut self, message: impl Into<String>) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint(
        &mut self,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}
