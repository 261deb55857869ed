use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{non_blank_var, parse_bool_var, parse_csv_var};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub languages: FileLanguageConfig,
    #[serde(default)]
    pub console: FileConsoleConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_path: Option<String>,
    /// Human readable duration, e.g. `"30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLanguageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileConsoleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_capacity: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_test_stubs: Option<bool>,
}

/// Values read from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_url: Option<String>,
    pub graphql_path: Option<String>,
    pub request_timeout: Option<String>,
    pub access_token: Option<String>,
    pub languages: Option<Vec<String>>,
    /// Raw text; the loader parses it and warns when it is not a number
    pub notice_capacity: Option<String>,
    pub use_test_stubs: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_blank_var("USERDESK_CONFIG").map(PathBuf::from),
            server_url: non_blank_var("USERDESK_SERVER_URL"),
            graphql_path: non_blank_var("USERDESK_GRAPHQL_PATH"),
            request_timeout: non_blank_var("USERDESK_REQUEST_TIMEOUT"),
            access_token: non_blank_var("USERDESK_ACCESS_TOKEN"),
            languages: parse_csv_var("USERDESK_LANGUAGES")
                .filter(|codes| !codes.is_empty()),
            notice_capacity: non_blank_var("USERDESK_NOTICE_CAPACITY"),
            use_test_stubs: parse_bool_var("USERDESK_USE_TEST_STUBS"),
        }
    }
}
