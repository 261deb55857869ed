use std::time::Duration;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:4000";
pub const DEFAULT_GRAPHQL_PATH: &str = "/graphql";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_NOTICE_CAPACITY: usize = 4;

/// Interface languages offered when nothing else is configured.
pub const DEFAULT_LANGUAGES: [&str; 5] = ["en", "fr", "hi", "sp", "zh"];
