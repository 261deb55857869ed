pub mod error;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use url::Url;
use userdesk_model::SupportedLanguages;

use crate::constants::{
    DEFAULT_GRAPHQL_PATH, DEFAULT_LANGUAGES, DEFAULT_NOTICE_CAPACITY,
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER_URL,
};
use crate::models::{
    ConfigMetadata, ConfigWarnings, ConsoleConfig, ConsoleSettings,
    ServerConfig,
    sources::{EnvConfig, FileConfig},
};
use error::ConfigLoadError;

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["userdesk.toml", "config/userdesk.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    pub skip_env_file: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: ConsoleConfig,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    /// Load `.env`, read the process environment, then compose.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose against an explicit environment snapshot.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        self.compose_config(file_config, env, config_path)
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok(false);
        }

        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };

        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig { path });
                }
                path
            }
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        log::debug!("Loaded console configuration from {}", path.display());
        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No userdesk.toml detected; falling back to environment variables",
                "Create userdesk.toml or set USERDESK_CONFIG to point at one",
            );
        }

        let FileConfig {
            server: file_server,
            languages: file_languages,
            console: file_console,
        } = file_config.unwrap_or_default();

        let raw_url = env
            .server_url
            .or(file_server.url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let url = parse_server_url(&raw_url)?;

        let graphql_path = env
            .graphql_path
            .or(file_server.graphql_path)
            .unwrap_or_else(|| DEFAULT_GRAPHQL_PATH.to_string());

        let request_timeout = match env
            .request_timeout
            .or(file_server.request_timeout)
        {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let access_token = env.access_token.or(file_server.access_token);
        if access_token.is_none() && url.scheme() == "https" {
            warnings.push_with_hint(
                "No access token configured for a remote directory",
                "Set USERDESK_ACCESS_TOKEN or server.access_token",
            );
        }

        let language_codes = env
            .languages
            .or(file_languages.supported)
            .unwrap_or_else(|| {
                DEFAULT_LANGUAGES.iter().map(|c| c.to_string()).collect()
            });
        let languages = SupportedLanguages::new(&language_codes)
            .map_err(ConfigLoadError::InvalidLanguages)?;

        let env_capacity = env.notice_capacity.and_then(|raw| {
            match raw.trim().parse::<usize>() {
                Ok(capacity) => Some(capacity),
                Err(_) => {
                    warnings.push_with_hint(
                        format!(
                            "USERDESK_NOTICE_CAPACITY '{raw}' is not a number; ignored"
                        ),
                        "Use a non-negative integer such as 4",
                    );
                    None
                }
            }
        });
        let mut notice_capacity = env_capacity
            .or(file_console.notice_capacity)
            .unwrap_or(DEFAULT_NOTICE_CAPACITY);
        if notice_capacity == 0 {
            warnings.push("console.notice_capacity of 0 raised to 1");
            notice_capacity = 1;
        }

        let use_test_stubs = env
            .use_test_stubs
            .or(file_console.use_test_stubs)
            .unwrap_or(false);

        let config = ConsoleConfig {
            server: ServerConfig {
                url,
                graphql_path,
                request_timeout,
                access_token,
            },
            languages,
            console: ConsoleSettings {
                notice_capacity,
                use_test_stubs,
            },
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        Ok(ConfigLoad { config, warnings })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_server_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let url = Url::parse(raw).map_err(|source| {
        ConfigLoadError::InvalidServerUrl {
            value: raw.to_string(),
            source,
        }
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            value: raw.to_string(),
            source,
        }
    })
}
