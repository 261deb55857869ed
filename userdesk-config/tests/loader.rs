use std::time::Duration;

use tempfile::tempdir;
use userdesk_config::{ConfigLoadError, ConfigLoader, EnvConfig};

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("userdesk.toml");
    std::fs::write(&path, contents).expect("write config");
    (dir, path)
}

#[test]
fn file_values_are_used_when_env_is_empty() {
    let (_dir, path) = write_config(
        r#"
[server]
url = "https://directory.example.org"
graphql_path = "/api/graphql"
request_timeout = "5s"
access_token = "secret"

[languages]
supported = ["en", "fr"]

[console]
notice_capacity = 2
"#,
    );

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .without_env_file()
        .load_with_env(EnvConfig::default())
        .expect("config loads");
    let config = load.config;

    assert_eq!(
        config.server.graphql_endpoint(),
        "https://directory.example.org/api/graphql"
    );
    assert_eq!(config.server.request_timeout, Duration::from_secs(5));
    assert_eq!(config.server.access_token.as_deref(), Some("secret"));
    assert_eq!(config.languages.len(), 2);
    assert!(config.languages.contains("fr"));
    assert_eq!(config.console.notice_capacity, 2);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn env_overrides_file() {
    let (_dir, path) = write_config(
        r#"
[server]
url = "http://file.example.org"

[languages]
supported = ["en"]
"#,
    );

    let env = EnvConfig {
        server_url: Some("http://env.example.org:4000".into()),
        languages: Some(vec!["hi".into(), "zh".into()]),
        ..EnvConfig::default()
    };

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env)
        .expect("config loads")
        .config;

    assert_eq!(
        config.server.graphql_endpoint(),
        "http://env.example.org:4000/graphql"
    );
    assert!(config.languages.contains("hi"));
    assert!(!config.languages.contains("en"));
}

#[test]
fn defaults_apply_without_any_source() {
    let load = ConfigLoader::new()
        .load_with_env(EnvConfig::default())
        .expect("defaults load");

    let codes: Vec<&str> =
        load.config.languages.iter().map(|c| c.as_str()).collect();
    assert_eq!(codes, vec!["en", "fr", "hi", "sp", "zh"]);
    assert_eq!(load.config.console.notice_capacity, 4);
    assert!(!load.config.console.use_test_stubs);
    assert!(!load.warnings.is_empty());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn rejects_bad_values() {
    let bad_url = EnvConfig {
        server_url: Some("ftp://example.org".into()),
        ..EnvConfig::default()
    };
    assert!(matches!(
        ConfigLoader::new().load_with_env(bad_url).unwrap_err(),
        ConfigLoadError::UnsupportedScheme { .. }
    ));

    let bad_timeout = EnvConfig {
        request_timeout: Some("soon".into()),
        ..EnvConfig::default()
    };
    assert!(matches!(
        ConfigLoader::new().load_with_env(bad_timeout).unwrap_err(),
        ConfigLoadError::InvalidTimeout { .. }
    ));

    let bad_languages = EnvConfig {
        languages: Some(vec!["en".into(), "e n".into()]),
        ..EnvConfig::default()
    };
    assert!(matches!(
        ConfigLoader::new().load_with_env(bad_languages).unwrap_err(),
        ConfigLoadError::InvalidLanguages(_)
    ));
}

#[test]
fn zero_notice_capacity_is_raised_with_warning() {
    let env = EnvConfig {
        notice_capacity: Some("0".into()),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().load_with_env(env).expect("loads");
    assert_eq!(load.config.console.notice_capacity, 1);
    assert!(
        load.warnings
            .iter()
            .any(|w| w.message.contains("notice_capacity"))
    );
}

#[test]
fn unparsable_notice_capacity_falls_back_with_warning() {
    let (_dir, path) = write_config("[console]\nnotice_capacity = 2\n");
    let env = EnvConfig {
        notice_capacity: Some("lots".into()),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new()
        .with_config_path(&path)
        .without_env_file()
        .load_with_env(env)
        .expect("loads");

    assert_eq!(load.config.console.notice_capacity, 2);
    let warning = load
        .warnings
        .iter()
        .find(|w| w.message.contains("USERDESK_NOTICE_CAPACITY"))
        .expect("warning for the bad value");
    assert!(warning.message.contains("lots"));
    assert!(warning.hint.is_some());
}

#[test]
fn unparsable_notice_capacity_without_file_uses_default() {
    let env = EnvConfig {
        notice_capacity: Some("-3".into()),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new()
        .without_env_file()
        .load_with_env(env)
        .expect("loads");

    assert_eq!(load.config.console.notice_capacity, 4);
    assert!(
        load.warnings
            .iter()
            .any(|w| w.message.contains("USERDESK_NOTICE_CAPACITY"))
    );
}

#[test]
fn malformed_toml_reports_the_path() {
    let (_dir, path) = write_config("[server\nurl = ");
    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default())
        .unwrap_err();

    match err {
        ConfigLoadError::Parse { path: reported, .. } => {
            assert_eq!(reported, path)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
