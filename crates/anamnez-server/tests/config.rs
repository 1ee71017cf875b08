use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use anamnez_server::config::{ConfigError, ServerConfig, StoreBackend, DEFAULT_PORT};

fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.store, StoreBackend::Memory);
    assert_eq!(config.bucket, "anamnez");
    assert!(!config.secure_cookies);
    assert!(!config.lambda);
    assert!(config.questionnaire_path.is_none());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5002");
}

#[test]
fn reads_every_variable() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("ANAMNEZ_BIND_ADDR", "127.0.0.1"),
        ("ANAMNEZ_STORE", "s3"),
        ("ANAMNEZ_BUCKET", "intake-prod"),
        ("ANAMNEZ_SECURE_COOKIES", "yes"),
        ("ANAMNEZ_QUESTIONNAIRE", "/etc/anamnez/questions.json"),
        ("ANAMNEZ_PDF_FONT", "/usr/share/fonts/DejaVuSans.ttf"),
        ("ANAMNEZ_TRANSCRIPT_TEMPLATE", "/etc/anamnez/transcript.tera"),
        ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
    ])
    .unwrap();

    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.store, StoreBackend::S3);
    assert_eq!(config.bucket, "intake-prod");
    assert!(config.secure_cookies);
    assert!(config.lambda);
    assert_eq!(
        config.questionnaire_path,
        Some(PathBuf::from("/etc/anamnez/questions.json"))
    );
    assert_eq!(
        config.pdf_font_path,
        Some(PathBuf::from("/usr/share/fonts/DejaVuSans.ttf"))
    );
    assert_eq!(
        config.transcript_template_path,
        Some(PathBuf::from("/etc/anamnez/transcript.tera"))
    );
}

#[test]
fn hosted_deployments_default_to_secure_cookies() {
    assert!(config_from(&[("RENDER", "true")]).unwrap().secure_cookies);
    assert!(
        !config_from(&[("RENDER", "true"), ("ANAMNEZ_SECURE_COOKIES", "0")])
            .unwrap()
            .secure_cookies
    );
}

#[test]
fn empty_values_count_as_unset() {
    let config = config_from(&[("PORT", ""), ("ANAMNEZ_QUESTIONNAIRE", "  ")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.questionnaire_path.is_none());
}

#[test]
fn rejects_malformed_values() {
    assert_eq!(
        config_from(&[("PORT", "http")]).unwrap_err(),
        ConfigError::InvalidValue {
            key: "PORT",
            value: "http".to_string()
        }
    );
    assert!(config_from(&[("ANAMNEZ_STORE", "redis")]).is_err());
    assert!(config_from(&[("ANAMNEZ_BIND_ADDR", "localhost")]).is_err());
    assert!(config_from(&[("ANAMNEZ_SECURE_COOKIES", "maybe")]).is_err());
}
