use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_BUCKET: &str = "anamnez";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Where session answers are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    S3,
}

/// Runtime settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    pub store: StoreBackend,
    pub bucket: String,
    /// Mark the session cookie `Secure` and `HttpOnly`.
    pub secure_cookies: bool,
    /// JSON catalog replacing the built-in questionnaire.
    pub questionnaire_path: Option<PathBuf>,
    /// TrueType font embedded into transcript PDFs.
    pub pdf_font_path: Option<PathBuf>,
    /// Tera template replacing the built-in transcript layout.
    pub transcript_template_path: Option<PathBuf>,
    /// Running under the AWS Lambda runtime rather than as a TCP server.
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match var("ANAMNEZ_BIND_ADDR") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "ANAMNEZ_BIND_ADDR",
                value: raw,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let store = match var("ANAMNEZ_STORE").as_deref().map(str::trim) {
            None | Some("memory") => StoreBackend::Memory,
            Some("s3") => StoreBackend::S3,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "ANAMNEZ_STORE",
                    value: other.to_string(),
                });
            }
        };

        // Hosted deployments (Render sets RENDER) serve over HTTPS.
        let secure_cookies = match var("ANAMNEZ_SECURE_COOKIES") {
            Some(raw) => parse_bool("ANAMNEZ_SECURE_COOKIES", &raw)?,
            None => var("RENDER").is_some(),
        };

        Ok(Self {
            port,
            bind_addr,
            store,
            bucket: var("ANAMNEZ_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            secure_cookies,
            questionnaire_path: var("ANAMNEZ_QUESTIONNAIRE").map(PathBuf::from),
            pdf_font_path: var("ANAMNEZ_PDF_FONT").map(PathBuf::from),
            transcript_template_path: var("ANAMNEZ_TRANSCRIPT_TEMPLATE").map(PathBuf::from),
            lambda: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}
