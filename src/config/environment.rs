// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and HTTP limits parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(defaults::CORS_ORIGINS),
        }
    }
}

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes
    pub max_request_body_bytes: usize,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            cors: CorsConfig::default(),
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_request_body_bytes: limits::DEFAULT_MAX_REQUEST_BODY_BYTES,
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_config::HOST, defaults::HOST),
            http_port: env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_config::CORS_ORIGINS,
                    defaults::CORS_ORIGINS,
                )),
            },
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &limits::DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
            max_request_body_bytes: env_var_or(
                env_config::MAX_REQUEST_BODY_BYTES,
                &limits::DEFAULT_MAX_REQUEST_BODY_BYTES.to_string(),
            )
            .parse()
            .context("Invalid MAX_REQUEST_BODY_BYTES value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                defaults::ENVIRONMENT,
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must not be 0"));
        }

        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("HOST must not be empty"));
        }

        if !(1..=limits::MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(anyhow::anyhow!(
                "REQUEST_TIMEOUT_SECS must be between 1 and {}",
                limits::MAX_REQUEST_TIMEOUT_SECS
            ));
        }

        if self.max_request_body_bytes < limits::MIN_REQUEST_BODY_BYTES {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_BODY_BYTES must be at least {}",
                limits::MIN_REQUEST_BODY_BYTES
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(anyhow::anyhow!("CORS_ORIGINS must list at least one origin"));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fitcoach Server Configuration:\n\
             - Bind Address: {}:{}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Request Body: {} bytes",
            self.host,
            self.http_port,
            self.environment,
            self.cors.allowed_origins.join(", "),
            self.request_timeout_secs,
            self.max_request_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse comma-separated origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empty() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_owned(), "http://b.test".to_owned()]
        );
    }

    #[test]
    fn test_environment_fallback() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig {
            request_timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
