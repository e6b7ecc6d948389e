// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and consultation event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Production-ready logging configuration with structured output

use crate::constants::service_names;
use crate::models::{ConsultationType, FitnessGoal};
use anyhow::Result;
use fitcoach_core::errors::ErrorCode;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse the `LOG_FORMAT` value, defaulting to pretty output
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::FITCOACH_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_str_or_default(env::var("LOG_FORMAT").as_deref().unwrap_or(""));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::FITCOACH_SERVER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter, applying noise reduction on top of the configured level
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |env_directive| EnvFilter::new(env_directive),
        );

        base.add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "hyper::proto=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "tower_http=info"
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
        .add_directive(
            format!("fitcoach_server={}", self.level)
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();

        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Fitcoach server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
///
/// Events carry categorical fields only. Free-text profile fields such as
/// health conditions are never logged.
pub struct AppLogger;

impl AppLogger {
    /// Log a successfully generated consultation
    pub fn log_consultation_generated(
        goal: FitnessGoal,
        consultation_type: ConsultationType,
        has_health_conditions: bool,
        advice_bytes: usize,
        duration_ms: u64,
    ) {
        info!(
            event_type = "consultation_generated",
            goal = goal.as_str(),
            consultation_type = consultation_type.as_str(),
            has_health_conditions = has_health_conditions,
            advice_bytes = advice_bytes,
            duration_ms = duration_ms,
            "Consultation generated"
        );
    }

    /// Log a consultation rejected during validation or generation
    pub fn log_consultation_rejected(code: ErrorCode, field: Option<&str>, duration_ms: u64) {
        warn!(
            event_type = "consultation_rejected",
            error.code = ?code,
            error.field = field.unwrap_or(""),
            duration_ms = duration_ms,
            "Consultation rejected"
        );
    }
}
