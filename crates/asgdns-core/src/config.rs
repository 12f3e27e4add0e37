//! Configuration types for the lifecycle DNS handler
//!
//! This module defines the configuration consumed by the handler. Loading
//! from the environment lives in the binary crate; this module only holds
//! the validated values.

use serde::{Deserialize, Serialize};

/// Default TTL for the managed record, in seconds
pub const DEFAULT_RECORD_TTL: i64 = 300;

/// Default value of the `Name` tag that selects group members
pub const DEFAULT_NAME_TAG_VALUE: &str = "Jenkins-Spot";

/// Handler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Hosted zone identifier the record lives in
    pub zone_id: String,

    /// Fully qualified record name to upsert (e.g. "ci.example.com")
    pub record_name: String,

    /// Value of the `Name` tag that selects group members
    #[serde(default = "default_tag_value")]
    pub tag_value: String,

    /// TTL for the managed record, in seconds
    #[serde(default = "default_ttl")]
    pub ttl: i64,
}

impl HandlerConfig {
    /// Create a configuration with default tag value and TTL
    pub fn new(zone_id: impl Into<String>, record_name: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            record_name: record_name.into(),
            tag_value: DEFAULT_NAME_TAG_VALUE.to_string(),
            ttl: DEFAULT_RECORD_TTL,
        }
    }

    /// Override the `Name` tag value
    pub fn with_tag_value(mut self, tag_value: impl Into<String>) -> Self {
        self.tag_value = tag_value.into();
        self
    }

    /// Override the record TTL
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = ttl;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.zone_id.is_empty() {
            return Err(crate::Error::config("Zone ID cannot be empty"));
        }

        if self.tag_value.is_empty() {
            return Err(crate::Error::config("Name tag value cannot be empty"));
        }

        if self.ttl <= 0 {
            return Err(crate::Error::config(format!(
                "Record TTL must be positive. Got: {}",
                self.ttl
            )));
        }

        validate_domain_name(&self.record_name)?;

        Ok(())
    }
}

fn default_tag_value() -> String {
    DEFAULT_NAME_TAG_VALUE.to_string()
}

fn default_ttl() -> i64 {
    DEFAULT_RECORD_TTL
}

/// Validate that a string is a valid domain name
///
/// This implements basic DNS domain name validation per RFC 1035.
/// It's not comprehensive but catches common errors.
fn validate_domain_name(domain: &str) -> Result<(), crate::Error> {
    if domain.is_empty() {
        return Err(crate::Error::config("Record name cannot be empty"));
    }

    // Total length limit (RFC 1035: 253 chars max). A single trailing dot
    // is allowed, Route 53 style.
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.len() > 253 {
        return Err(crate::Error::config(format!(
            "Record name too long: {} chars (max 253)",
            domain.len()
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(crate::Error::config(format!(
                "Record name has empty label: '{}'",
                domain
            )));
        }

        if label.len() > 63 {
            return Err(crate::Error::config(format!(
                "Record label too long: {} chars (max 63). Label: '{}'",
                label.len(),
                label
            )));
        }

        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err(crate::Error::config(format!(
                "Record label contains invalid characters. Label: '{}'. \
                Valid: alphanumeric and hyphen only.",
                label
            )));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(crate::Error::config(format!(
                "Record label cannot start or end with hyphen. Label: '{}'",
                label
            )));
        }
    }

    Ok(())
}
