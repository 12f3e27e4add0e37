// # DNS Provider Trait
//
// Defines the interface for upserting DNS records via provider APIs.
//
// ## Implementations
//
// - Route 53: `asgdns-provider-route53` crate
// - Future: Cloudflare, DigitalOcean, etc.
//
// ## Constraints
//
// Providers are single-shot integrations with strict limitations:
//
// - Perform exactly one mutating API call per invocation
// - No retry or backoff logic (the invoking trigger owns redelivery)
// - No caching (the handler is stateless)
// - No task spawning
//
// If providers implemented their own retries, the hosting trigger's
// redelivery policy and the provider's retries would compound into API
// storms. The correct approach is to return an error and let the trigger
// redeliver the notification.

use async_trait::async_trait;
use std::net::IpAddr;

/// DNS record type derived from the address family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// A record (IPv4)
    A,
    /// AAAA record (IPv6)
    Aaaa,
}

impl RecordType {
    /// The wire-format type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
        }
    }
}

/// A single upsert instruction for one address record
///
/// Upsert semantics: create the record if absent, overwrite it if present.
/// Submitting the same change twice is safe and converges on the same
/// record state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    /// Fully qualified record name (e.g. "ci.example.com")
    pub name: String,
    /// Time-to-live in seconds
    pub ttl: i64,
    /// Target address the record should point at
    pub value: IpAddr,
}

impl RecordChange {
    /// Create a new record change
    pub fn new(name: impl Into<String>, ttl: i64, value: IpAddr) -> Self {
        Self {
            name: name.into(),
            ttl,
            value,
        }
    }

    /// Record type implied by the address family
    pub fn record_type(&self) -> RecordType {
        match self.value {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::Aaaa,
        }
    }
}

/// Trait for DNS provider implementations
///
/// This trait defines the interface for upserting DNS records.
/// Implementations must handle the specifics of each provider's API.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Upsert a DNS record
    ///
    /// # Idempotency
    ///
    /// This method must be idempotent: submitting the same change multiple
    /// times must be safe and leave the record in the same state as a
    /// single submission.
    ///
    /// # Parameters
    ///
    /// - `change`: The record name, TTL and target address to apply
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The change was accepted by the provider
    /// - `Err(Error)`: If the submission failed
    async fn upsert_record(&self, change: &RecordChange) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    ///
    /// # Returns
    ///
    /// A static string identifying the provider (e.g. "route53")
    fn provider_name(&self) -> &'static str;
}
