// # Instance Directory Trait
//
// Defines the interface for querying the compute inventory for running
// instances matching a tag filter.
//
// ## Implementations
//
// - EC2 DescribeInstances: `asgdns-directory-ec2` crate
// - Future: other inventory backends
//
// ## Usage
//
// ```rust,ignore
// use asgdns_core::traits::{InstanceDirectory, TagFilter};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let directory = /* InstanceDirectory implementation */;
//
//     let filter = TagFilter::name("Jenkins-Spot");
//     let instances = directory.find_running(&filter).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;
use std::net::IpAddr;

/// Tag key/value predicate used to select instances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    /// Tag key (e.g. "Name")
    pub key: String,
    /// Tag value the key must equal
    pub value: String,
}

impl TagFilter {
    /// Create a filter on an arbitrary tag key
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a filter on the conventional "Name" tag
    pub fn name(value: impl Into<String>) -> Self {
        Self::new("Name", value)
    }
}

/// One compute instance as reported by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Instance identifier (e.g. "i-0123456789abcdef0")
    pub id: String,
    /// Public address, if the instance has one assigned
    pub public_ip: Option<IpAddr>,
}

impl InstanceRecord {
    /// Create a new instance record
    pub fn new(id: impl Into<String>, public_ip: Option<IpAddr>) -> Self {
        Self {
            id: id.into(),
            public_ip,
        }
    }
}

/// Trait for instance directory implementations
///
/// This trait defines the read-only inventory query used to discover the
/// current member of the autoscaling group.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Constraints
///
/// Directory implementations are single-shot queries with strict limitations:
///
/// - Perform exactly one inventory API call per invocation
/// - No retry logic (the invoking trigger owns redelivery)
/// - No caching across invocations (the handler is stateless)
/// - No task spawning
/// - No mutation of any kind (the query is read-only)
#[async_trait]
pub trait InstanceDirectory: Send + Sync {
    /// Find running instances matching the tag filter
    ///
    /// Returns matching instances in the directory's response order,
    /// flattened across reservations with the outer order preserved.
    /// The handler treats that order as arbitrary and only consumes the
    /// first element.
    ///
    /// # Parameters
    ///
    /// - `filter`: The tag predicate instances must match
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<InstanceRecord>)`: Matching running instances (possibly empty)
    /// - `Err(Error)`: If the inventory query failed
    async fn find_running(&self, filter: &TagFilter) -> Result<Vec<InstanceRecord>, crate::Error>;

    /// Get the directory name (for logging/debugging)
    fn directory_name(&self) -> &'static str;
}
