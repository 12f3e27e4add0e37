//! Core traits for the lifecycle DNS handler
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`InstanceDirectory`]: Query running instances by tag
//! - [`DnsProvider`]: Upsert DNS records via provider APIs

pub mod instance_directory;
pub mod dns_provider;

pub use instance_directory::{InstanceDirectory, InstanceRecord, TagFilter};
pub use dns_provider::{DnsProvider, RecordChange, RecordType};
