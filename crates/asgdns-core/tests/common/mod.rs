//! Test doubles and common utilities for handler contract tests
//!
//! This module provides minimal test doubles that verify the handler's
//! contract without touching real cloud APIs.

use asgdns_core::config::HandlerConfig;
use asgdns_core::error::{Error, Result};
use asgdns_core::traits::{
    DnsProvider, InstanceDirectory, InstanceRecord, RecordChange, TagFilter,
};
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted InstanceDirectory that returns a fixed response and counts calls
pub struct ScriptedDirectory {
    /// Instances to return, in response order
    instances: Vec<InstanceRecord>,
    /// Whether the query should fail instead
    fail: bool,
    /// Call counter for find_running()
    query_call_count: Arc<AtomicUsize>,
    /// Recorded filters from queries
    seen_filters: Arc<std::sync::Mutex<Vec<TagFilter>>>,
}

impl ScriptedDirectory {
    /// Create a directory returning the given instances
    pub fn returning(instances: Vec<InstanceRecord>) -> Self {
        Self {
            instances,
            fail: false,
            query_call_count: Arc::new(AtomicUsize::new(0)),
            seen_filters: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Create an empty directory (no matching instances)
    pub fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Create a directory whose query always fails
    pub fn failing() -> Self {
        Self {
            instances: Vec::new(),
            fail: true,
            query_call_count: Arc::new(AtomicUsize::new(0)),
            seen_filters: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Get the number of times find_running() was called
    pub fn query_call_count(&self) -> usize {
        self.query_call_count.load(Ordering::SeqCst)
    }

    /// Get the filters the handler queried with
    pub fn seen_filters(&self) -> Vec<TagFilter> {
        self.seen_filters.lock().unwrap().clone()
    }

    /// Create a ScriptedDirectory that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            instances: other.instances.clone(),
            fail: other.fail,
            query_call_count: Arc::clone(&other.query_call_count),
            seen_filters: Arc::clone(&other.seen_filters),
        }
    }
}

#[async_trait::async_trait]
impl InstanceDirectory for ScriptedDirectory {
    async fn find_running(&self, filter: &TagFilter) -> Result<Vec<InstanceRecord>> {
        self.query_call_count.fetch_add(1, Ordering::SeqCst);
        self.seen_filters.lock().unwrap().push(filter.clone());

        if self.fail {
            return Err(Error::directory("scripted query failure"));
        }

        Ok(self.instances.clone())
    }

    fn directory_name(&self) -> &'static str {
        "scripted"
    }
}

/// A mock DnsProvider that records submitted changes
pub struct MockDnsProvider {
    /// Call counter for upsert_record()
    upsert_call_count: Arc<AtomicUsize>,
    /// Recorded changes from upsert calls
    submitted_changes: Arc<std::sync::Mutex<Vec<RecordChange>>>,
    /// Whether submissions should fail
    fail: bool,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            upsert_call_count: Arc::new(AtomicUsize::new(0)),
            submitted_changes: Arc::new(std::sync::Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Create a provider whose submissions always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Get the number of times upsert_record() was called
    pub fn upsert_call_count(&self) -> usize {
        self.upsert_call_count.load(Ordering::SeqCst)
    }

    /// Get the changes that were submitted
    pub fn submitted_changes(&self) -> Vec<RecordChange> {
        self.submitted_changes.lock().unwrap().clone()
    }

    /// Create a MockDnsProvider that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            upsert_call_count: Arc::clone(&other.upsert_call_count),
            submitted_changes: Arc::clone(&other.submitted_changes),
            fail: other.fail,
        }
    }
}

#[async_trait::async_trait]
impl DnsProvider for MockDnsProvider {
    async fn upsert_record(&self, change: &RecordChange) -> Result<()> {
        self.upsert_call_count.fetch_add(1, Ordering::SeqCst);
        self.submitted_changes.lock().unwrap().push(change.clone());

        if self.fail {
            return Err(Error::provider("mock", "scripted upsert failure"));
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Helper to create a minimal HandlerConfig for testing
pub fn minimal_config(record_name: &str) -> HandlerConfig {
    HandlerConfig::new("Z0123456789ABCDEF", record_name)
}

/// Helper to build the embedded message JSON for an event name
pub fn message_for(event: &str) -> String {
    serde_json::json!({
        "Event": event,
        "AutoScalingGroupName": "ci-agents",
        "EC2InstanceId": "i-0123456789abcdef0",
    })
    .to_string()
}

/// Helper to build an instance record with a parsed address
pub fn instance(id: &str, public_ip: Option<&str>) -> InstanceRecord {
    InstanceRecord::new(
        id,
        public_ip.map(|ip| ip.parse::<IpAddr>().expect("valid test address")),
    )
}
