// # Route 53 DNS Provider
//
// This crate provides a Route 53 DNS provider implementation for the
// lifecycle DNS handler.
//
// ## Implementation
//
// - Makes one ChangeResourceRecordSets request per invocation: a change
//   batch containing exactly one UPSERT change
// - Upsert semantics: Route 53 creates the record set if absent and
//   overwrites it if present, so repeated submissions converge
// - Dry-run mode builds and logs the change batch without submitting it
// - NO retry logic (the invoking trigger owns redelivery)
// - NO zone discovery: the hosted zone id is provided by configuration
//
// ## API Reference
//
// - Route 53 ChangeResourceRecordSets:
//   https://docs.aws.amazon.com/Route53/latest/APIReference/API_ChangeResourceRecordSets.html

use async_trait::async_trait;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use asgdns_core::traits::{DnsProvider, RecordChange, RecordType};
use asgdns_core::{Error, Result};

/// Route 53 DNS provider
///
/// Holds a configured SDK client and the hosted zone the managed record
/// lives in. Credentials come from the ambient AWS environment.
///
/// # Dry-Run Mode
///
/// When `dry_run` is true, the provider builds the change batch and logs
/// the intended submission, but does NOT call the API. This allows safe
/// testing against production configuration.
#[derive(Debug, Clone)]
pub struct Route53Provider {
    client: aws_sdk_route53::Client,

    /// Hosted zone the managed record lives in
    zone_id: String,

    /// Dry-run mode: if true, build and log the change but skip submission
    dry_run: bool,
}

impl Route53Provider {
    /// Create a new Route 53 provider
    ///
    /// # Parameters
    ///
    /// - `client`: Configured Route 53 client
    /// - `zone_id`: Hosted zone id (e.g. "Z0123456789ABCDEF")
    /// - `dry_run`: If true, build and log changes but skip submission
    pub fn new(client: aws_sdk_route53::Client, zone_id: impl Into<String>, dry_run: bool) -> Self {
        Self {
            client,
            zone_id: zone_id.into(),
            dry_run,
        }
    }

    /// Create a provider in live mode
    pub fn new_live(client: aws_sdk_route53::Client, zone_id: impl Into<String>) -> Self {
        Self::new(client, zone_id, false)
    }

    /// Create a provider in dry-run mode
    pub fn new_dry_run(client: aws_sdk_route53::Client, zone_id: impl Into<String>) -> Self {
        Self::new(client, zone_id, true)
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    async fn upsert_record(&self, change: &RecordChange) -> Result<()> {
        let batch = build_change_batch(change)?;

        if self.dry_run {
            tracing::info!(
                "[dry-run] Would UPSERT {} {} -> {} (TTL {}) in zone {}",
                change.record_type().as_str(),
                change.name,
                change.value,
                change.ttl,
                self.zone_id
            );
            return Ok(());
        }

        let response = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&self.zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| {
                Error::provider(
                    "route53",
                    format!(
                        "ChangeResourceRecordSets request failed: {}",
                        DisplayErrorContext(&e)
                    ),
                )
            })?;

        if let Some(info) = response.change_info() {
            tracing::debug!(
                "Change {} accepted, status {:?}",
                info.id(),
                info.status()
            );
        }

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "route53"
    }
}

/// Build the single-change UPSERT batch for a record change
fn build_change_batch(change: &RecordChange) -> Result<ChangeBatch> {
    let rr_type = match change.record_type() {
        RecordType::A => RrType::A,
        RecordType::Aaaa => RrType::Aaaa,
    };

    let record = ResourceRecord::builder()
        .value(change.value.to_string())
        .build()
        .map_err(|e| Error::provider("route53", e.to_string()))?;

    let record_set = ResourceRecordSet::builder()
        .name(&change.name)
        .r#type(rr_type)
        .ttl(change.ttl)
        .resource_records(record)
        .build()
        .map_err(|e| Error::provider("route53", e.to_string()))?;

    let upsert = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(record_set)
        .build()
        .map_err(|e| Error::provider("route53", e.to_string()))?;

    ChangeBatch::builder()
        .changes(upsert)
        .build()
        .map_err(|e| Error::provider("route53", e.to_string()))
}
