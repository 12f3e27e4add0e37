//! Core lifecycle handler
//!
//! The LifecycleHandler is responsible for:
//! - Classifying the autoscaling event carried by a notification
//! - Querying the InstanceDirectory for the current group member
//! - Upserting the DNS record via DnsProvider
//!
//! ## Event Flow
//!
//! ```text
//! ┌──────────────┐
//! │ Notification │─── embedded message ───┐
//! └──────────────┘                        ▼
//!                              ┌──────────────────┐
//!                              │ LifecycleHandler │
//!                              └──────────────────┘
//!                                        │
//!                     ┌──────────────────┴──────────────────┐
//!                     ▼                                     ▼
//!          ┌───────────────────┐                  ┌──────────────┐
//!          │ InstanceDirectory │                  │ DnsProvider  │
//!          │ (query)           │                  │ (upsert)     │
//!          └───────────────────┘                  └──────────────┘
//! ```
//!
//! 1. Decode the embedded message, classify the `Event`
//! 2. Not a lifecycle event → no-op response, no side effects
//! 3. Query the directory for running instances matching the Name tag
//! 4. Take the first match, require a public address
//! 5. Upsert the record (type A, fixed name, configured TTL)
//!
//! The flow is strictly sequential: at most one read query followed by at
//! most one record mutation per invocation.

use crate::config::HandlerConfig;
use crate::error::Result;
use crate::event::NotificationMessage;
use crate::traits::{DnsProvider, InstanceDirectory, RecordChange, TagFilter};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Response body when the event is not a lifecycle event
pub const MSG_NO_ACTION: &str = "No action taken";

/// Response body when the directory returns no running instances
pub const MSG_NO_INSTANCES: &str = "No running instances found in ASG";

/// Response body when the selected instance has no public address
pub const MSG_NO_PUBLIC_IP: &str = "No public IP found for running instance";

/// Result of one handler invocation
///
/// Serializes to the `{"statusCode": ..., "body": ...}` shape the invoking
/// trigger expects. Status 200 covers both the applied-update and no-op
/// cases; status 400 covers the two no-instance conditions. External API
/// faults are not represented here: they propagate as `Err` so the
/// trigger's own redelivery machinery sees a failed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    /// Numeric status code (200 success/no-op, 400 failure)
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Human-readable outcome description
    pub body: String,
}

impl HandlerResponse {
    /// Build a success (200) response
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    /// Build a failure (400) response
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            body: body.into(),
        }
    }

    /// Whether this response reports success
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// Core lifecycle handler
///
/// The handler orchestrates the notification → lookup → upsert flow.
/// One invocation handles one notification, start to finish; the handler
/// itself keeps no state between invocations.
///
/// ## Concurrency
///
/// The hosting environment may run invocations concurrently. Because the
/// only mutation is an idempotent upsert keyed by the fixed record name,
/// concurrent invocations converge safely (last writer wins).
pub struct LifecycleHandler {
    /// Instance directory for group member lookup
    directory: Box<dyn InstanceDirectory>,

    /// DNS provider for upserting the record
    provider: Box<dyn DnsProvider>,

    /// Validated handler configuration
    config: HandlerConfig,
}

impl LifecycleHandler {
    /// Create a new lifecycle handler
    ///
    /// # Parameters
    ///
    /// - `directory`: Instance directory implementation
    /// - `provider`: DNS provider implementation
    /// - `config`: Handler configuration
    ///
    /// # Returns
    ///
    /// - `Ok(LifecycleHandler)`: Ready to handle notifications
    /// - `Err(Error)`: If the configuration is invalid
    pub fn new(
        directory: Box<dyn InstanceDirectory>,
        provider: Box<dyn DnsProvider>,
        config: HandlerConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            directory,
            provider,
            config,
        })
    }

    /// Handle one notification
    ///
    /// `message` is the embedded JSON payload of the notification (the SNS
    /// `Message` field), not the outer envelope.
    ///
    /// # Returns
    ///
    /// - `Ok(HandlerResponse)`: Outcome of the invocation (200 or 400)
    /// - `Err(Error)`: Malformed message, or an external API fault; the
    ///   invoking trigger's redelivery policy governs recovery
    pub async fn handle(&self, message: &str) -> Result<HandlerResponse> {
        let notification = NotificationMessage::from_json(message)?;
        let event = notification.scaling_event();

        if !event.is_lifecycle() {
            debug!("Ignoring non-lifecycle event: {}", event);
            return Ok(HandlerResponse::ok(MSG_NO_ACTION));
        }

        info!("Handling lifecycle event: {}", event);

        let filter = TagFilter::name(&self.config.tag_value);
        let instances = self.directory.find_running(&filter).await?;

        // Tie-break: the first instance in response order, arbitrarily.
        // The managed group holds a single instance, so ordering between
        // multiple matches is transient churn during replacement.
        let Some(instance) = instances.first() else {
            warn!(
                "No running instances match tag Name={}",
                self.config.tag_value
            );
            return Ok(HandlerResponse::bad_request(MSG_NO_INSTANCES));
        };

        let Some(public_ip) = instance.public_ip else {
            warn!("Instance {} has no public IP", instance.id);
            return Ok(HandlerResponse::bad_request(MSG_NO_PUBLIC_IP));
        };

        let change = RecordChange::new(&self.config.record_name, self.config.ttl, public_ip);
        debug!(
            "Submitting {} upsert via {}: {} -> {}",
            change.record_type().as_str(),
            self.provider.provider_name(),
            change.name,
            change.value
        );
        self.provider.upsert_record(&change).await?;

        info!(
            "Updated record {} -> {} (instance {})",
            self.config.record_name, public_ip, instance.id
        );

        Ok(HandlerResponse::ok(format!(
            "Updated Route 53 record for {} to {}",
            self.config.record_name, public_ip
        )))
    }
}
