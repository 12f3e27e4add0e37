//! Notification message decoding
//!
//! An autoscaling group publishes lifecycle notifications to an SNS topic.
//! The SNS envelope carries the autoscaling payload as a JSON string in its
//! `Message` field; this module decodes that embedded payload and classifies
//! the `Event` it announces.
//!
//! Only launch and terminate events trigger a DNS update. Everything else
//! (test notifications, launch errors, unknown future events) is ignored
//! without being treated as an error.

use serde::Deserialize;

use crate::error::Result;

/// `Event` value announcing an instance launch
pub const EVENT_INSTANCE_LAUNCH: &str = "autoscaling:EC2_INSTANCE_LAUNCH";

/// `Event` value announcing an instance termination
pub const EVENT_INSTANCE_TERMINATE: &str = "autoscaling:EC2_INSTANCE_TERMINATE";

/// Classified autoscaling lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalingEvent {
    /// An instance was launched into the group
    InstanceLaunch,
    /// An instance was terminated from the group
    InstanceTerminate,
    /// Any other event (test notification, launch error, ...)
    Other(String),
}

impl ScalingEvent {
    /// Classify a raw `Event` string
    pub fn parse(raw: &str) -> Self {
        match raw {
            EVENT_INSTANCE_LAUNCH => Self::InstanceLaunch,
            EVENT_INSTANCE_TERMINATE => Self::InstanceTerminate,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether this event should trigger a DNS update
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::InstanceLaunch | Self::InstanceTerminate)
    }
}

impl std::fmt::Display for ScalingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InstanceLaunch => f.write_str(EVENT_INSTANCE_LAUNCH),
            Self::InstanceTerminate => f.write_str(EVENT_INSTANCE_TERMINATE),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// Decoded autoscaling notification payload
///
/// The payload carries many more fields (activity id, cause, instance id,
/// progress); only `Event` is consumed here, the rest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationMessage {
    /// The autoscaling event name (e.g. "autoscaling:EC2_INSTANCE_LAUNCH")
    #[serde(rename = "Event")]
    pub event: String,
}

impl NotificationMessage {
    /// Decode the embedded message from its JSON text
    ///
    /// # Returns
    ///
    /// - `Ok(NotificationMessage)`: The decoded payload
    /// - `Err(Error)`: If the text is not JSON or lacks an `Event` field
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Classify the event announced by this message
    pub fn scaling_event(&self) -> ScalingEvent {
        ScalingEvent::parse(&self.event)
    }
}
