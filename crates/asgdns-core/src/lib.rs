// # asgdns-core
//
// Core library for the autoscaling lifecycle DNS handler.
//
// ## Architecture Overview
//
// This library provides the core functionality for keeping a DNS record
// pointed at the current member of an autoscaling group:
// - **InstanceDirectory**: Trait for querying running instances by tag
// - **DnsProvider**: Trait for upserting DNS records via provider APIs
// - **LifecycleHandler**: Handler that runs the notification → lookup → upsert flow
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic is separate from AWS integrations
// 2. **Single-Shot**: One invocation handles one notification, start to finish
// 3. **Library-First**: The handler is fully testable against mock seams
// 4. **Idempotency**: The only mutation is an upsert keyed by a fixed record
//    name, so repeated or concurrent invocations converge on the same state

pub mod traits;
pub mod handler;
pub mod event;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{InstanceDirectory, DnsProvider};
pub use handler::{LifecycleHandler, HandlerResponse};
pub use event::{NotificationMessage, ScalingEvent};
pub use config::HandlerConfig;
pub use error::{Error, Result};
