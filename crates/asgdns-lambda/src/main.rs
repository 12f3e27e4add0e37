// # asgdns-lambda - Lambda Entry Point
//
// Thin integration layer for the lifecycle DNS handler.
//
// This binary is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing tracing and the AWS SDK clients
// 3. Wiring the EC2 directory and Route 53 provider into the handler
// 4. Serving notifications via the Lambda runtime
//
// All handler logic lives in asgdns-core; do not add business logic, DNS
// logic, or retry logic here.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `ZONE_ID`: Hosted zone id the record lives in (required)
// - `RECORD_NAME`: Fully qualified record name to upsert (required)
// - `ASGDNS_NAME_TAG`: Value of the `Name` tag selecting group members
//   (optional, defaults to "Jenkins-Spot")
// - `ASGDNS_DRY_RUN`: If "true"/"1", log the intended change without
//   submitting it (optional)
// - `ASGDNS_LOG_LEVEL`: Log level filter (optional, defaults to "info")
//
// ## Example
//
// ```bash
// export ZONE_ID=Z0123456789ABCDEF
// export RECORD_NAME=ci.example.com
// ```

use anyhow::{Context, Result};
use asgdns_core::{HandlerConfig, HandlerResponse, LifecycleHandler};
use asgdns_directory_ec2::Ec2Directory;
use asgdns_provider_route53::Route53Provider;
use aws_config::BehaviorVersion;
use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{Error as LambdaError, LambdaEvent, run, service_fn};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment configuration for the binary
struct EnvConfig {
    zone_id: String,
    record_name: String,
    tag_value: Option<String>,
    dry_run: bool,
    log_level: String,
}

impl EnvConfig {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            zone_id: env::var("ZONE_ID").context(
                "ZONE_ID is required. Set it via: export ZONE_ID=Z0123456789ABCDEF",
            )?,
            record_name: env::var("RECORD_NAME").context(
                "RECORD_NAME is required. Set it via: export RECORD_NAME=ci.example.com",
            )?,
            tag_value: env::var("ASGDNS_NAME_TAG").ok(),
            dry_run: env::var("ASGDNS_DRY_RUN")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_level: env::var("ASGDNS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Build the validated handler configuration
    fn handler_config(&self) -> Result<HandlerConfig> {
        let mut config = HandlerConfig::new(&self.zone_id, &self.record_name);
        if let Some(ref tag_value) = self.tag_value {
            config = config.with_tag_value(tag_value);
        }
        config.validate()?;
        Ok(config)
    }
}

/// Handle one SNS-delivered notification
///
/// The trigger delivers one SNS record per invocation; an envelope with no
/// records is malformed input. Handler errors (malformed message, external
/// API faults) propagate as invocation failures so SNS redelivery applies.
async fn handle_notification(
    handler: &LifecycleHandler,
    event: LambdaEvent<SnsEvent>,
) -> Result<HandlerResponse, LambdaError> {
    let record = event
        .payload
        .records
        .first()
        .ok_or_else(|| asgdns_core::Error::invalid_input("SNS event contains no records"))?;

    Ok(handler.handle(&record.sns.message).await?)
}

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let env_config = EnvConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&env_config.log_level)),
        )
        .json()
        // CloudWatch adds its own timestamp and the target is noise here
        .with_target(false)
        .init();

    let config = env_config.handler_config()?;
    info!(
        "Starting lifecycle DNS handler: record {} in zone {} (dry_run={})",
        config.record_name, config.zone_id, env_config.dry_run
    );

    let aws = aws_config::load_defaults(BehaviorVersion::latest()).await;

    let directory = Ec2Directory::new(aws_sdk_ec2::Client::new(&aws));
    let route53 = aws_sdk_route53::Client::new(&aws);
    let provider = if env_config.dry_run {
        Route53Provider::new_dry_run(route53, &config.zone_id)
    } else {
        Route53Provider::new_live(route53, &config.zone_id)
    };

    let handler = LifecycleHandler::new(Box::new(directory), Box::new(provider), config)?;
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        handle_notification(handler, event).await
    }))
    .await
}
