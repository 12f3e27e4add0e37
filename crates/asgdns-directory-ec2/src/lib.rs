// # EC2 Instance Directory
//
// This crate provides an EC2-backed instance directory for the lifecycle
// DNS handler.
//
// ## Implementation
//
// - Makes one DescribeInstances request per invocation, with two filters:
//   `tag:<key>` equals the configured value, and `instance-state-name`
//   equals `running`
// - Flattens reservations into a single instance list, preserving the
//   response order (reservations outer, instances inner)
// - NO retry logic (the invoking trigger owns redelivery)
// - NO caching (the handler is stateless)
// - NO pagination: the managed group holds a single instance, which is
//   always on the first response page
//
// ## API Reference
//
// - EC2 DescribeInstances:
//   https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeInstances.html

use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{Filter, Reservation};
use asgdns_core::traits::{InstanceDirectory, InstanceRecord, TagFilter};
use asgdns_core::{Error, Result};
use std::net::IpAddr;

/// Filter name selecting on instance lifecycle state
const STATE_FILTER_NAME: &str = "instance-state-name";

/// Lifecycle state the directory selects for
const STATE_RUNNING: &str = "running";

/// EC2-backed instance directory
///
/// Holds a configured SDK client; credentials and region come from the
/// ambient AWS environment (instance role, Lambda execution role, env vars).
#[derive(Debug, Clone)]
pub struct Ec2Directory {
    client: aws_sdk_ec2::Client,
}

impl Ec2Directory {
    /// Create a directory from a configured EC2 client
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }

    /// Create a directory from a shared SDK configuration
    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(aws_sdk_ec2::Client::new(config))
    }
}

#[async_trait]
impl InstanceDirectory for Ec2Directory {
    async fn find_running(&self, filter: &TagFilter) -> Result<Vec<InstanceRecord>> {
        tracing::debug!(
            "DescribeInstances: tag:{}={}, state={}",
            filter.key,
            filter.value,
            STATE_RUNNING
        );

        let response = self
            .client
            .describe_instances()
            .filters(
                Filter::builder()
                    .name(format!("tag:{}", filter.key))
                    .values(&filter.value)
                    .build(),
            )
            .filters(
                Filter::builder()
                    .name(STATE_FILTER_NAME)
                    .values(STATE_RUNNING)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| {
                Error::directory(format!(
                    "DescribeInstances request failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        collect_instances(response.reservations())
    }

    fn directory_name(&self) -> &'static str {
        "ec2"
    }
}

/// Flatten reservations into instance records, preserving response order
fn collect_instances(reservations: &[Reservation]) -> Result<Vec<InstanceRecord>> {
    let mut records = Vec::new();

    for reservation in reservations {
        for instance in reservation.instances() {
            let id = instance
                .instance_id()
                .ok_or_else(|| Error::directory("DescribeInstances returned an instance without an id"))?;

            let public_ip = instance
                .public_ip_address()
                .map(|raw| {
                    raw.parse::<IpAddr>().map_err(|_| {
                        Error::directory(format!(
                            "Instance {} has an unparsable public address: {}",
                            id, raw
                        ))
                    })
                })
                .transpose()?;

            records.push(InstanceRecord::new(id, public_ip));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::Instance;

    fn instance(id: &str, ip: Option<&str>) -> Instance {
        let mut builder = Instance::builder().instance_id(id);
        if let Some(ip) = ip {
            builder = builder.public_ip_address(ip);
        }
        builder.build()
    }

    #[test]
    fn flattening_preserves_reservation_then_instance_order() {
        let reservations = vec![
            Reservation::builder()
                .instances(instance("i-a", Some("10.0.0.1")))
                .instances(instance("i-b", None))
                .build(),
            Reservation::builder()
                .instances(instance("i-c", Some("10.0.0.3")))
                .build(),
        ];

        let records = collect_instances(&reservations).expect("flattening succeeds");
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["i-a", "i-b", "i-c"]);
        assert_eq!(records[0].public_ip.unwrap().to_string(), "10.0.0.1");
        assert_eq!(records[1].public_ip, None);
    }

    #[test]
    fn empty_reservations_yield_no_records() {
        let records = collect_instances(&[]).expect("flattening succeeds");
        assert!(records.is_empty());
    }

    #[test]
    fn unparsable_public_address_is_a_directory_error() {
        let reservations = vec![
            Reservation::builder()
                .instances(instance("i-a", Some("not-an-ip")))
                .build(),
        ];

        assert!(collect_instances(&reservations).is_err());
    }
}
