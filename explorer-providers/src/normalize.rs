//! Pure mappers from each upstream payload shape to the unified instance
//! record. These never fail: a record that cannot be mapped is skipped and
//! the skip count is surfaced through a warn event.

use aws_sdk_ec2::operation::describe_instances::DescribeInstancesOutput;
use explorer_common::NormalizedInstance;
use serde_json::Value;

/// Flatten an EC2 `DescribeInstances` result into instance rows.
///
/// Public IP/DNS win over private; the lifecycle state name becomes the
/// status string.
pub fn ec2_instances(output: &DescribeInstancesOutput) -> Vec<NormalizedInstance> {
    let mut instances = Vec::new();
    let mut dropped = 0usize;

    for reservation in output.reservations() {
        for instance in reservation.instances() {
            let Some(id) = instance.instance_id() else {
                dropped += 1;
                continue;
            };
            let status = instance
                .state()
                .and_then(|s| s.name())
                .map(|n| n.as_str())
                .unwrap_or_default();
            let mut row = NormalizedInstance::new(id, status);
            row.ip = first_nonempty(instance.public_ip_address(), instance.private_ip_address());
            row.hostname = first_nonempty(instance.public_dns_name(), instance.private_dns_name());
            instances.push(row);
        }
    }

    warn_dropped("EC2", dropped);
    instances
}

/// Map the RDS management API response.
///
/// The payload carries its own `isSuccess` flag; anything else than an
/// explicit success with an array yields an empty listing.
pub fn rds_instances(payload: &Value) -> Vec<NormalizedInstance> {
    let mut instances = Vec::new();
    let mut dropped = 0usize;

    if payload.get("isSuccess").and_then(Value::as_bool) == Some(true) {
        if let Some(records) = payload.get("rds_data").and_then(Value::as_array) {
            for record in records {
                let name = record.get("instance_name").and_then(Value::as_str);
                let status = record.get("status").and_then(Value::as_str);
                let (Some(name), Some(status)) = (name, status) else {
                    dropped += 1;
                    continue;
                };
                let mut row = NormalizedInstance::new(name, status);
                row.endpoint = owned_str(record.get("endpoint"));
                row.engine = owned_str(record.get("engine"));
                instances.push(row);
            }
        }
    }

    warn_dropped("RDS", dropped);
    instances
}

/// Map the GCP Compute Engine listing response (`list_output` array).
pub fn gcp_instances(payload: &Value) -> Vec<NormalizedInstance> {
    let mut instances = Vec::new();
    let mut dropped = 0usize;

    if let Some(records) = payload.get("list_output").and_then(Value::as_array) {
        for record in records {
            let id = record.get("instance_id").and_then(Value::as_str);
            let status = record.get("status").and_then(Value::as_str);
            let (Some(id), Some(status)) = (id, status) else {
                dropped += 1;
                continue;
            };
            let mut row = NormalizedInstance::new(id, status);
            row.zone = owned_str(record.get("zone"));
            row.ip = owned_str(record.get("ip"));
            instances.push(row);
        }
    }

    warn_dropped("GCP", dropped);
    instances
}

fn first_nonempty(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .map(str::to_string)
}

fn owned_str(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn warn_dropped(family: &str, dropped: usize) {
    if dropped > 0 {
        tracing::warn!(family, dropped, "Skipped upstream records that could not be mapped");
    }
}
