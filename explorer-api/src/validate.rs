use explorer_common::{ExplorerError, InstanceAction, ResourceRequest};

/// The two request shapes the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Action,
}

/// One validation rule: a pure predicate plus the message the first failure
/// reports. Rules run in table order so the first-failure message is
/// deterministic.
struct Rule {
    check: fn(&ResourceRequest) -> bool,
    message: &'static str,
}

const LIST_RULES: &[Rule] = &[
    Rule {
        check: |r| present(&r.provider),
        message: "Provider is required",
    },
    Rule {
        check: |r| present(&r.service),
        message: "Service is required",
    },
    Rule {
        check: |r| matches!(r.provider_str(), "AWS" | "Azure" | "GCP"),
        message: "Invalid provider. Must be AWS, Azure, or GCP",
    },
    Rule {
        check: |r| r.provider_str() != "AWS" || matches!(r.service_str(), "EC2" | "RDS"),
        message: "Invalid AWS service. Currently supported: EC2, RDS",
    },
    Rule {
        check: |r| r.provider_str() != "Azure" || r.service_str() == "VM",
        message: "Invalid Azure service. Currently supported: VM",
    },
    Rule {
        check: |r| r.provider_str() != "GCP" || r.service_str() == "Compute Engine (VM)",
        message: "Invalid GCP service. Currently supported: Compute Engine (VM)",
    },
    Rule {
        check: |r| present(&r.region),
        message: "Region/Location is required",
    },
    Rule {
        check: |r| r.provider_str() != "GCP" || present(&r.project),
        message: "Project ID is required for GCP",
    },
];

const ACTION_RULES: &[Rule] = &[
    Rule {
        check: |r| present(&r.instance_id),
        message: "Instance id is required",
    },
    Rule {
        check: |r| present(&r.action),
        message: "Action is required",
    },
    Rule {
        check: |r| r.action.as_deref().and_then(InstanceAction::parse).is_some(),
        message: "Invalid action. Must be start, stop, or reboot",
    },
    Rule {
        check: |r| present(&r.region),
        message: "Region/Location is required",
    },
];

/// Check a request against the rule table for its operation kind. The first
/// failing rule's message becomes the input error; a clean pass is `Ok`.
pub fn validate(request: &ResourceRequest, kind: OperationKind) -> Result<(), ExplorerError> {
    let rules = match kind {
        OperationKind::List => LIST_RULES,
        OperationKind::Action => ACTION_RULES,
    };
    for rule in rules {
        if !(rule.check)(request) {
            return Err(ExplorerError::input(rule.message));
        }
    }
    Ok(())
}

// Absent and empty-string both count as missing.
fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}
