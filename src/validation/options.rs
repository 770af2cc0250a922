use serde::{Deserialize, Serialize};

use super::report::ValidationSeverity;

/// How out-of-range cross-table indices are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexPolicy {
    /// Treat dangling indices as corruption.
    Reject,
    /// Report dangling indices but keep the model valid.
    #[default]
    Warn,
    /// Treat dangling indices as dead data.
    Ignore,
}

impl IndexPolicy {
    /// Severity to report under this policy, `None` when suppressed.
    pub fn severity(self) -> Option<ValidationSeverity> {
        match self {
            IndexPolicy::Reject => Some(ValidationSeverity::Error),
            IndexPolicy::Warn => Some(ValidationSeverity::Warning),
            IndexPolicy::Ignore => None,
        }
    }
}

/// Options for [`validate_document`](super::validate_document).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOptions {
    pub out_of_range: IndexPolicy,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self {
            out_of_range: IndexPolicy::Reject,
        }
    }
}
