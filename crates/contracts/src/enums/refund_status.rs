use serde::{Deserialize, Serialize};

/// Processing state of a refund request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefundStatus {
    Pending,
    Processed,
    Rejected,
}

impl RefundStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "pending",
            RefundStatus::Processed => "processed",
            RefundStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RefundStatus::Pending => "Pending",
            RefundStatus::Processed => "Processed",
            RefundStatus::Rejected => "Rejected",
        }
    }

    pub fn all() -> Vec<RefundStatus> {
        vec![
            RefundStatus::Pending,
            RefundStatus::Processed,
            RefundStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(RefundStatus::Pending),
            "processed" => Some(RefundStatus::Processed),
            "rejected" => Some(RefundStatus::Rejected),
            _ => None,
        }
    }
}
