use serde::{Deserialize, Serialize};

/// Sale state of a single VIP number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VipNumberStatus {
    Available,
    Booked,
    Sold,
}

impl VipNumberStatus {
    pub fn code(&self) -> &'static str {
        match self {
            VipNumberStatus::Available => "available",
            VipNumberStatus::Booked => "booked",
            VipNumberStatus::Sold => "sold",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VipNumberStatus::Available => "Available",
            VipNumberStatus::Booked => "Booked",
            VipNumberStatus::Sold => "Sold",
        }
    }

    pub fn all() -> Vec<VipNumberStatus> {
        vec![
            VipNumberStatus::Available,
            VipNumberStatus::Booked,
            VipNumberStatus::Sold,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(VipNumberStatus::Available),
            "booked" => Some(VipNumberStatus::Booked),
            "sold" => Some(VipNumberStatus::Sold),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for status in VipNumberStatus::all() {
            assert_eq!(VipNumberStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(VipNumberStatus::from_code("reserved"), None);
    }
}
