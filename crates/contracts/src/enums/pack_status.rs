use serde::{Deserialize, Serialize};

/// Sale state of a number pack; a pack is partially sold while some but
/// not all of its numbers have been taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackStatus {
    Available,
    PartiallySold,
    Sold,
}

impl PackStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PackStatus::Available => "available",
            PackStatus::PartiallySold => "partially-sold",
            PackStatus::Sold => "sold",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PackStatus::Available => "Available",
            PackStatus::PartiallySold => "Partially sold",
            PackStatus::Sold => "Sold",
        }
    }

    pub fn all() -> Vec<PackStatus> {
        vec![
            PackStatus::Available,
            PackStatus::PartiallySold,
            PackStatus::Sold,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(PackStatus::Available),
            "partially-sold" => Some(PackStatus::PartiallySold),
            "sold" => Some(PackStatus::Sold),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for status in PackStatus::all() {
            assert_eq!(PackStatus::from_code(status.code()), Some(status));
        }
    }
}
