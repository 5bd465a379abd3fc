use serde::{Deserialize, Serialize};

/// Payment instrument reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    Upi,
    Card,
    Netbanking,
    Wallet,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::Netbanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::Netbanking => "Net banking",
            PaymentMethod::Wallet => "Wallet",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Upi,
            PaymentMethod::Card,
            PaymentMethod::Netbanking,
            PaymentMethod::Wallet,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "upi" => Some(PaymentMethod::Upi),
            "card" => Some(PaymentMethod::Card),
            "netbanking" => Some(PaymentMethod::Netbanking),
            "wallet" => Some(PaymentMethod::Wallet),
            _ => None,
        }
    }
}
