//! Wallet connection removal workflow states.

use serde::{Deserialize, Serialize};

/// Status of a wallet-removal request. A connection starts at `None`;
/// the owner moves it to `Pending`; an admin resolves it to `Approved`
/// (connection deleted) or `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalStatus {
    None,
    Pending,
    Approved,
    Rejected,
}

impl RemovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}
