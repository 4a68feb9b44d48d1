//! Signed/unsigned interpretation of the most significant bit

use serde::{Deserialize, Serialize};

/// Whether the top bit of a quantity is a two's-complement sign bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signedness {
    #[default]
    Signed,
    Unsigned,
}

impl Signedness {
    /// Map a legacy numeric code (1 = Signed, 0 = Unsigned)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Signed),
            0 => Some(Self::Unsigned),
            _ => None,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Signed)
    }
}

impl From<bool> for Signedness {
    fn from(signed: bool) -> Self {
        if signed {
            Self::Signed
        } else {
            Self::Unsigned
        }
    }
}

impl std::fmt::Display for Signedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
        })
    }
}
