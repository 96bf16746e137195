//! Signal class discriminator for the user I/O board.
//!
//! Every signal belongs to exactly one of four classes. Register addresses
//! are only meaningful together with their class.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

// ─── SignalClass ────────────────────────────────────────────────────

/// User I/O signal class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum SignalClass {
    /// Digital input.
    Di = 0,
    /// Digital output.
    Do = 1,
    /// Analog input.
    Ai = 2,
    /// Analog output.
    Ao = 3,
}

impl SignalClass {
    /// All classes in table order.
    pub const ALL: [Self; 4] = [Self::Di, Self::Do, Self::Ai, Self::Ao];

    /// Lowercase token used by `Display`, `FromStr` and serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Di => "di",
            Self::Do => "do",
            Self::Ai => "ai",
            Self::Ao => "ao",
        }
    }

    pub const fn direction(self) -> SignalDirection {
        match self {
            Self::Di | Self::Ai => SignalDirection::Input,
            Self::Do | Self::Ao => SignalDirection::Output,
        }
    }

    pub const fn kind(self) -> SignalKind {
        match self {
            Self::Di | Self::Do => SignalKind::Digital,
            Self::Ai | Self::Ao => SignalKind::Analog,
        }
    }
}

impl fmt::Display for SignalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalClass {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "di" => Ok(Self::Di),
            "do" => Ok(Self::Do),
            "ai" => Ok(Self::Ai),
            "ao" => Ok(Self::Ao),
            _ => Err(format!(
                "unknown SignalClass: {s:?}, expected one of di, do, ai, ao"
            )),
        }
    }
}

// ─── Direction / Kind ───────────────────────────────────────────────

/// Data direction as seen from the robot controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Input,
    Output,
}

/// Value domain of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Binary-valued.
    Digital,
    /// Continuous-valued.
    Analog,
}
