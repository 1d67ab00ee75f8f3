//! Account role types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission group attached to a set of login credentials.
///
/// Wire format in tokens and JSON: the variant name (`"Administrator"`, ...).
/// Stored in the database as `i16` (0 = Administrator, 1 = Provider, 2 = User).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrator = 0,
    Provider = 1,
    User = 2,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 3] = [Role::Administrator, Role::Provider, Role::User];

    /// Convert from the stored `i16` value. Returns `None` for unknown values.
    pub fn from_i16(v: i16) -> Option<Self> {
        match v {
            0 => Some(Self::Administrator),
            1 => Some(Self::Provider),
            2 => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        self as i16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Provider => "Provider",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
