//! Typed failures for range parsing and expansion.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RangeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Malformed hyphen or plain form, or an octet out of bounds.
    #[error("invalid range '{token}': {reason}")]
    InvalidRange { token: String, reason: String },

    /// Bad prefix length or network address in CIDR form.
    #[error("invalid CIDR '{token}': {reason}")]
    InvalidCidr { token: String, reason: String },

    /// Substituting the wildcards did not produce valid addresses.
    #[error("invalid wildcard range '{token}'")]
    InvalidWildcardRange { token: String },

    /// One token of a list failed; `position` is 1-based.
    #[error("invalid range list: token #{position} '{token}' rejected")]
    InvalidRangeList {
        position: usize,
        token: String,
        #[source]
        source: Box<RangeError>,
    },

    /// Eager expansion refused because the caller's limit is lower than the count.
    #[error("range holds {count} addresses, more than the limit of {limit}")]
    RangeTooLarge { count: u64, limit: u64 },
}

impl RangeError {
    pub(crate) fn range(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn cidr(token: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCidr {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// The token text that caused the failure, if there is one.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::InvalidRange { token, .. }
            | Self::InvalidCidr { token, .. }
            | Self::InvalidWildcardRange { token }
            | Self::InvalidRangeList { token, .. } => Some(token),
            Self::RangeTooLarge { .. } => None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
