//! Host-declared platform capabilities.
//!
//! Hosts (Flutter shell, terminal) announce which UI capabilities exist on the
//! running platform. Parsing is strict so a typo cannot silently disable the
//! native share path.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Platform capability a host may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlatformCapability {
    NativeShare,
    Clipboard,
    Notification,
}

impl PlatformCapability {
    /// Stable string id used in host declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NativeShare => PLATFORM_CAPABILITY_SHARE,
            Self::Clipboard => PLATFORM_CAPABILITY_CLIPBOARD,
            Self::Notification => PLATFORM_CAPABILITY_NOTIFICATION,
        }
    }
}

/// Declaration string for the native share sheet.
pub const PLATFORM_CAPABILITY_SHARE: &str = "share";
/// Declaration string for clipboard writes.
pub const PLATFORM_CAPABILITY_CLIPBOARD: &str = "clipboard";
/// Declaration string for user notices.
pub const PLATFORM_CAPABILITY_NOTIFICATION: &str = "notification";

/// Parses one capability declaration.
pub fn parse_platform_capability(
    value: &str,
) -> Result<PlatformCapability, PlatformCapabilityError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(PlatformCapabilityError::EmptyCapability);
    }

    match normalized {
        PLATFORM_CAPABILITY_SHARE => Ok(PlatformCapability::NativeShare),
        PLATFORM_CAPABILITY_CLIPBOARD => Ok(PlatformCapability::Clipboard),
        PLATFORM_CAPABILITY_NOTIFICATION => Ok(PlatformCapability::Notification),
        other => Err(PlatformCapabilityError::UnsupportedCapability(other.to_string())),
    }
}

/// Parses a full host declaration list. Duplicates collapse.
pub fn parse_platform_capabilities<S: AsRef<str>>(
    values: &[S],
) -> Result<BTreeSet<PlatformCapability>, PlatformCapabilityError> {
    values
        .iter()
        .map(|value| parse_platform_capability(value.as_ref()))
        .collect()
}

/// Capability parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCapabilityError {
    EmptyCapability,
    UnsupportedCapability(String),
}

impl Display for PlatformCapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCapability => write!(f, "platform capability value must not be empty"),
            Self::UnsupportedCapability(value) => {
                write!(f, "platform capability is unsupported: {value}")
            }
        }
    }
}

impl Error for PlatformCapabilityError {}
