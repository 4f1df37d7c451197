//! Target platform and architecture identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target platform recognized by the build orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinuxBsd,
    Windows,
    MacOs,
    Android,
    Ios,
    Web,
}

impl Platform {
    /// Parse a platform identifier string
    ///
    /// Returns `None` for identifiers the orchestrator does not recognize
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linuxbsd" => Some(Platform::LinuxBsd),
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOs),
            "android" => Some(Platform::Android),
            "ios" => Some(Platform::Ios),
            "web" => Some(Platform::Web),
            _ => None,
        }
    }

    /// Returns the platform name as used in build environment strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::LinuxBsd => "linuxbsd",
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
        }
    }

    /// Default target platform for the compiling host
    ///
    /// Returns `None` when the host OS maps to no desktop target
    pub fn host() -> Option<Self> {
        match std::env::consts::OS {
            "linux" | "freebsd" | "netbsd" | "openbsd" => Some(Platform::LinuxBsd),
            "windows" => Some(Platform::Windows),
            "macos" => Some(Platform::MacOs),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU architecture recognized by the build orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86_64,
    X86_32,
    Arm64,
    Arm32,
    Rv64,
    Wasm32,
}

impl Arch {
    /// Parse an architecture identifier string
    ///
    /// Returns `None` for identifiers the orchestrator does not recognize
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x86_64" => Some(Arch::X86_64),
            "x86_32" => Some(Arch::X86_32),
            "arm64" => Some(Arch::Arm64),
            "arm32" => Some(Arch::Arm32),
            "rv64" => Some(Arch::Rv64),
            "wasm32" => Some(Arch::Wasm32),
            _ => None,
        }
    }

    /// Returns the architecture name as used in build environment strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86_32 => "x86_32",
            Arch::Arm64 => "arm64",
            Arch::Arm32 => "arm32",
            Arch::Rv64 => "rv64",
            Arch::Wasm32 => "wasm32",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_through_as_str() {
        for platform in [
            Platform::LinuxBsd,
            Platform::Windows,
            Platform::MacOs,
            Platform::Android,
            Platform::Ios,
            Platform::Web,
        ] {
            assert_eq!(Platform::parse(platform.as_str()), Some(platform));
        }

        for arch in [
            Arch::X86_64,
            Arch::X86_32,
            Arch::Arm64,
            Arch::Arm32,
            Arch::Rv64,
            Arch::Wasm32,
        ] {
            assert_eq!(Arch::parse(arch.as_str()), Some(arch));
        }
    }

    #[test]
    fn host_maps_to_supported_platform() {
        // Verifies we're running on a host with a default target
        assert!(Platform::host().is_some(), "Current host should map to a target");

        #[cfg(target_os = "linux")]
        assert_eq!(Platform::host(), Some(Platform::LinuxBsd));
        #[cfg(target_os = "windows")]
        assert_eq!(Platform::host(), Some(Platform::Windows));
        #[cfg(target_os = "macos")]
        assert_eq!(Platform::host(), Some(Platform::MacOs));
    }

    #[test]
    fn unknown_identifiers_parse_to_none() {
        assert_eq!(Platform::parse("haiku"), None);
        assert_eq!(Platform::parse(""), None);
        // Identifiers are case-sensitive, matching the orchestrator's vocabulary
        assert_eq!(Platform::parse("Windows"), None);
        assert_eq!(Arch::parse("x64"), None);
        assert_eq!(Arch::parse(""), None);
    }

    #[test]
    fn serde_uses_lowercase_identifiers() {
        assert_eq!(serde_json::to_string(&Platform::LinuxBsd).unwrap(), "\"linuxbsd\"");
        assert_eq!(serde_json::to_string(&Arch::X86_64).unwrap(), "\"x86_64\"");

        let platform: Platform = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(platform, Platform::MacOs);
    }
}
