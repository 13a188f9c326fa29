// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

/// Platform family a default font list applies to
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Platform {
    /// Windows and its font stack (DirectWrite, GDI)
    Windows,
    /// Apple platforms using Cocoa and Core Text
    Cocoa,
}

impl Platform {
    /// Every platform, in the order the table stores them
    pub const ALL: [Self; 2] = [Self::Windows, Self::Cocoa];

    /// The platform the crate was compiled for, if it has a default list
    #[cfg(target_os = "windows")]
    pub const fn current() -> Option<Self> {
        Some(Self::Windows)
    }

    /// The platform the crate was compiled for, if it has a default list
    #[cfg(target_vendor = "apple")]
    pub const fn current() -> Option<Self> {
        Some(Self::Cocoa)
    }

    /// The platform the crate was compiled for, if it has a default list
    #[cfg(not(any(target_os = "windows", target_vendor = "apple")))]
    pub const fn current() -> Option<Self> {
        None
    }

    /// Name of the table field holding this platform's list
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Cocoa => "cocoa",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform name that is not one of the known platforms or aliases
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown platform '{name}', expected 'windows' or 'cocoa'")]
pub struct ParsePlatformError {
    name: String,
}

impl ParsePlatformError {
    /// The input that failed to parse
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let matches = |aliases: &[&str]| aliases.iter().any(|a| a.eq_ignore_ascii_case(name));

        if matches(&["windows", "win", "win32"]) {
            Ok(Self::Windows)
        } else if matches(&["cocoa", "macos", "osx", "darwin", "apple", "ios"]) {
            Ok(Self::Cocoa)
        } else {
            Err(ParsePlatformError {
                name: s.to_string(),
            })
        }
    }
}
