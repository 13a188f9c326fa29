// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::Platform;

mod cocoa;
mod windows;

/// The default font family lists for every platform
///
/// Each list is a fallback chain ordered by preference, index 0 being the most preferred
/// family. Order is significant and must be kept by anything that copies or serializes a list.
///
/// The table is `'static` data. Use [`DEFAULT_FONT_LIST`] rather than building one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefaultFontList {
    /// Fallback chain for Windows
    pub windows: &'static [&'static str],
    /// Fallback chain for Apple platforms (Cocoa)
    pub cocoa: &'static [&'static str],
}

/// The process-wide default font list
pub static DEFAULT_FONT_LIST: DefaultFontList = DefaultFontList {
    windows: windows::families(),
    cocoa: cocoa::families(),
};

impl DefaultFontList {
    /// The fallback chain for `platform`
    pub const fn families(&self, platform: Platform) -> &'static [&'static str] {
        match platform {
            Platform::Windows => self.windows,
            Platform::Cocoa => self.cocoa,
        }
    }

    /// The fallback chain for the platform the crate was compiled for
    ///
    /// Empty when [`Platform::current`] is `None`.
    pub const fn current(&self) -> &'static [&'static str] {
        match Platform::current() {
            Some(platform) => self.families(platform),
            None => &[],
        }
    }

    /// Iterate over every platform and its fallback chain, in table order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &'static [&'static str])> {
        let list = *self;
        Platform::ALL
            .into_iter()
            .map(move |platform| (platform, list.families(platform)))
    }

    /// Priority of `family` in the fallback chain for `platform`, 0 being the most preferred
    pub fn position(&self, platform: Platform, family: &str) -> Option<usize> {
        self.families(platform).iter().position(|name| *name == family)
    }

    pub fn contains(&self, platform: Platform, family: &str) -> bool {
        self.position(platform, family).is_some()
    }
}

impl Default for DefaultFontList {
    fn default() -> Self {
        DEFAULT_FONT_LIST
    }
}
