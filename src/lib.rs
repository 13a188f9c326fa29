// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Default Font List
//!
//! Platform default font family lists, ordered by preference. Each list is a fallback chain:
//! the first family that resolves on the host wins.
//!
//! The table has one list per platform family, `windows` and `cocoa`. Pick one with a
//! [`Platform`], or let [`DefaultFontList::current`] pick the one matching the compile target.
//!
//! ```
//! use default_font_list::{Platform, DEFAULT_FONT_LIST};
//!
//! // Lists are ordered, the first entry is the most preferred family
//! let windows = DEFAULT_FONT_LIST.families(Platform::Windows);
//! assert_eq!(windows[0], "Microsoft YaHei");
//! assert_eq!(DEFAULT_FONT_LIST.position(Platform::Cocoa, "Helvetica"), Some(2));
//!
//! // Keep only what is installed, e.g. in a database filled by `load_system_fonts`
//! let db = default_font_list::fontdb::Database::new();
//! assert!(DEFAULT_FONT_LIST.installed(Platform::Cocoa, &db).is_empty());
//! assert_eq!(DEFAULT_FONT_LIST.first_installed(Platform::Cocoa, &db), None);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// re-export fontdb
pub use fontdb;

pub use self::defaults::*;
mod defaults;

pub use self::installed::*;
mod installed;

#[cfg(feature = "serde")]
pub use self::owned::*;
#[cfg(feature = "serde")]
mod owned;

pub use self::platform::*;
mod platform;
