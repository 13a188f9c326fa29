// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::DefaultFontList;

/// An owned copy of a [`DefaultFontList`], for deserializing the table
///
/// Serializes with the same shape as [`DefaultFontList`]: a `windows` and a `cocoa` field, each a
/// list of family names in preference order.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultFontListOwned {
    pub windows: Vec<String>,
    pub cocoa: Vec<String>,
}

impl From<&DefaultFontList> for DefaultFontListOwned {
    fn from(list: &DefaultFontList) -> Self {
        let to_owned = |families: &[&str]| -> Vec<String> {
            families.iter().map(|name| name.to_string()).collect()
        };
        Self {
            windows: to_owned(list.windows),
            cocoa: to_owned(list.cocoa),
        }
    }
}

impl PartialEq<DefaultFontList> for DefaultFontListOwned {
    fn eq(&self, other: &DefaultFontList) -> bool {
        self.windows.iter().eq(other.windows.iter().copied())
            && self.cocoa.iter().eq(other.cocoa.iter().copied())
    }
}
