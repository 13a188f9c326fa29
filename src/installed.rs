// SPDX-License-Identifier: MIT OR Apache-2.0

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use fontdb::{Database, Family};

use crate::{DefaultFontList, Platform};

// Every family name declared by a face in `db`, including localized names
fn face_families(db: &Database) -> BTreeSet<&str> {
    db.faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect()
}

/// Entries of `families` that some face in `db` declares, in the order of `families`
///
/// Names are compared exactly. Missing families are skipped and logged at debug level.
pub fn installed_families(db: &Database, families: &[&'static str]) -> Vec<&'static str> {
    let available = face_families(db);

    let installed: Vec<&'static str> = families
        .iter()
        .copied()
        .filter(|family| {
            let found = available.contains(family);
            if !found {
                log::debug!("failed to find family '{}'", family);
            }
            found
        })
        .collect();

    log::debug!(
        "found {}/{} default families in {} font faces",
        installed.len(),
        families.len(),
        db.len()
    );

    installed
}

/// The first entry of `families` that some face in `db` declares
///
/// This is where a fallback chain over `families` settles.
pub fn first_installed(db: &Database, families: &[&'static str]) -> Option<&'static str> {
    let available = face_families(db);
    let first = families
        .iter()
        .copied()
        .find(|family| available.contains(family));
    if first.is_none() {
        log::warn!(
            "none of {} default families found in {} font faces",
            families.len(),
            db.len()
        );
    }
    first
}

/// `families` as [`fontdb::Family::Name`] values, in order, for use in a [`fontdb::Query`]
pub fn query_families(families: &[&'static str]) -> Vec<Family<'static>> {
    families.iter().map(|&name| Family::Name(name)).collect()
}

impl DefaultFontList {
    /// The installed part of the fallback chain for `platform`, in preference order
    pub fn installed(&self, platform: Platform, db: &Database) -> Vec<&'static str> {
        installed_families(db, self.families(platform))
    }

    /// The most preferred installed family for `platform`
    pub fn first_installed(&self, platform: Platform, db: &Database) -> Option<&'static str> {
        first_installed(db, self.families(platform))
    }
}
