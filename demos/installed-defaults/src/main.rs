// SPDX-License-Identifier: MIT OR Apache-2.0

use default_font_list::{fontdb, Platform, DEFAULT_FONT_LIST};

fn main() {
    env_logger::init();

    let mut db = fontdb::Database::new();
    {
        let now = std::time::Instant::now();
        db.load_system_fonts();
        log::info!(
            "Parsed {} font faces in {}ms.",
            db.len(),
            now.elapsed().as_millis()
        );
    }

    for (platform, families) in DEFAULT_FONT_LIST.iter() {
        let installed = DEFAULT_FONT_LIST.installed(platform, &db);
        println!("{} ({}/{} installed)", platform, installed.len(), families.len());
        for (i, family) in families.iter().enumerate() {
            let mark = if installed.contains(family) { '*' } else { ' ' };
            println!("  {mark} {i:>2} {family}");
        }
    }

    match Platform::current() {
        Some(platform) => match DEFAULT_FONT_LIST.first_installed(platform, &db) {
            Some(family) => println!("{platform} resolves to '{family}'"),
            None => println!("{platform} has none of its defaults installed"),
        },
        None => println!("no default list for this platform"),
    }
}
