//! `lpa tables` – list the tables managed by the plugin.

use lpa_core::location::KNOWN_TABLES;

pub fn run_tables() {
    for table in KNOWN_TABLES {
        println!("{}", table);
    }
}
