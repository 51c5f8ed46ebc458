//! `lpa widgets` – show the three search widget registrations.

use lpa_core::config::LpaConfig;
use lpa_core::location::MountPrefix;
use lpa_core::search::register_widgets;

pub fn run_widgets(cfg: &LpaConfig, prefix: Option<&str>) {
    let prefix = prefix
        .or(cfg.mount_prefix.as_deref())
        .map(MountPrefix::verbatim)
        .unwrap_or_default();
    println!("{:<16} {:<22} {:<18} {}", "KIND", "ELEMENT", "PLACEHOLDER", "URL");
    for w in register_widgets(&prefix) {
        println!(
            "{:<16} {:<22} {:<18} {}",
            w.kind, w.element_id, w.placeholder, w.url
        );
    }
}
