// SPDX-License-Identifier: MPL-2.0
//! Build script checking translation parity.
//!
//! Every `.ftl` file under `assets/i18n/` must define exactly the same set of
//! message ids. A locale with a missing or extra key fails the build.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const I18N_DIR: &str = "assets/i18n";

fn main() {
    println!("cargo:rerun-if-changed={I18N_DIR}");

    let mut reference: Option<(String, BTreeSet<String>)> = None;
    let mut entries: Vec<_> = fs::read_dir(I18N_DIR)
        .expect("assets/i18n directory is missing")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "ftl"))
        .collect();
    entries.sort();

    for path in entries {
        println!("cargo:rerun-if-changed={}", path.display());
        let ids = message_ids(&path);
        let name = path.display().to_string();

        match &reference {
            None => reference = Some((name, ids)),
            Some((ref_name, ref_ids)) => {
                let missing: Vec<_> = ref_ids.difference(&ids).collect();
                let extra: Vec<_> = ids.difference(ref_ids).collect();
                if !missing.is_empty() || !extra.is_empty() {
                    panic!(
                        "translation keys of {name} differ from {ref_name}: missing {missing:?}, extra {extra:?}"
                    );
                }
            }
        }
    }
}

/// Collects the ids of top-level messages (`id = value` lines) in a Fluent file.
fn message_ids(path: &Path) -> BTreeSet<String> {
    let content = fs::read_to_string(path).expect("failed to read translation file");
    content
        .lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '.', '[', '*', '}']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}
