#![allow(dead_code)]

use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

/// A scratch file path unique to this test process.
pub fn scratch(name: &str) -> String {
    let path = std::env::temp_dir().join(format!("nested-a11y-ids-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_file(&path);
    path.display().to_string()
}
