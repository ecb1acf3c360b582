use std::path::PathBuf;

use anyhow::Context;

/// Resolve paths starting with `.` against the current directory.
pub fn get_path(raw_path: &str) -> anyhow::Result<PathBuf> {
    if raw_path.starts_with('.') {
        let current_dir = std::env::current_dir().context("failed to read current directory")?;
        Ok(current_dir.join(raw_path))
    } else {
        Ok(PathBuf::from(raw_path))
    }
}

/// Render bytes as space separated hex pairs for debug logs.
pub fn hex_dump(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
