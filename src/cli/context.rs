use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static STORE_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global store directory path.
/// If `custom` is provided, uses that path; otherwise defaults to `.sealstore`.
pub fn init(custom: Option<&str>) {
    let dir = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".sealstore"));
    let _ = STORE_DIR.set(dir);
}

/// Get the current store directory path.
pub fn store_dir() -> &'static Path {
    STORE_DIR
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new(".sealstore"))
}
