use std::{fs, io, path::Path};

/// Ensure the parent directory of a *file path* exists (no-op if none).
///
/// SQLite won't create intermediate directories for a database file.
pub fn ensure_parent_dir<P: AsRef<Path>>(file_path: P) -> io::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Whether a `DATABASE_PATH` value is already a connection string rather than a file path.
pub fn is_connection_string(path_or_url: &str) -> bool {
    path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
}

/// Turns a `DATABASE_PATH` value into a connection string.
///
/// Values that already look like a DSN are passed through untouched; anything
/// else is treated as a SQLite file path opened in read-write-create mode.
pub fn sqlite_url(path_or_url: &str) -> String {
    if is_connection_string(path_or_url) {
        path_or_url.to_string()
    } else {
        format!("sqlite://{path_or_url}?mode=rwc")
    }
}
