//! Durable storage for the session record.
//!
//! One record under one fixed key; absence means logged out. In the browser
//! the record lives in `localStorage`, natively in a JSON file under the
//! platform data directory. Writes are best-effort: losing the record only
//! costs the user a new login. Unreadable or corrupt records load as `None`.

use crate::models::SessionRecord;

/// `localStorage` key for the browser record. Natively the record lives in
/// `<data_dir>/petclub/session.json` instead.
pub const SESSION_KEY: &str = "petclub.session";

/// Restore the persisted session, if any.
pub fn load() -> Option<SessionRecord> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
        parse_record(&raw)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        read_record(&session_path())
    }
}

/// Persist the session record.
pub fn save(record: &SessionRecord) {
    #[cfg(target_arch = "wasm32")]
    {
        if let (Some(storage), Ok(raw)) = (local_storage(), serde_json::to_string(record)) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        write_record(&session_path(), record);
    }
}

/// Drop the persisted session; a subsequent [`load`] yields `None`.
pub fn clear() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        remove_record(&session_path());
    }
}

fn parse_record(raw: &str) -> Option<SessionRecord> {
    match serde_json::from_str(raw) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::debug!("discarding unreadable session record: {e}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn session_path() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("petclub")
        .join("session.json")
}

#[cfg(not(target_arch = "wasm32"))]
fn read_record(path: &std::path::Path) -> Option<SessionRecord> {
    let raw = std::fs::read_to_string(path).ok()?;
    parse_record(&raw)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_record(path: &std::path::Path, record: &SessionRecord) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(raw) = serde_json::to_string(record) {
        let _ = std::fs::write(path, raw);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_record(path: &std::path::Path) {
    let _ = std::fs::remove_file(path);
}
