use web_sys::window;

/// The single key-value slot the project list persists into. Abstracted so
/// the store logic runs identically against browser local storage and an
/// in-memory slot under test.
pub trait ProjectStorage {
    fn read(&self) -> Option<String>;
    /// Write the whole blob. A failed write is reported but never fatal;
    /// the in-memory list stays authoritative for the session.
    fn write(&mut self, blob: &str) -> bool;
}

/// `window.localStorage` under the configured key.
pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    /// None when local storage is unavailable (sandboxed frame, privacy
    /// mode); callers fall back to [`MemoryBackend`].
    pub fn open(key: &str) -> Option<LocalStorageBackend> {
        let available = window()?.local_storage().ok().flatten().is_some();
        if available {
            Some(LocalStorageBackend { key: key.to_string() })
        } else {
            None
        }
    }

    fn slot(&self) -> Option<web_sys::Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl ProjectStorage for LocalStorageBackend {
    fn read(&self) -> Option<String> {
        self.slot()?.get_item(&self.key).ok().flatten()
    }

    fn write(&mut self, blob: &str) -> bool {
        match self.slot() {
            Some(slot) => slot.set_item(&self.key, blob).is_ok(),
            None => false,
        }
    }
}

/// Session-only slot; also the test backend.
#[derive(Default)]
pub struct MemoryBackend {
    slot: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> MemoryBackend {
        MemoryBackend { slot: None }
    }

    pub fn with_blob(blob: &str) -> MemoryBackend {
        MemoryBackend { slot: Some(blob.to_string()) }
    }
}

impl ProjectStorage for MemoryBackend {
    fn read(&self) -> Option<String> {
        self.slot.clone()
    }

    fn write(&mut self, blob: &str) -> bool {
        self.slot = Some(blob.to_string());
        true
    }
}
