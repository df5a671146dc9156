use std::sync::Mutex;

use tracing::debug;

/// The externally supplied, HTML5-style history object the route table is
/// mounted on. The table configures it, never implements it: matching and
/// navigation lifecycle stay with the host.
pub trait History: Send + Sync {
    /// The base URL prefix the application is served under, without a
    /// trailing slash (`""` when mounted at the root).
    fn base(&self) -> &str;

    /// The current location, relative to the base.
    fn location(&self) -> String;

    /// Pushes a new entry onto the history stack.
    fn push(&self, path: &str);

    /// Replaces the current entry.
    fn replace(&self, path: &str);
}

/// History mount for a browser host: holds the base URL supplied by the
/// hosting build environment and tracks the current location. The real
/// stack manipulation happens in the host.
pub struct WebHistory {
    base: String,
    current: Mutex<String>,
}

impl WebHistory {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: normalize_base(base.into()),
            current: Mutex::new("/".to_string()),
        }
    }
}

impl History for WebHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn push(&self, path: &str) {
        debug!(path, "history push");
        *self.current.lock().unwrap() = path.to_string();
    }

    fn replace(&self, path: &str) {
        debug!(path, "history replace");
        *self.current.lock().unwrap() = path.to_string();
    }
}

/// In-process history stack for tests and demos.
pub struct MemoryHistory {
    base: String,
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::with_base("")
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: normalize_base(base.into()),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded history stack.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        self.entries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, path: &str) {
        self.entries.lock().unwrap().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.pop();
        entries.push(path.to_string());
    }
}

fn normalize_base(base: String) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
