//! Error types for page initialization and preference storage.

/// Error returned while attaching the controller to the page.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// No `window` global; not running in a browser.
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// One or more required element ids are absent from the markup.
    #[error("missing required elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),
    /// The embedded site configuration block is not valid.
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Error from a [`PreferenceStore`](crate::util::storage::PreferenceStore).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or not exposed by the host.
    #[error("preference storage unavailable")]
    Unavailable,
    /// The host rejected a write (for example, quota exceeded).
    #[error("preference write rejected: {0}")]
    Write(String),
}
