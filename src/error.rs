use serde::Serialize;

/// Failures while fetching or decoding the glossary document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error reading glossary: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error fetching glossary: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Glossary request to {url} failed with HTTP {status}")]
    Status { status: u16, url: String },

    #[error("Glossary document exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Malformed glossary document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Shot at position {index} has an empty name")]
    EmptyShotName { index: usize },

    #[error("Shot name \"{0}\" appears more than once")]
    DuplicateShot(String),
}

/// All errors surfaced by the tagger.
#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No shot button at index {0}")]
    UnknownShotButton(usize),

    #[error("No shot type named \"{0}\"")]
    UnknownShotType(String),

    #[error("Invalid shot timing: {0}")]
    InvalidShotTiming(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Custom(String),
}

// Tauri requires error types to implement Serialize for IPC transport.
impl Serialize for TaggerError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaggerError>;
