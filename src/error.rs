use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Failed to access journal file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Journal file {path} is not a valid snapshot: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
