use thiserror::Error;

/// Failures raised by a media storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the upload directory failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Media storage I/O error on '{path}': {source}")]
    Io {
        /// Path that was being written or removed
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
