/// A file part read from a multipart request, held in memory until it is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// File name as sent by the client.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}
