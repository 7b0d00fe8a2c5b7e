use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("webp encode failed: {0}")]
    Encode(String),

    #[error("write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
